//! Test Helpers

use rust_decimal::Decimal;
use thali::{
    catalog::{FoodItemId, NewFoodItem},
    orders::{NewOrder, OrderLine, OrderStatus, PaymentMethod},
    users::NewUser,
};

pub(crate) fn new_food(name: &str, price: i64, category: &str) -> NewFoodItem {
    NewFoodItem {
        name: name.to_string(),
        description: format!("{name}, freshly made"),
        price: Decimal::from(price),
        image_url: format!("https://images.example/{}.jpg", name.to_lowercase()),
        category: category.to_string(),
        is_available: true,
        is_vegetarian: true,
    }
}

/// A single-line order whose total is `price * quantity`.
pub(crate) fn new_order(quantity: u32, price: i64) -> NewOrder {
    let price = Decimal::from(price);

    NewOrder {
        items: vec![OrderLine {
            food_item_id: FoodItemId::new(1),
            quantity,
            price,
        }],
        total_amount: price * Decimal::from(quantity),
        status: OrderStatus::Pending,
        delivery_address: "12 MG Road, Bengaluru".to_string(),
        payment_method: PaymentMethod::Cash,
        contact_phone: None,
        special_instructions: None,
    }
}

pub(crate) fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "password123".to_string(),
        name: format!("{username} test"),
        email: format!("{username}@example.com"),
        phone: None,
        address: None,
    }
}
