//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use thali::{
    catalog::{FoodItem, FoodItemId},
    orders::{Order, OrderId, OrderLine, OrderStatus, PaymentMethod},
    users::{User, UserId},
};
use thali_app::{
    auth::MockSessionsService,
    context::AppContext,
    domain::{foods::MockFoodsService, orders::MockOrdersService, users::MockUsersService},
};

use crate::{auth, state::State};

/// Bearer token accepted by [`Mocks::signed_in`].
pub(crate) const TEST_TOKEN: &str = "ts_test";

/// One strict mock per service. Unexpected calls fail the test.
pub(crate) struct Mocks {
    pub foods: MockFoodsService,
    pub orders: MockOrdersService,
    pub users: MockUsersService,
    pub sessions: MockSessionsService,
}

impl Mocks {
    pub(crate) fn new() -> Self {
        Self {
            foods: MockFoodsService::new(),
            orders: MockOrdersService::new(),
            users: MockUsersService::new(),
            sessions: MockSessionsService::new(),
        }
    }

    /// Requests carrying [`TEST_TOKEN`] resolve to `user`.
    pub(crate) fn signed_in(user: User) -> Self {
        let mut mocks = Self::new();

        mocks
            .sessions
            .expect_authenticate()
            .withf(|token| token == TEST_TOKEN)
            .returning(move |_| Ok(user.clone()));

        mocks
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            foods: Arc::new(self.foods),
            orders: Arc::new(self.orders),
            users: Arc::new(self.users),
            sessions: Arc::new(self.sessions),
        })
    }

    /// Wraps `route` with state injection and the session middleware.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(auth::middleware::handler)
                .push(route),
        )
    }
}

pub(crate) fn customer() -> User {
    User {
        id: UserId::new(1),
        username: "asha".to_string(),
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: Some("9876543210".to_string()),
        address: Some("12 MG Road, Bengaluru".to_string()),
        is_admin: false,
    }
}

pub(crate) fn admin() -> User {
    User {
        id: UserId::new(99),
        username: "admin".to_string(),
        name: "Administrator".to_string(),
        email: "admin@localhost".to_string(),
        phone: None,
        address: None,
        is_admin: true,
    }
}

pub(crate) fn food(id: i64, price: i64) -> FoodItem {
    FoodItem {
        id: FoodItemId::new(id),
        name: format!("Dish {id}"),
        description: "House special".to_string(),
        price: Decimal::from(price),
        image_url: format!("https://images.example/{id}.jpg"),
        category: "north-indian".to_string(),
        is_available: true,
        is_vegetarian: true,
    }
}

pub(crate) fn order(id: i64, user_id: UserId) -> Order {
    Order {
        id: OrderId::new(id),
        user_id,
        items: vec![OrderLine {
            food_item_id: FoodItemId::new(1),
            quantity: 4,
            price: Decimal::from(250),
        }],
        total_amount: Decimal::from(1090),
        status: OrderStatus::Pending,
        delivery_address: "4 Park Street, Kolkata".to_string(),
        payment_method: PaymentMethod::Card,
        contact_phone: None,
        special_instructions: None,
        order_date: Timestamp::UNIX_EPOCH,
    }
}
