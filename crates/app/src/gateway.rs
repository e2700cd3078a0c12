//! In-process order gateway.

use std::sync::Arc;

use async_trait::async_trait;
use thali::{
    checkout::{GatewayError, OrderGateway},
    orders::{NewOrder, Order},
    users::UserId,
};

use crate::domain::orders::{OrdersService, OrdersServiceError};

/// Submits checkout requests straight to an [`OrdersService`] on behalf of
/// one user.
#[derive(Clone)]
pub struct ServiceOrderGateway {
    orders: Arc<dyn OrdersService>,
    user: UserId,
}

impl ServiceOrderGateway {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersService>, user: UserId) -> Self {
        Self { orders, user }
    }
}

#[async_trait]
impl OrderGateway for ServiceOrderGateway {
    async fn place_order(&self, order: NewOrder) -> Result<Order, GatewayError> {
        self.orders
            .create_order(self.user, order)
            .await
            .map_err(|error| match error {
                OrdersServiceError::Invalid(errors) => GatewayError::Rejected(errors.to_string()),
                other @ OrdersServiceError::NotFound => GatewayError::Unavailable(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;
    use thali::{
        cart::{Cart, storage::MemorySlot},
        checkout::{CheckoutError, CheckoutForm, place_order},
        orders::PaymentMethod,
        pricing::Pricing,
    };

    use crate::{
        domain::{foods::FoodsService, orders::MockOrdersService},
        test::{TestContext, helpers::new_food},
    };

    use super::*;

    fn form() -> CheckoutForm {
        CheckoutForm {
            delivery_address: "4 Park Street, Kolkata".to_string(),
            contact_phone: "9830012345".to_string(),
            payment_method: PaymentMethod::Card,
            special_instructions: None,
        }
    }

    #[tokio::test]
    async fn checkout_stores_one_order_and_empties_cart() -> TestResult {
        let ctx = TestContext::new();
        let dish = ctx.foods.create_food(new_food("Veg Thali", 250, "punjabi")).await?;
        let gateway = ServiceOrderGateway::new(Arc::new(ctx.orders.clone()), UserId::new(7));

        let mut cart = Cart::new(MemorySlot::new());
        cart.add_item(&dish);
        cart.update_quantity(dish.id, 4);

        let order = place_order(&mut cart, &form(), &Pricing::default(), &gateway).await?;

        assert!(cart.state().is_empty());
        assert_eq!(order.total_amount, Decimal::from(1090));
        assert_eq!(order.user_id, UserId::new(7));

        let stored = ctx.orders.list_orders().await?;

        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].total_amount, Decimal::from(1090));
        assert_eq!(stored[0].items[0].quantity, 4);

        Ok(())
    }

    #[tokio::test]
    async fn rejected_order_keeps_cart() -> TestResult {
        let ctx = TestContext::new();
        let idli = ctx.foods.create_food(new_food("Idli", 80, "south-indian")).await?;

        let mut orders = MockOrdersService::new();
        orders
            .expect_create_order()
            .returning(|_, _| Err(OrdersServiceError::NotFound));

        let gateway = ServiceOrderGateway::new(Arc::new(orders), UserId::new(1));

        let mut cart = Cart::new(MemorySlot::new());
        cart.add_item(&idli);

        let result = place_order(&mut cart, &form(), &Pricing::default(), &gateway).await;

        assert!(matches!(
            result,
            Err(CheckoutError::Gateway(GatewayError::Unavailable(_)))
        ));
        assert_eq!(cart.state().total_items(), 1);

        Ok(())
    }
}
