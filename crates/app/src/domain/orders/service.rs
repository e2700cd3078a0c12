//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use thali::{
    orders::{NewOrder, Order, OrderId, OrderStatus},
    users::UserId,
    validation::Validate,
};
use tracing::info;

use crate::{database::Db, domain::orders::errors::OrdersServiceError};

#[derive(Debug, Clone)]
pub struct MemOrdersService {
    db: Db,
}

impl MemOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrdersService for MemOrdersService {
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.db.orders().all().await)
    }

    async fn list_orders_by_user(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.db.orders().filter(|order| order.user_id == user).await)
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, OrdersServiceError> {
        self.db
            .orders()
            .get(id)
            .await
            .ok_or(OrdersServiceError::NotFound)
    }

    async fn create_order(
        &self,
        user: UserId,
        order: NewOrder,
    ) -> Result<Order, OrdersServiceError> {
        order.validate()?;

        let created = self
            .db
            .orders()
            .insert_with(|id| order.into_order(id, user, Timestamp::now()))
            .await;

        info!(
            order_id = %created.id,
            user_id = %created.user_id,
            total = %created.total_amount,
            lines = created.items.len(),
            "order created"
        );

        Ok(created)
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut rows = self.db.orders().write().await;
        let order = rows.get_mut(&id).ok_or(OrdersServiceError::NotFound)?;

        info!(order_id = %id, from = %order.status, to = %status, "order status changed");

        order.status = status;

        Ok(order.clone())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves every order in id order.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieves the orders placed by `user`.
    async fn list_orders_by_user(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, id: OrderId) -> Result<Order, OrdersServiceError>;

    /// Validates and stores an order owned by `user`, stamping the order date.
    async fn create_order(
        &self,
        user: UserId,
        order: NewOrder,
    ) -> Result<Order, OrdersServiceError>;

    /// Sets the status. Any status may replace any other.
    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}
