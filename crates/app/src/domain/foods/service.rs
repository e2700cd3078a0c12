//! Foods service.

use async_trait::async_trait;
use mockall::automock;
use thali::{
    catalog::{FoodItem, FoodItemId, FoodItemUpdate, NewFoodItem},
    validation::Validate,
};
use tracing::debug;

use crate::{database::Db, domain::foods::errors::FoodsServiceError};

#[derive(Debug, Clone)]
pub struct MemFoodsService {
    db: Db,
}

impl MemFoodsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodsService for MemFoodsService {
    async fn list_foods(&self) -> Result<Vec<FoodItem>, FoodsServiceError> {
        Ok(self.db.foods().all().await)
    }

    async fn list_foods_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<FoodItem>, FoodsServiceError> {
        Ok(self
            .db
            .foods()
            .filter(|item| item.category == category)
            .await)
    }

    async fn get_food(&self, id: FoodItemId) -> Result<FoodItem, FoodsServiceError> {
        self.db
            .foods()
            .get(id)
            .await
            .ok_or(FoodsServiceError::NotFound)
    }

    async fn create_food(&self, item: NewFoodItem) -> Result<FoodItem, FoodsServiceError> {
        item.validate()?;

        let created = self
            .db
            .foods()
            .insert_with(|id| item.into_food_item(id))
            .await;

        debug!(food_id = %created.id, name = %created.name, "food item created");

        Ok(created)
    }

    async fn update_food(
        &self,
        id: FoodItemId,
        update: FoodItemUpdate,
    ) -> Result<FoodItem, FoodsServiceError> {
        update.validate()?;

        let mut rows = self.db.foods().write().await;
        let item = rows.get_mut(&id).ok_or(FoodsServiceError::NotFound)?;

        update.apply_to(item);

        Ok(item.clone())
    }

    async fn delete_food(&self, id: FoodItemId) -> Result<(), FoodsServiceError> {
        self.db
            .foods()
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(FoodsServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait FoodsService: Send + Sync {
    /// Retrieves the whole catalog in id order.
    async fn list_foods(&self) -> Result<Vec<FoodItem>, FoodsServiceError>;

    /// Retrieves items whose category matches exactly.
    async fn list_foods_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<FoodItem>, FoodsServiceError>;

    /// Retrieve a single item.
    async fn get_food(&self, id: FoodItemId) -> Result<FoodItem, FoodsServiceError>;

    /// Validates and stores a new item under a fresh id.
    async fn create_food(&self, item: NewFoodItem) -> Result<FoodItem, FoodsServiceError>;

    /// Merges the present fields of `update` into the stored item.
    async fn update_food(
        &self,
        id: FoodItemId,
        update: FoodItemUpdate,
    ) -> Result<FoodItem, FoodsServiceError>;

    /// Removes an item. Orders referencing it keep their snapshots.
    async fn delete_food(&self, id: FoodItemId) -> Result<(), FoodsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_food};

    use super::*;

    #[tokio::test]
    async fn create_food_assigns_sequential_ids() -> TestResult {
        let ctx = TestContext::new();

        let first = ctx.foods.create_food(new_food("Idli", 80, "south-indian")).await?;
        let second = ctx.foods.create_food(new_food("Vada", 60, "south-indian")).await?;

        assert_eq!(first.id, FoodItemId::new(1));
        assert_eq!(second.id, FoodItemId::new(2));

        Ok(())
    }

    #[tokio::test]
    async fn create_food_rejects_invalid_item() {
        let ctx = TestContext::new();

        let result = ctx.foods.create_food(new_food("", 0, "punjabi")).await;

        assert!(
            matches!(result, Err(FoodsServiceError::Invalid(_))),
            "expected Invalid, got {result:?}"
        );
        assert!(ctx.db.foods().all().await.is_empty());
    }

    #[tokio::test]
    async fn list_by_category_matches_exactly() -> TestResult {
        let ctx = TestContext::new();

        ctx.foods.create_food(new_food("Idli", 80, "south-indian")).await?;
        ctx.foods.create_food(new_food("Dal Makhani", 160, "punjabi")).await?;
        ctx.foods.create_food(new_food("Chole", 150, "punjabi")).await?;

        let punjabi = ctx.foods.list_foods_by_category("punjabi").await?;
        let partial = ctx.foods.list_foods_by_category("punj").await?;

        assert_eq!(punjabi.len(), 2);
        assert!(partial.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn update_food_merges_fields() -> TestResult {
        let ctx = TestContext::new();
        let created = ctx.foods.create_food(new_food("Uttapam", 100, "south-indian")).await?;

        let updated = ctx
            .foods
            .update_food(
                created.id,
                FoodItemUpdate {
                    price: Some(Decimal::from(110)),
                    ..FoodItemUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.name, "Uttapam");
        assert_eq!(updated.price, Decimal::from(110));
        assert_eq!(ctx.foods.get_food(created.id).await?, updated);

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_food_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx
            .foods
            .update_food(FoodItemId::new(42), FoodItemUpdate::default())
            .await;

        assert!(matches!(result, Err(FoodsServiceError::NotFound)));
    }

    #[tokio::test]
    async fn delete_food_removes_item() -> TestResult {
        let ctx = TestContext::new();
        let created = ctx.foods.create_food(new_food("Vada", 60, "south-indian")).await?;

        ctx.foods.delete_food(created.id).await?;

        assert!(matches!(
            ctx.foods.get_food(created.id).await,
            Err(FoodsServiceError::NotFound)
        ));
        assert!(matches!(
            ctx.foods.delete_food(created.id).await,
            Err(FoodsServiceError::NotFound)
        ));

        Ok(())
    }
}
