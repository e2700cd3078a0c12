//! Update Food Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use thali::catalog::FoodItemId;

use crate::{
    extensions::*,
    foods::{FoodResponse, UpdateFoodRequest, errors::into_status_error},
    state::State,
};

/// Update Food Handler
///
/// Merges the present fields into the stored item.
#[endpoint(
    tags("foods"),
    summary = "Update Food Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Food item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Food item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
    ),
)]
#[tracing::instrument(name = "foods.update", skip_all, fields(food_id = *id), err)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateFoodRequest>,
    depot: &mut Depot,
) -> Result<Json<FoodResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.admin_or_403()?;

    let item = state
        .app
        .foods
        .update_food(FoodItemId::new(id.into_inner()), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(food_id = %item.id, "updated food item");

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;
    use thali_app::domain::foods::FoodsServiceError;

    use crate::test_helpers::{Mocks, TEST_TOKEN, admin, customer, food};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("foods/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_food_merges_fields() -> TestResult {
        let mut mocks = Mocks::signed_in(admin());

        mocks
            .foods
            .expect_update_food()
            .once()
            .withf(|id, update| {
                *id == FoodItemId::new(2)
                    && update.price == Some(Decimal::from(95))
                    && update.name.is_none()
            })
            .return_once(|_, _| Ok(food(2, 95)));

        let mut res = TestClient::put("http://example.com/foods/2")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .json(&json!({ "price": 95 }))
            .send(&make_service(mocks))
            .await;

        let body: FoodResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.price, Decimal::from(95));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_food_returns_404() -> TestResult {
        let mut mocks = Mocks::signed_in(admin());

        mocks
            .foods
            .expect_update_food()
            .once()
            .return_once(|_, _| Err(FoodsServiceError::NotFound));

        let res = TestClient::put("http://example.com/foods/99")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .json(&json!({ "isAvailable": false }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_food_customer_returns_403() -> TestResult {
        let mut mocks = Mocks::signed_in(customer());

        mocks.foods.expect_update_food().never();

        let res = TestClient::put("http://example.com/foods/2")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .json(&json!({ "price": 95 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
