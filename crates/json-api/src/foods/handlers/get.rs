//! Get Food Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use thali::catalog::FoodItemId;

use crate::{
    extensions::*,
    foods::{FoodResponse, errors::into_status_error},
    state::State,
};

/// Get Food Handler
#[endpoint(
    tags("foods"),
    summary = "Get Food Item",
    responses(
        (status_code = StatusCode::OK, description = "Food item found"),
        (status_code = StatusCode::NOT_FOUND, description = "Food item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<FoodResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .foods
        .get_food(FoodItemId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use thali_app::domain::foods::FoodsServiceError;

    use crate::test_helpers::{Mocks, food};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("foods/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_food_success() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .foods
            .expect_get_food()
            .once()
            .withf(|id| *id == FoodItemId::new(4))
            .return_once(|_| Ok(food(4, 150)));

        let mut res = TestClient::get("http://example.com/foods/4")
            .send(&make_service(mocks))
            .await;

        let body: FoodResponse = res.take_json().await?;

        assert_eq!(body, FoodResponse::from(food(4, 150)));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_food_not_found_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .foods
            .expect_get_food()
            .once()
            .return_once(|_| Err(FoodsServiceError::NotFound));

        let res = TestClient::get("http://example.com/foods/40")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_food_invalid_id_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/foods/idli")
            .send(&make_service(Mocks::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
