//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use thali::orders::OrderId;

use crate::{
    extensions::*,
    orders::{OrderResponse, errors::into_status_error},
    state::State,
};

/// Get Order Handler
///
/// Visible to the order's owner and to administrators.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
        (status_code = StatusCode::FORBIDDEN, description = "Order belongs to another account"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let order = state
        .app
        .orders
        .get_order(OrderId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    if order.user_id != user.id && !user.is_admin {
        return Err(StatusError::forbidden().brief("Access denied"));
    }

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use thali::users::UserId;
    use thali_app::domain::orders::OrdersServiceError;

    use crate::test_helpers::{Mocks, TEST_TOKEN, admin, customer, order};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("orders/{id}").get(handler))
    }

    async fn fetch(mocks: Mocks, id: i64) -> salvo::Response {
        TestClient::get(format!("http://example.com/orders/{id}"))
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .send(&make_service(mocks))
            .await
    }

    #[tokio::test]
    async fn test_owner_sees_order() -> TestResult {
        let owner = customer().id;
        let mut mocks = Mocks::signed_in(customer());

        mocks
            .orders
            .expect_get_order()
            .once()
            .withf(|id| *id == OrderId::new(8))
            .return_once(move |_| Ok(order(8, owner)));

        let mut res = fetch(mocks, 8).await;
        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.id, 8);

        Ok(())
    }

    #[tokio::test]
    async fn test_non_owner_gets_403() -> TestResult {
        let mut mocks = Mocks::signed_in(customer());

        mocks
            .orders
            .expect_get_order()
            .once()
            .return_once(|_| Ok(order(8, UserId::new(500))));

        let res = fetch(mocks, 8).await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_sees_any_order() -> TestResult {
        let mut mocks = Mocks::signed_in(admin());

        mocks
            .orders
            .expect_get_order()
            .once()
            .return_once(|_| Ok(order(8, UserId::new(500))));

        let res = fetch(mocks, 8).await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_order_returns_404() -> TestResult {
        let mut mocks = Mocks::signed_in(customer());

        mocks
            .orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let res = fetch(mocks, 8).await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
