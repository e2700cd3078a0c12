//! Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use thali::orders::OrderId;

use crate::{
    extensions::*,
    orders::{OrderResponse, StatusUpdateRequest, errors::into_status_error},
    state::State,
};

/// Order Status Handler
///
/// Any status may replace any other.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
    ),
)]
#[tracing::instrument(name = "orders.status", skip_all, fields(order_id = *id), err)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<StatusUpdateRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.admin_or_403()?;

    let status = json.into_inner().parse()?;

    let order = state
        .app
        .orders
        .update_order_status(OrderId::new(id.into_inner()), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;
    use thali::{orders::OrderStatus, users::UserId};

    use crate::test_helpers::{Mocks, TEST_TOKEN, admin, customer, order};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("orders/{id}/status").patch(handler))
    }

    #[tokio::test]
    async fn test_admin_updates_status() -> TestResult {
        let mut mocks = Mocks::signed_in(admin());

        mocks
            .orders
            .expect_update_order_status()
            .once()
            .withf(|id, status| *id == OrderId::new(3) && *status == OrderStatus::Delivered)
            .return_once(|id, status| {
                let mut updated = order(id.get(), UserId::new(1));
                updated.status = status;

                Ok(updated)
            });

        let mut res = TestClient::patch("http://example.com/orders/3/status")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .json(&json!({ "status": "delivered" }))
            .send(&make_service(mocks))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.status, "delivered");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() -> TestResult {
        let mut mocks = Mocks::signed_in(admin());

        mocks.orders.expect_update_order_status().never();

        let res = TestClient::patch("http://example.com/orders/3/status")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .json(&json!({ "status": "shipped" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_gets_403() -> TestResult {
        let mut mocks = Mocks::signed_in(customer());

        mocks.orders.expect_update_order_status().never();

        let res = TestClient::patch("http://example.com/orders/3/status")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .json(&json!({ "status": "delivered" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
