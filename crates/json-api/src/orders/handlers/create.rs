//! Create Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    orders::{CreateOrderRequest, OrderResponse, errors::into_status_error},
    state::State,
};

/// Create Order Handler
///
/// Stores an order owned by the signed-in account.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip_all,
    fields(user_id = tracing::field::Empty, order_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;
    let request = json.into_inner().into_new_order()?;

    let span = tracing::Span::current();

    span.record("user_id", tracing::field::display(user.id));

    let order = state
        .app
        .orders
        .create_order(user.id, request)
        .await
        .map_err(into_status_error)?;

    span.record("order_id", tracing::field::display(order.id));

    res.add_header(LOCATION, format!("/api/orders/{}", order.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
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
    use thali::orders::{OrderStatus, PaymentMethod};

    use crate::test_helpers::{Mocks, TEST_TOKEN, customer, order};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("orders").post(handler))
    }

    fn body() -> serde_json::Value {
        json!({
            "userId": 500,
            "items": [{ "foodItemId": 1, "quantity": 4, "price": 250 }],
            "totalAmount": 1090,
            "deliveryAddress": "4 Park Street, Kolkata",
            "paymentMethod": "card",
            "contactPhone": "9830012345"
        })
    }

    #[tokio::test]
    async fn test_order_is_owned_by_caller() -> TestResult {
        let owner = customer().id;
        let mut mocks = Mocks::signed_in(customer());

        mocks
            .orders
            .expect_create_order()
            .once()
            .withf(move |user, new| {
                *user == owner
                    && new.total_amount == Decimal::from(1090)
                    && new.status == OrderStatus::Pending
                    && new.payment_method == PaymentMethod::Card
            })
            .return_once(move |_, _| Ok(order(12, owner)));

        let mut res = TestClient::post("http://example.com/orders")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .json(&body())
            .send(&make_service(mocks))
            .await;

        let location = res
            .headers()
            .get("location")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let created: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location.as_deref(), Some("/api/orders/12"));
        assert_eq!(created.user_id, owner.get());

        Ok(())
    }

    #[tokio::test]
    async fn test_anonymous_gets_401() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.orders.expect_create_order().never();

        let res = TestClient::post("http://example.com/orders")
            .json(&body())
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_payment_method_returns_400() -> TestResult {
        let mut mocks = Mocks::signed_in(customer());

        mocks.orders.expect_create_order().never();

        let mut payload = body();

        if let Some(fields) = payload.as_object_mut() {
            fields.insert("paymentMethod".to_string(), json!("cheque"));
        }

        let res = TestClient::post("http://example.com/orders")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .json(&payload)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
