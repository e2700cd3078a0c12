//! Order Errors

use salvo::http::StatusError;

use thali_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::Invalid(errors) => StatusError::bad_request().brief(errors.to_string()),
    }
}
