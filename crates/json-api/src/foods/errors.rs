//! Food Errors

use salvo::http::StatusError;

use thali_app::domain::foods::FoodsServiceError;

pub(crate) fn into_status_error(error: FoodsServiceError) -> StatusError {
    match error {
        FoodsServiceError::NotFound => StatusError::not_found().brief("Food item not found"),
        FoodsServiceError::Invalid(errors) => StatusError::bad_request().brief(errors.to_string()),
    }
}
