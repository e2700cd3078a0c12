//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use thali_app::{auth::AuthServiceError, domain::users::UsersServiceError};

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Username already exists")
        }
        UsersServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid username or password")
        }
        UsersServiceError::Invalid(errors) => StatusError::bad_request().brief(errors.to_string()),
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::Hashing(source) => {
            error!("password hashing failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn session_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::NotFound | AuthServiceError::Token(_) => {
            StatusError::unauthorized().brief("Session not found")
        }
        AuthServiceError::Users(source) => {
            error!("session user lookup failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
