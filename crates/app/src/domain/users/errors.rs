//! Users service errors.

use thali::validation::ValidationErrors;

use crate::auth::PasswordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("username already exists")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Hashing(#[from] PasswordError),
}
