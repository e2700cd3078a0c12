//! Auth service errors.

use thiserror::Error;

use crate::{auth::SessionTokenError, domain::users::UsersServiceError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("session not found")]
    NotFound,

    #[error("session token processing error")]
    Token(#[source] SessionTokenError),

    #[error("session user lookup failed")]
    Users(#[from] UsersServiceError),
}

impl From<SessionTokenError> for AuthServiceError {
    fn from(error: SessionTokenError) -> Self {
        Self::Token(error)
    }
}
