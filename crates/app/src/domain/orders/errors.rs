//! Orders service errors.

use thali::validation::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}
