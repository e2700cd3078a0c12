//! Foods service errors.

use thali::validation::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FoodsServiceError {
    #[error("food item not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}
