//! Foods

pub mod errors;
pub mod service;

pub use errors::FoodsServiceError;
pub use service::*;
