//! Authentication

mod cookie;
mod errors;
pub(crate) mod handlers;
pub(crate) mod middleware;
mod models;

pub(crate) use cookie::*;
pub(crate) use errors::*;
pub(crate) use handlers::*;
pub(crate) use models::*;
