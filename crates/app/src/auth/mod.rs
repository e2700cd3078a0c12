//! Authentication

mod errors;
mod password;
mod service;
mod token;

pub use errors::*;
pub use password::{PasswordError, PasswordHash};
pub use service::*;
pub use token::*;
