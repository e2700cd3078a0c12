//! Thali Domain Concerns

pub mod foods;
pub mod orders;
pub mod users;
