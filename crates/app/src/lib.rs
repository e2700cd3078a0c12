//! Shared application services, storage, and seeding.

pub mod auth;
pub mod client;
pub mod context;
pub mod database;
pub mod domain;
pub mod gateway;
pub mod seed;

#[cfg(test)]
mod test;
