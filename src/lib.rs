//! Thali
//!
//! Thali is the shared domain of a restaurant ordering service: the menu, the
//! customer cart, order pricing and the checkout flow.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod ids;
pub mod menu;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod users;
pub mod validation;
