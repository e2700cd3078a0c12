//! Account Handlers

pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod register;
pub(crate) mod user;
