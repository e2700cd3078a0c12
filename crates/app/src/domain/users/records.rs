//! User Records

use thali::users::User;

use crate::auth::PasswordHash;

/// Stored account: the public profile plus the password digest.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password: PasswordHash,
}
