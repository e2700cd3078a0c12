//! Users

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    ids::TypedId,
    validation::{Validate, ValidationErrors},
};

/// User id
pub type UserId = TypedId<User>;

/// Public view of an account. The password digest never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned at registration
    pub id: UserId,

    /// Unique login name
    pub username: String,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Default delivery address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Grants catalog and order administration
    pub is_admin: bool,
}

/// Registration form.
///
/// There is no admin flag here; admin accounts are only created by seeding.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Unique login name
    pub username: String,

    /// Plain-text password, hashed before storage
    pub password: String,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact number
    #[serde(default)]
    pub phone: Option<String>,

    /// Default delivery address
    #[serde(default)]
    pub address: Option<String>,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .finish()
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require_text("username", &self.username);
        errors.require_text("password", &self.password);
        errors.require_text("name", &self.name);
        errors.require_text("email", &self.email);

        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.push("email", "must be a valid email address");
        }

        errors.into_result()
    }
}

/// Login form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login name
    pub username: String,

    /// Plain-text password
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

impl Validate for Credentials {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require_text("username", &self.username);
        errors.require_text("password", &self.password);

        errors.into_result()
    }
}

/// Response to a successful registration or login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for later requests
    pub token: String,

    /// The signed-in account
    pub user: User,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[redacted]")
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> NewUser {
        NewUser {
            username: "asha".to_string(),
            password: "s3cret".to_string(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
            address: None,
        }
    }

    #[test]
    fn debug_redacts_password() {
        let debug = format!("{:?}", new_user());

        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn rejects_email_without_at() {
        let mut user = new_user();
        user.email = "asha.example.com".to_string();

        let Err(errors) = user.validate() else {
            panic!("expected validation failure");
        };

        assert!(errors.has_field("email"));
    }

    #[test]
    fn rejects_blank_credentials() {
        let credentials = Credentials {
            username: String::new(),
            password: String::new(),
        };

        assert!(credentials.validate().is_err());
    }
}
