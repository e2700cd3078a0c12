//! Password hashing with Argon2id.

use std::{fmt, hint::black_box, sync::LazyLock};

use argon2::{
    Argon2,
    password_hash::{self, PasswordHash as Phc, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use thiserror::Error;

use crate::auth::token::{encode_hex, random_bytes};

#[derive(Debug, Error)]
#[error("failed to hash password: {0}")]
pub struct PasswordError(#[from] password_hash::Error);

/// Stand-in hash verified when no account matches a login attempt.
static MISSING_ACCOUNT: LazyLock<Option<PasswordHash>> =
    LazyLock::new(|| PasswordHash::new(&encode_hex(&random_bytes::<16>())).ok());

/// Argon2id hash of a password, stored as a PHC string.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    phc: String,
}

impl PasswordHash {
    /// Hash `password` under a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns an error when Argon2 rejects the input, e.g. a password
    /// longer than the algorithm accepts.
    pub fn new(password: &str) -> Result<Self, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        Ok(Self { phc })
    }

    /// Whether `password` matches this hash.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        Phc::new(&self.phc).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    }

    /// Spend the work of one [`verify`](Self::verify) for a login whose
    /// username matched nothing.
    pub fn verify_missing(password: &str) {
        if let Some(hash) = MISSING_ACCOUNT.as_ref() {
            black_box(hash.verify(password));
        }
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phc)
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(**redacted**)")
    }
}
