//! Validation
//!
//! Request payloads are checked field by field and every failure is reported
//! together, so a client can fix a whole form in one round trip.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// A single field failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {message}")]
pub struct ValidationError {
    /// Wire name of the offending field.
    pub field: &'static str,

    /// What is wrong with it.
    pub message: String,
}

/// One or more field failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(ValidationError {
            field,
            message: message.into(),
        });
    }

    /// Whether no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the recorded failures.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Whether any failure concerns `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collection itself when at least one failure was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Require `value` to contain something other than whitespace.
    pub fn require_text(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "must not be empty");
        }
    }

    /// Require `value` to be strictly positive.
    pub fn require_positive(&mut self, field: &'static str, value: Decimal) {
        if value <= Decimal::ZERO {
            self.push(field, "must be greater than 0");
        }
    }

    /// Require `value` to be zero or more.
    pub fn require_non_negative(&mut self, field: &'static str, value: Decimal) {
        if value.is_sign_negative() && !value.is_zero() {
            self.push(field, "must not be negative");
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation error: ")?;

        for (idx, error) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

/// Schema-style validation of a payload.
pub trait Validate {
    /// Check every field, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] describing each invalid field.
    fn validate(&self) -> Result<(), ValidationErrors>;
}
