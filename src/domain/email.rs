//! EmailAddress value object.

use super::errors::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex"));

/// A type-safe wrapper for email addresses.
///
/// The check is deliberately shallow: a local part, one `@`, and a domain
/// containing a dot, none of them holding whitespace.
///
/// # Example
///
/// ```
/// use contact_intake::domain::EmailAddress;
///
/// let email = EmailAddress::new("ana@x.com").unwrap();
/// assert_eq!(email.as_str(), "ana@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, FieldError> {
        let email = email.into();
        Self::check(&email)?;
        Ok(Self(email))
    }

    /// Validate email format without taking ownership.
    pub fn check(email: &str) -> Result<(), FieldError> {
        if EMAIL_REGEX.is_match(email) {
            Ok(())
        } else {
            Err(FieldError::InvalidEmail)
        }
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
