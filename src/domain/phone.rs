//! PhoneNumber value object.

use super::errors::FieldError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// A type-safe wrapper for ten-digit phone numbers.
///
/// No formatting characters are accepted: the form stores exactly what the
/// user types, and the API expects bare digits.
///
/// # Example
///
/// ```
/// use contact_intake::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5512345678").unwrap();
/// assert_eq!(phone.as_str(), "5512345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidPhone` unless the input is exactly ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, FieldError> {
        let phone = phone.into();
        Self::check(&phone)?;
        Ok(Self(phone))
    }

    /// Validate phone format without taking ownership.
    pub fn check(phone: &str) -> Result<(), FieldError> {
        if phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(FieldError::InvalidPhone)
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
