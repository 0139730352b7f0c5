//! ContactMessage value object.

use super::errors::FieldError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of non-blank characters in a message.
pub const MESSAGE_MIN_CHARS: usize = 15;

/// The free-text body of a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactMessage(String);

impl ContactMessage {
    /// Create a new ContactMessage.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::MessageTooShort` if fewer than fifteen characters
    /// remain after trimming.
    pub fn new(message: impl Into<String>) -> Result<Self, FieldError> {
        let message = message.into();
        Self::check(&message)?;
        Ok(Self(message))
    }

    /// Validate a message without taking ownership.
    pub fn check(message: &str) -> Result<(), FieldError> {
        if message.trim().chars().count() < MESSAGE_MIN_CHARS {
            return Err(FieldError::MessageTooShort);
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for ContactMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
