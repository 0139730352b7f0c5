//! PersonName value object.

use super::errors::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of non-blank characters in a name.
pub const NAME_MIN_CHARS: usize = 2;

// ASCII letters plus the Latin-1 letter ranges (skipping × and ÷).
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s]+$").expect("Failed to compile name regex")
});

/// A person's name made of letters and spaces.
///
/// Accented Latin letters (`á`, `ñ`, `ü`, ...) are accepted. The original
/// spelling, including inner spaces, is preserved.
///
/// # Example
///
/// ```
/// use contact_intake::domain::PersonName;
///
/// let name = PersonName::new("Ana María").unwrap();
/// assert_eq!(name.as_str(), "Ana María");
/// assert!(PersonName::new("R2D2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName.
    ///
    /// # Errors
    ///
    /// - `FieldError::NameNotLetters` if any character is not a letter or space
    ///   (an empty string fails here too).
    /// - `FieldError::NameTooShort` if fewer than two characters remain after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, FieldError> {
        let name = name.into();
        Self::check(&name)?;
        Ok(Self(name))
    }

    /// Validate a name without taking ownership.
    pub fn check(name: &str) -> Result<(), FieldError> {
        if !NAME_REGEX.is_match(name) {
            return Err(FieldError::NameNotLetters);
        }
        if name.trim().chars().count() < NAME_MIN_CHARS {
            return Err(FieldError::NameTooShort);
        }
        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
