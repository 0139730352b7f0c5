//! Field validation errors.

use std::fmt;

/// Errors a single form field can carry.
///
/// The `Display` output is the inline message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// The name contains something other than letters and spaces.
    NameNotLetters,

    /// The name is shorter than two characters.
    NameTooShort,

    /// The email address does not look like `local@domain.tld`.
    InvalidEmail,

    /// The phone number is not exactly ten digits.
    InvalidPhone,

    /// The birth date does not parse or gives an implausible age.
    InvalidDate,

    /// The message is shorter than fifteen characters.
    MessageTooShort,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameNotLetters => write!(f, "Only letters and spaces."),
            Self::NameTooShort => write!(f, "Minimum 2 characters."),
            Self::InvalidEmail => write!(f, "Invalid email address."),
            Self::InvalidPhone => write!(f, "Must be 10 digits."),
            Self::InvalidDate => write!(f, "Invalid date."),
            Self::MessageTooShort => write!(f, "Minimum 15 characters."),
        }
    }
}

impl std::error::Error for FieldError {}
