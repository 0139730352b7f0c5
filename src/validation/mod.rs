//! Field validation for the contact form.
//!
//! Every rule is evaluated independently per field; there is no cross-field
//! validation. The functions here are pure: the same field, value and
//! reference date always produce the same answer.

mod state;

pub use state::ValidationState;

use crate::domain::{
    BirthDate, ContactMessage, EmailAddress, Field, FieldError, PersonName, PhoneNumber,
};
use chrono::{Local, NaiveDate};

/// Check one field against a reference date used for age rules.
///
/// Optional fields (phone, birth date) accept an empty string.
pub fn check_at(field: Field, value: &str, today: NaiveDate) -> Result<(), FieldError> {
    match field {
        Field::Name => PersonName::check(value),
        Field::Email => EmailAddress::check(value),
        Field::Phone if value.is_empty() => Ok(()),
        Field::Phone => PhoneNumber::check(value),
        Field::BirthDate if value.trim().is_empty() => Ok(()),
        Field::BirthDate => BirthDate::check_at(value, today),
        Field::Message => ContactMessage::check(value),
    }
}

/// Check one field using today's local date.
pub fn check(field: Field, value: &str) -> Result<(), FieldError> {
    check_at(field, value, today())
}

/// Validate a field and return the inline error message.
///
/// An empty string means the value is valid.
///
/// # Example
///
/// ```
/// use contact_intake::domain::Field;
/// use contact_intake::validation::validate;
///
/// assert_eq!(validate(Field::Email, "a@b.c"), "");
/// assert!(!validate(Field::Email, "a@b").is_empty());
/// ```
pub fn validate(field: Field, value: &str) -> String {
    validate_at(field, value, today())
}

/// Same as [`validate`] with an explicit reference date.
pub fn validate_at(field: Field, value: &str, today: NaiveDate) -> String {
    match check_at(field, value, today) {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

/// Today's date in the local timezone.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_name_with_digit_or_symbol_is_invalid() {
        for name in ["Ana1", "Ana$", "María#", "9", "Ana.", "Ana\tMaría7"] {
            assert!(!validate(Field::Name, name).is_empty(), "{name}");
        }
    }

    #[test]
    fn test_name_messages() {
        assert_eq!(validate(Field::Name, "Ana2"), "Only letters and spaces.");
        assert_eq!(validate(Field::Name, "A"), "Minimum 2 characters.");
        assert_eq!(validate(Field::Name, "Ana María"), "");
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate(Field::Email, "a@b.c"), "");
        assert_eq!(validate(Field::Email, "a@b"), "Invalid email address.");
        assert!(!validate(Field::Email, "").is_empty());
    }

    #[test]
    fn test_phone_rules() {
        assert_eq!(validate(Field::Phone, "12345"), "Must be 10 digits.");
        assert_eq!(validate(Field::Phone, "1234567890"), "");
        assert_eq!(validate(Field::Phone, ""), "");
    }

    #[test]
    fn test_birth_date_rules() {
        let today = reference_date();
        assert_eq!(validate_at(Field::BirthDate, "", today), "");
        assert_eq!(validate_at(Field::BirthDate, "1990-05-17", today), "");
        assert_eq!(validate_at(Field::BirthDate, "1990-13-01", today), "Invalid date.");
        assert_eq!(validate_at(Field::BirthDate, "2030-01-01", today), "Invalid date.");
    }

    #[test]
    fn test_message_boundary() {
        assert_eq!(validate(Field::Message, "short"), "Minimum 15 characters.");
        assert_eq!(validate(Field::Message, "a".repeat(15).as_str()), "");
        assert!(!validate(Field::Message, "a".repeat(14).as_str()).is_empty());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let today = reference_date();
        for field in Field::ALL {
            for value in ["", "Ana", "a@b", "12345", "1990-01-01", "hola mundo!!!!!!"] {
                assert_eq!(
                    validate_at(field, value, today),
                    validate_at(field, value, today)
                );
            }
        }
    }

    #[test]
    fn test_validator_does_not_enforce_length_caps() {
        let long_name = "a".repeat(80);
        assert_eq!(validate(Field::Name, &long_name), "");
    }
}
