//! BirthDate value object.

use super::errors::FieldError;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Format of dates typed into the form and sent to the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Oldest age considered plausible.
pub const MAX_AGE_YEARS: u32 = 130;

/// A calendar birth date that yields a plausible age.
///
/// Age is always computed against an explicit reference date so the check is
/// a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse a `YYYY-MM-DD` date and check the age it gives on `today`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidDate` if the string is not a real calendar
    /// date, lies after `today`, or gives an age above [`MAX_AGE_YEARS`].
    pub fn parse_at(raw: &str, today: NaiveDate) -> Result<Self, FieldError> {
        let date =
            NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| FieldError::InvalidDate)?;

        match today.years_since(date) {
            Some(age) if age <= MAX_AGE_YEARS => Ok(Self(date)),
            _ => Err(FieldError::InvalidDate),
        }
    }

    /// Validate a date string without keeping the result.
    pub fn check_at(raw: &str, today: NaiveDate) -> Result<(), FieldError> {
        Self::parse_at(raw, today).map(|_| ())
    }

    /// Whole years between the birth date and `on`.
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        on.years_since(self.0)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_birth_date_valid() {
        let date = BirthDate::parse_at("1990-05-17", today()).unwrap();
        assert_eq!(date.age_on(today()), Some(36));
        assert_eq!(date.to_string(), "1990-05-17");
    }

    #[test]
    fn test_birth_date_born_today_is_age_zero() {
        let date = BirthDate::parse_at("2026-10-18", today()).unwrap();
        assert_eq!(date.age_on(today()), Some(0));
    }

    #[test]
    fn test_birth_date_rejects_future() {
        assert_eq!(
            BirthDate::parse_at("2026-10-19", today()),
            Err(FieldError::InvalidDate)
        );
    }

    #[test]
    fn test_birth_date_rejects_impossible_dates() {
        assert!(BirthDate::parse_at("2023-02-30", today()).is_err());
        assert!(BirthDate::parse_at("17/05/1990", today()).is_err());
        assert!(BirthDate::parse_at("yesterday", today()).is_err());
    }

    #[test]
    fn test_birth_date_rejects_implausible_age() {
        assert!(BirthDate::parse_at("1896-10-18", today()).is_ok());
        assert!(BirthDate::parse_at("1895-10-17", today()).is_err());
    }

    #[test]
    fn test_birth_date_serialization() {
        let date = BirthDate::parse_at("2001-01-09", today()).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2001-01-09\"");
    }
}
