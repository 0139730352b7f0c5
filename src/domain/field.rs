//! Contact form fields.

use std::fmt;
use std::str::FromStr;

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    BirthDate,
    Message,
}

impl Field {
    /// All fields, in the order the form presents them.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::BirthDate,
        Field::Message,
    ];

    /// Stable identifier used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::BirthDate => "birth_date",
            Field::Message => "message",
        }
    }

    /// Key used for this field in the API payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Email => "email",
            Field::Phone => "telefono",
            Field::BirthDate => "fecha_nacimiento",
            Field::Message => "mensaje",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::BirthDate => "Birth date (YYYY-MM-DD)",
            Field::Message => "Message",
        }
    }

    /// Maximum number of characters the form accepts for this field.
    ///
    /// Input beyond the cap is refused by the controller rather than reported
    /// as a validation error.
    pub fn max_len(self) -> Option<usize> {
        match self {
            Field::Name => Some(50),
            Field::Email => Some(100),
            Field::Phone => Some(10),
            Field::BirthDate => None,
            Field::Message => Some(500),
        }
    }

    /// Whether an empty value is acceptable.
    pub fn is_optional(self) -> bool {
        matches!(self, Field::Phone | Field::BirthDate)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts either the identifier or the payload key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s || field.wire_name() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}
