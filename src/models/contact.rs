//! Contact form record and the payload sent to `POST /contacto`.

use crate::domain::{
    BirthDate, ContactMessage, EmailAddress, Field, FieldError, PersonName, PhoneNumber,
};
use crate::validation::ValidationState;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw values of the contact form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub message: String,
}

impl FormRecord {
    /// Build a record from the five field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        birth_date: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            birth_date: birth_date.into(),
            message: message.into(),
        }
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::BirthDate => &self.birth_date,
            Field::Message => &self.message,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::BirthDate => &mut self.birth_date,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Validated body of `POST /contacto`.
///
/// Built only by [`ContactRequest::from_record`], so every field has passed
/// its validation rule. Length caps are applied by the form while editing.
/// Optional fields left empty are sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    #[serde(rename = "nombre")]
    name: PersonName,

    email: EmailAddress,

    #[serde(rename = "telefono")]
    phone: Option<PhoneNumber>,

    #[serde(rename = "fecha_nacimiento")]
    birth_date: Option<BirthDate>,

    #[serde(rename = "mensaje")]
    message: ContactMessage,
}

impl ContactRequest {
    /// Validate every field of `record` against `today`.
    ///
    /// # Errors
    ///
    /// Returns the full error map when at least one field is invalid.
    pub fn from_record_at(record: &FormRecord, today: NaiveDate) -> Result<Self, ValidationState> {
        let mut errors = ValidationState::new();

        let name = capture(&mut errors, Field::Name, PersonName::new(record.name.as_str()));
        let email = capture(&mut errors, Field::Email, EmailAddress::new(record.email.as_str()));
        let phone = capture(
            &mut errors,
            Field::Phone,
            optional(&record.phone, |raw| PhoneNumber::new(raw)),
        );
        let birth_date = capture(
            &mut errors,
            Field::BirthDate,
            optional(record.birth_date.trim(), |raw| BirthDate::parse_at(raw, today)),
        );
        let message = capture(
            &mut errors,
            Field::Message,
            ContactMessage::new(record.message.as_str()),
        );

        match (name, email, phone, birth_date, message) {
            (Some(name), Some(email), Some(phone), Some(birth_date), Some(message)) => Ok(Self {
                name,
                email,
                phone,
                birth_date,
                message,
            }),
            _ => Err(errors),
        }
    }

    /// Validate every field of `record` against today's date.
    pub fn from_record(record: &FormRecord) -> Result<Self, ValidationState> {
        Self::from_record_at(record, crate::validation::today())
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn birth_date(&self) -> Option<&BirthDate> {
        self.birth_date.as_ref()
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }
}

fn optional<T>(
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, FieldError>,
) -> Result<Option<T>, FieldError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        parse(raw).map(Some)
    }
}

fn capture<T>(
    errors: &mut ValidationState,
    field: Field,
    outcome: Result<T, FieldError>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(e) => {
            errors.set(field, Err(e));
            None
        }
    }
}

/// Answer of the persistence endpoint.
///
/// `success == false` is an application-level rejection; `message` is shown
/// to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,

    #[serde(default)]
    pub message: String,
}

impl SubmissionResult {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
