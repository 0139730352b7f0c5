//! Domain value objects and types.
//!
//! This module contains the form fields and type-safe wrappers for the values
//! a contact submission carries. Each value object validates at construction
//! time, so a request built from them cannot hold an invalid field.

pub mod birth_date;
pub mod email;
pub mod errors;
pub mod field;
pub mod message;
pub mod person_name;
pub mod phone;

pub use birth_date::BirthDate;
pub use email::EmailAddress;
pub use errors::FieldError;
pub use field::Field;
pub use message::ContactMessage;
pub use person_name::PersonName;
pub use phone::PhoneNumber;
