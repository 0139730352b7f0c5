//! Error types for the contact intake client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Per-field validation failures are not here; see [`crate::domain::FieldError`].

use crate::domain::Field;
use thiserror::Error;

/// Errors that can occur when talking to the persistence API.
///
/// Every variant is a transport-level problem from the point of view of a form:
/// the request did not produce a well-formed `{success, message}` answer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Server answered with a body that is not the expected JSON shape
    #[error("Invalid response (status {status}): {body}")]
    InvalidResponse { status: u16, body: String },

    /// Failed to parse or build JSON
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Local I/O failure (reading a file to upload)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Well-formed response whose `success` flag is false
    #[error("Rejected by server: {0}")]
    Rejected(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned by form controllers when a submission cannot start or finish.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A submission is already in flight
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// One or more fields failed validation
    #[error("Form has invalid fields: {}", format_fields(.0))]
    Invalid(Vec<Field>),

    /// The CAPTCHA has not been solved
    #[error("CAPTCHA token is missing")]
    MissingCaptcha,

    /// A completion arrived while no submission was in flight
    #[error("No submission is in progress")]
    NotSubmitting,
}

fn format_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;
