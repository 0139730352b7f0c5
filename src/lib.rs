//! Contact Intake - validated contact and registration forms backed by a persistence API.
//!
//! This library provides the validation and submission pipeline of a small
//! contact web application: per-field validation, form controllers with a
//! submission state machine, and an HTTP client for the persistence endpoints.
//!
//! # Architecture
//!
//! - **domain**: Form fields and validated value objects (name, email, phone, ...)
//! - **validation**: Field validator and the per-field error map
//! - **models**: Form record and API payloads
//! - **form**: Contact and registration form controllers
//! - **submission**: Seam between the forms and the API client
//! - **client**: HTTP client for the persistence API (sync + async wrapper)
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Request and submission counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod submission;
pub mod validation;

pub use client::{ApiClient, AsyncApiClient, AsyncApiClientImpl};
pub use config::Config;
pub use domain::{Field, FieldError};
pub use error::{ApiError, ConfigError, FormError};
pub use form::{ContactForm, FieldChange, FormState, Rejection, RegistrationForm};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContactRequest, FormRecord, ImageAsset, RegistrationRequest, SubmissionResult, User};
pub use submission::{ApiSubmissionClient, SubmissionClient};
pub use validation::{validate, ValidationState};
