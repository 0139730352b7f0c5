//! Data models for form records and API payloads.

pub mod contact;
pub mod image;
pub mod user;

pub use contact::{ContactRequest, FormRecord, SubmissionResult};
pub use image::ImageAsset;
pub use user::{RegistrationRequest, User};
