//! Form state controllers.
//!
//! Both forms follow the same life cycle:
//!
//! ```text
//! Editing --submit--> Submitting --ok--> Success --edit--> Editing
//!    |                    |
//!    | invalid            | failure
//!    v                    v
//! Rejected <--------------+           Rejected --edit--> Editing
//! ```
//!
//! A second submit while `Submitting` is refused with
//! [`FormError::AlreadySubmitting`](crate::error::FormError::AlreadySubmitting).
//! Nothing is retried automatically.

pub mod contact;
pub mod notice;
pub mod registration;

pub use contact::ContactForm;
pub use notice::TransientNotice;
pub use registration::RegistrationForm;

use std::time::Duration;

/// Alert shown when the server could not be reached or answered nonsense.
pub const CONNECTION_ALERT: &str = "Could not connect to the server.";

/// Alert used when the server rejects without saying why.
pub const DEFAULT_SERVER_ERROR: &str = "Server error";

/// Default visibility of success confirmations.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Where a form is in its submission life cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Success,
    Rejected(Rejection),
}

/// Why the last submit attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Local validation failed; carries the alert text.
    Invalid(String),

    /// The server answered `success: false` with this message.
    Server(String),

    /// Transport failure or unreadable response.
    Network,
}

impl Rejection {
    /// Server rejection with a fallback for empty messages.
    pub(crate) fn server(message: String) -> Self {
        if message.trim().is_empty() {
            Rejection::Server(DEFAULT_SERVER_ERROR.to_string())
        } else {
            Rejection::Server(message)
        }
    }

    /// Text of the blocking alert for this rejection.
    pub fn alert(&self) -> String {
        match self {
            Rejection::Invalid(alert) => alert.clone(),
            Rejection::Server(message) => message.clone(),
            Rejection::Network => CONNECTION_ALERT.to_string(),
        }
    }
}

/// Outcome of a single field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    /// The value was stored and re-validated.
    Applied,

    /// The value exceeded the field's length cap and was dropped.
    Ignored,
}
