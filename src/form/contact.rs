//! Contact form controller.

use super::{FieldChange, FormState, Rejection, TransientNotice, DEFAULT_NOTICE_DURATION};
use crate::domain::Field;
use crate::error::{ApiResult, FormError, FormResult};
use crate::models::{ContactRequest, FormRecord, SubmissionResult};
use crate::submission::SubmissionClient;
use crate::validation::{self, ValidationState};
use std::time::Duration;

/// Alert shown when submit is attempted with invalid fields.
pub const INVALID_FORM_ALERT: &str = "Please correct the errors before submitting.";

/// Confirmation shown after the server stored the message.
pub const CONTACT_SENT_NOTICE: &str = "Message sent successfully!";

/// Controller owning the values and errors of one contact form.
///
/// Every edit re-validates the edited field; every submit re-validates all of
/// them. A failed submission keeps the values so nothing has to be typed again.
///
/// # Example
///
/// ```
/// use contact_intake::domain::Field;
/// use contact_intake::form::{ContactForm, FieldChange};
///
/// let mut form = ContactForm::default();
/// assert_eq!(form.on_field_change(Field::Phone, "12345"), FieldChange::Applied);
/// assert_eq!(form.errors().message(Field::Phone), "Must be 10 digits.");
/// assert_eq!(form.on_field_change(Field::Phone, "12345678901"), FieldChange::Ignored);
/// assert_eq!(form.values().phone, "12345");
/// ```
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: FormRecord,
    errors: ValidationState,
    state: FormState,
    notice: Option<TransientNotice>,
    notice_duration: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl ContactForm {
    /// Create an empty form whose confirmations stay visible for `notice_duration`.
    pub fn new(notice_duration: Duration) -> Self {
        Self {
            values: FormRecord::default(),
            errors: ValidationState::new(),
            state: FormState::Editing,
            notice: None,
            notice_duration,
        }
    }

    pub fn values(&self) -> &FormRecord {
        &self.values
    }

    pub fn errors(&self) -> &ValidationState {
        &self.errors
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Confirmation text while it is still visible.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().and_then(|n| n.visible_text())
    }

    /// Blocking alert for the last rejected submit, if any.
    pub fn alert(&self) -> Option<String> {
        match &self.state {
            FormState::Rejected(rejection) => Some(rejection.alert()),
            _ => None,
        }
    }

    /// Apply one edit.
    ///
    /// A value longer than the field's cap leaves the form untouched.
    /// Otherwise the value is stored and the field's error recomputed.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) -> FieldChange {
        let value = value.into();

        if let Some(max) = field.max_len() {
            if value.chars().count() > max {
                tracing::trace!("Ignoring {} input beyond {} characters", field, max);
                return FieldChange::Ignored;
            }
        }

        self.errors.set(field, validation::check(field, &value));
        self.values.set(field, value);

        if matches!(self.state, FormState::Success | FormState::Rejected(_)) {
            self.state = FormState::Editing;
        }

        FieldChange::Applied
    }

    /// Validate everything and move to `Submitting`.
    ///
    /// Returns the snapshot to send.
    ///
    /// # Errors
    ///
    /// - `FormError::AlreadySubmitting` while a submission is in flight (state unchanged).
    /// - `FormError::Invalid` with the offending fields; the form moves to
    ///   `Rejected` and every error is surfaced.
    pub fn begin_submit(&mut self) -> FormResult<ContactRequest> {
        if self.is_submitting() {
            tracing::debug!("Submit ignored: a submission is already in progress");
            return Err(FormError::AlreadySubmitting);
        }

        match ContactRequest::from_record(&self.values) {
            Ok(request) => {
                self.errors.clear();
                self.notice = None;
                self.state = FormState::Submitting;
                Ok(request)
            }
            Err(errors) => {
                let fields = errors.invalid_fields();
                tracing::debug!("Submit blocked by {} invalid field(s)", fields.len());
                self.errors = errors;
                self.state = FormState::Rejected(Rejection::Invalid(INVALID_FORM_ALERT.to_string()));
                Err(FormError::Invalid(fields))
            }
        }
    }

    /// Fold the outcome of a submission back into the form.
    ///
    /// # Errors
    ///
    /// Returns `FormError::NotSubmitting` if no submission was started.
    pub fn complete_submit(
        &mut self,
        outcome: ApiResult<SubmissionResult>,
    ) -> FormResult<&FormState> {
        if !self.is_submitting() {
            return Err(FormError::NotSubmitting);
        }

        self.state = match outcome {
            Ok(result) if result.success => {
                tracing::info!("Contact message stored");
                self.values = FormRecord::default();
                self.errors.clear();
                self.notice = Some(TransientNotice::new(CONTACT_SENT_NOTICE, self.notice_duration));
                FormState::Success
            }
            Ok(result) => {
                tracing::warn!("Contact message rejected: {}", result.message);
                FormState::Rejected(Rejection::server(result.message))
            }
            Err(e) => {
                tracing::error!("Contact submission failed: {}", e);
                FormState::Rejected(Rejection::Network)
            }
        };

        Ok(&self.state)
    }

    /// Validate, send through `client`, and fold the answer back in.
    ///
    /// Server and network failures are reported through the returned state,
    /// not as errors.
    ///
    /// # Errors
    ///
    /// Same as [`ContactForm::begin_submit`].
    pub async fn submit<C>(&mut self, client: &C) -> FormResult<&FormState>
    where
        C: SubmissionClient<ContactRequest> + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = client.submit(&request).await;
        self.complete_submit(outcome)
    }
}
