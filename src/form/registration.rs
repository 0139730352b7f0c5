//! User registration form: a name guarded by a CAPTCHA.

use super::{FormState, Rejection, TransientNotice, DEFAULT_NOTICE_DURATION};
use crate::domain::Field;
use crate::error::{ApiResult, FormError, FormResult};
use crate::models::{RegistrationRequest, SubmissionResult};
use crate::submission::SubmissionClient;
use std::time::Duration;

pub const MISSING_NAME_ALERT: &str = "Please enter a valid name.";
pub const MISSING_CAPTCHA_ALERT: &str = "Please verify that you are not a robot.";
pub const NAME_SAVED_NOTICE: &str = "Name saved successfully!";

/// Controller for the registration form.
///
/// The CAPTCHA token is single-use: it is dropped after every answer from the
/// server, successful or not, and has to be solved again.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    name: String,
    captcha_token: Option<String>,
    state: FormState,
    notice: Option<TransientNotice>,
    notice_duration: Duration,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl RegistrationForm {
    pub fn new(notice_duration: Duration) -> Self {
        Self {
            name: String::new(),
            captcha_token: None,
            state: FormState::Editing,
            notice: None,
            notice_duration,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn captcha_token(&self) -> Option<&str> {
        self.captcha_token.as_deref()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().and_then(|n| n.visible_text())
    }

    /// Blocking alert for the last rejected submit, if any.
    pub fn alert(&self) -> Option<String> {
        match &self.state {
            FormState::Rejected(Rejection::Server(message)) => Some(format!("Error: {}", message)),
            FormState::Rejected(rejection) => Some(rejection.alert()),
            _ => None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.leave_outcome();
    }

    /// Store the token produced by the CAPTCHA widget (`None` when it expires).
    pub fn set_captcha_token(&mut self, token: Option<String>) {
        self.captcha_token = token.filter(|t| !t.is_empty());
        self.leave_outcome();
    }

    fn leave_outcome(&mut self) {
        if matches!(self.state, FormState::Success | FormState::Rejected(_)) {
            self.state = FormState::Editing;
        }
    }

    fn reject_locally(&mut self, alert: &str, error: FormError) -> FormError {
        self.state = FormState::Rejected(Rejection::Invalid(alert.to_string()));
        error
    }

    /// Check the name and token and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// - `FormError::AlreadySubmitting` while a submission is in flight.
    /// - `FormError::Invalid` when the name is blank.
    /// - `FormError::MissingCaptcha` when no token is present.
    pub fn begin_submit(&mut self) -> FormResult<RegistrationRequest> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(self.reject_locally(MISSING_NAME_ALERT, FormError::Invalid(vec![Field::Name])));
        }

        let Some(token) = self.captcha_token.clone() else {
            return Err(self.reject_locally(MISSING_CAPTCHA_ALERT, FormError::MissingCaptcha));
        };

        let request = RegistrationRequest { name, token };
        self.notice = None;
        self.state = FormState::Submitting;
        Ok(request)
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
                tracing::info!("User registered");
                self.name.clear();
                self.captcha_token = None;
                self.notice = Some(TransientNotice::new(NAME_SAVED_NOTICE, self.notice_duration));
                FormState::Success
            }
            Ok(result) => {
                tracing::warn!("Registration rejected: {}", result.message);
                self.captcha_token = None;
                FormState::Rejected(Rejection::server(result.message))
            }
            Err(e) => {
                tracing::error!("Registration failed: {}", e);
                FormState::Rejected(Rejection::Network)
            }
        };

        Ok(&self.state)
    }

    /// Validate, send through `client`, and fold the answer back in.
    ///
    /// # Errors
    ///
    /// Same as [`RegistrationForm::begin_submit`].
    pub async fn submit<C>(&mut self, client: &C) -> FormResult<&FormState>
    where
        C: SubmissionClient<RegistrationRequest> + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = client.submit(&request).await;
        self.complete_submit(outcome)
    }
}
