//! Submission clients used by the form controllers.
//!
//! A form only needs to hand its validated snapshot to something and get back
//! a [`SubmissionResult`] or a transport error. This seam keeps the forms
//! independent of HTTP so they can be driven by mocks in tests.

use crate::client::AsyncApiClient;
use crate::error::ApiResult;
use crate::models::{ContactRequest, RegistrationRequest, SubmissionResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Sends one validated request to the persistence endpoint.
///
/// `Ok` with `success == false` is an application-level rejection; `Err` is a
/// network failure (transport error or unreadable response).
#[async_trait]
pub trait SubmissionClient<R: Sync>: Send + Sync {
    async fn submit(&self, request: &R) -> ApiResult<SubmissionResult>;
}

/// Submission client backed by the persistence API.
///
/// This delegates to the AsyncApiClient, choosing the endpoint from the
/// request type.
#[derive(Clone)]
pub struct ApiSubmissionClient {
    client: Arc<dyn AsyncApiClient>,
}

impl ApiSubmissionClient {
    pub fn new(client: Arc<dyn AsyncApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubmissionClient<ContactRequest> for ApiSubmissionClient {
    async fn submit(&self, request: &ContactRequest) -> ApiResult<SubmissionResult> {
        self.client.submit_contact(request).await
    }
}

#[async_trait]
impl SubmissionClient<RegistrationRequest> for ApiSubmissionClient {
    async fn submit(&self, request: &RegistrationRequest) -> ApiResult<SubmissionResult> {
        self.client.register_user(request).await
    }
}
