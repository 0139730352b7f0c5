//! Async wrapper around the synchronous ApiClient.
//!
//! This module provides an async interface to the synchronous ApiClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{ContactRequest, ImageAsset, RegistrationRequest, SubmissionResult, User};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Async version of every ApiClient operation.
#[async_trait]
pub trait AsyncApiClient: Send + Sync {
    async fn submit_contact(&self, request: &ContactRequest) -> ApiResult<SubmissionResult>;
    async fn register_user(&self, request: &RegistrationRequest) -> ApiResult<SubmissionResult>;
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    async fn list_images(&self) -> ApiResult<Vec<ImageAsset>>;
    async fn upload_image(&self, path: &Path) -> ApiResult<ImageAsset>;
    async fn delete_image(&self, id: &str) -> ApiResult<()>;
}

/// Async wrapper around the synchronous ApiClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncApiClientImpl {
    client: Arc<ApiClient>,
}

impl AsyncApiClientImpl {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn inner(&self) -> &ApiClient {
        &self.client
    }
}

fn join_error(e: tokio::task::JoinError) -> ApiError {
    ApiError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncApiClient for AsyncApiClientImpl {
    async fn submit_contact(&self, request: &ContactRequest) -> ApiResult<SubmissionResult> {
        let client = self.client.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.submit_contact(&request))
            .await
            .map_err(join_error)?
    }

    async fn register_user(&self, request: &RegistrationRequest) -> ApiResult<SubmissionResult> {
        let client = self.client.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.register_user(&request))
            .await
            .map_err(join_error)?
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_users())
            .await
            .map_err(join_error)?
    }

    async fn list_images(&self) -> ApiResult<Vec<ImageAsset>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_images())
            .await
            .map_err(join_error)?
    }

    async fn upload_image(&self, path: &Path) -> ApiResult<ImageAsset> {
        let client = self.client.clone();
        let path: PathBuf = path.to_path_buf();

        tokio::task::spawn_blocking(move || client.upload_image(&path))
            .await
            .map_err(join_error)?
    }

    async fn delete_image(&self, id: &str) -> ApiResult<()> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.delete_image(&id))
            .await
            .map_err(join_error)?
    }
}
