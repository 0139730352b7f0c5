//! HTTP client for the contact persistence API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. It maps transport failures and malformed bodies
//! to [`ApiError`], and passes well-formed `{success: false}` answers through as data.

mod async_wrapper;
pub use async_wrapper::{AsyncApiClient, AsyncApiClientImpl};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::image::UploadResponse;
use crate::models::{ContactRequest, ImageAsset, RegistrationRequest, SubmissionResult, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error as _;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Multipart field name the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "archivo";

/// Status and body of a completed HTTP exchange, whatever the status code.
struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn parse<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|_| ApiError::InvalidResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// HTTP client for the persistence API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL of the API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ApiClient {
    /// Create a new ApiClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(config.api_base_url.clone(), config.request_timeout())
    }

    /// Create an ApiClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Run a request and read its body, keeping non-2xx answers as data.
    fn execute(
        &self,
        method: &str,
        url: &str,
        send: impl FnOnce(ureq::Request) -> Result<ureq::Response, ureq::Error>,
    ) -> ApiResult<RawResponse> {
        let timer = HttpTimer::new(self.metrics.clone());
        let request = self.agent.request(method, url);

        let response = match send(request) {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                timer.complete_with_error();
                tracing::error!("{} {} - Transport error: {}", method, url, transport);
                return Err(Self::map_transport(transport));
            }
        };
        timer.complete();

        let status = response.status();
        let body = response.into_string().map_err(map_read_error)?;
        tracing::debug!("{} {} - status {}", method, url, status);

        Ok(RawResponse { status, body })
    }

    /// Map a ureq transport error to an ApiError.
    fn map_transport(transport: ureq::Transport) -> ApiError {
        match transport.kind() {
            ureq::ErrorKind::ConnectionFailed => {
                ApiError::HttpError("Connection failed".to_string())
            }
            ureq::ErrorKind::Io => match transport
                .source()
                .and_then(|e| e.downcast_ref::<io::Error>())
            {
                Some(e) if is_timeout(e) => ApiError::Timeout,
                _ => ApiError::HttpError(transport.to_string()),
            },
            _ => ApiError::HttpError(transport.to_string()),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.build_url(path);
        let response = self.execute("GET", &url, |req| req.call())?;

        if !response.is_success() {
            return Err(ApiError::InvalidResponse {
                status: response.status,
                body: response.body,
            });
        }
        response.parse()
    }

    /// POST a JSON body and read a `{success, message}` answer.
    fn post_submission<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<SubmissionResult> {
        let url = self.build_url(path);
        let body = serde_json::to_value(body)?;

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(&body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let response = self.execute("POST", &url, |req| req.send_json(&body))?;
        let mut result: SubmissionResult = response.parse()?;

        // An error status is a rejection whatever the body claims
        if result.success && !response.is_success() {
            result = SubmissionResult::rejected("");
        }

        self.metrics.record_submission(result.success);
        if result.success {
            tracing::info!("POST {} accepted", url);
        } else {
            tracing::warn!(
                "POST {} rejected (status {}): {}",
                url,
                response.status,
                result.message
            );
        }

        Ok(result)
    }

    // ========================= Form submissions =========================

    /// Store a contact message.
    pub fn submit_contact(&self, request: &ContactRequest) -> ApiResult<SubmissionResult> {
        self.post_submission("/contacto", request)
    }

    /// Store a user name after server-side CAPTCHA verification.
    pub fn register_user(&self, request: &RegistrationRequest) -> ApiResult<SubmissionResult> {
        self.post_submission("/usuarios", request)
    }

    /// List stored users, newest first.
    pub fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get_json("/usuarios")
    }

    // ========================= Gallery =========================

    /// List the images held by the media host.
    pub fn list_images(&self) -> ApiResult<Vec<ImageAsset>> {
        self.get_json("/imagenes")
    }

    /// Upload an image file.
    pub fn upload_image(&self, path: &Path) -> ApiResult<ImageAsset> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload");
        self.upload_image_bytes(file_name, &bytes)
    }

    /// Upload in-memory image bytes under the given file name.
    pub fn upload_image_bytes(&self, file_name: &str, bytes: &[u8]) -> ApiResult<ImageAsset> {
        let url = self.build_url("/subir-imagen");
        let boundary = multipart_boundary();
        let body = multipart_body(&boundary, UPLOAD_FIELD, file_name, bytes);
        let content_type = format!("multipart/form-data; boundary={}", boundary);

        tracing::info!("Uploading {} ({} bytes)", file_name, bytes.len());

        let response = self.execute("POST", &url, |req| {
            req.set("Content-Type", &content_type).send_bytes(&body)
        })?;
        let upload: UploadResponse = response.parse()?;

        upload.into_asset().map_err(ApiError::Rejected)
    }

    /// Delete an uploaded image by its media host identifier.
    pub fn delete_image(&self, id: &str) -> ApiResult<()> {
        let path = format!("/borrar-imagen/{}", urlencoding::encode(id));
        let url = self.build_url(&path);

        let response = self.execute("DELETE", &url, |req| req.call())?;
        let result: SubmissionResult = response.parse()?;

        if result.success {
            Ok(())
        } else if result.message.is_empty() {
            Err(ApiError::Rejected(format!("Could not delete image {}", id)))
        } else {
            Err(ApiError::Rejected(result.message))
        }
    }
}

fn is_timeout(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

/// Map a failure while reading a response body.
fn map_read_error(e: io::Error) -> ApiError {
    if is_timeout(&e) {
        ApiError::Timeout
    } else {
        ApiError::HttpError(e.to_string())
    }
}

fn multipart_boundary() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("contact-intake-{:x}", nanos)
}

/// Guess an image content type from a file name.
fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Encode a single file part as `multipart/form-data`.
fn multipart_body(boundary: &str, field: &str, file_name: &str, bytes: &[u8]) -> Vec<u8> {
    let file_name: String = file_name
        .chars()
        .filter(|c| *c != '"' && !c.is_control())
        .collect();
    let mut body = Vec::with_capacity(bytes.len() + 256);

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type_for(&file_name)).as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    body
}
