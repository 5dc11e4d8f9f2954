use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::UploadError;
use crate::uploads::traits::ImageUploader;

pub const DEFAULT_UPLOAD_URL: &str = "http://localhost:3001/upload";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: Option<String>,
    message: Option<String>,
}

/// Multipart uploader for the image endpoint
pub struct HttpUploader {
    client: Client,
    endpoint: String,
}

impl HttpUploader {
    /// Create an uploader for the default local endpoint
    pub fn new() -> Result<Self, UploadError> {
        Self::with_endpoint(DEFAULT_UPLOAD_URL, Duration::from_secs(30))
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, UploadError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ImageUploader for HttpUploader {
    async fn upload(&self, file: &Path) -> Result<String, UploadError> {
        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        debug!("Uploading {} ({} bytes) to {}", file_name, bytes.len(), self.endpoint);

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "Upload response: {}", body);

        parse_upload_response(status, &body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Extract the image URL from an upload response.
///
/// A non-2xx status is an error carrying the body's `message`, or
/// "Unknown error" when there is none.
pub fn parse_upload_response(status: u16, body: &str) -> Result<String, UploadError> {
    let parsed: Option<UploadResponse> = serde_json::from_str(body).ok();

    if !(200..300).contains(&status) {
        let message = parsed
            .and_then(|response| response.message)
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(UploadError::Rejected { status, message });
    }

    parsed
        .and_then(|response| response.url)
        .ok_or(UploadError::MissingUrl)
}
