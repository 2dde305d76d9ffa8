//! Upload-port implementations.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use ripple_core::{
    CoreError, Result, SelectedFile,
    profile::{UploadClient, UploadedFile},
};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Uploads files to the configured upload service, one request per file.
///
/// The service contract: POST the raw bytes with the file's content type,
/// receive `{"url": "..."}` back. Result ordering matches input ordering.
#[derive(Debug, Clone)]
pub struct HttpUploadClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpUploadClient {
    pub fn new(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl UploadClient for HttpUploadClient {
    async fn upload(&self, files: &[SelectedFile]) -> Result<Vec<UploadedFile>> {
        let mut uploaded = Vec::with_capacity(files.len());

        for file in files {
            debug!(name = %file.name, content_type = %file.content_type, "uploading file");

            let response = self
                .http
                .post(self.endpoint.clone())
                .header(CONTENT_TYPE, &file.content_type)
                .query(&[("filename", file.name.as_str())])
                .body(file.bytes.clone())
                .send()
                .await
                .map_err(|err| CoreError::Upload(err.to_string()))?;

            if !response.status().is_success() {
                return Err(CoreError::Upload(format!(
                    "upload service responded with {}",
                    response.status()
                )));
            }

            let body: UploadResponse = response
                .json()
                .await
                .map_err(|err| CoreError::Upload(err.to_string()))?;

            uploaded.push(UploadedFile { url: body.url });
        }

        Ok(uploaded)
    }
}

/// Stand-in used when no upload service is configured. Every upload fails
/// with a retryable error, which the orchestrator surfaces as `Failed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledUploadClient;

#[async_trait]
impl UploadClient for DisabledUploadClient {
    async fn upload(&self, _files: &[SelectedFile]) -> Result<Vec<UploadedFile>> {
        Err(CoreError::Upload(
            "no upload service configured".to_string(),
        ))
    }
}
