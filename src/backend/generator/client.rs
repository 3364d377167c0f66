//! HTTP client for the external generate endpoint.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;

use crate::backend::generator::error::GenerateError;
use crate::backend::generator::models::{
    ErrorResponse, GenerateOutcome, GenerateRequest, GenerateResponse,
};
use crate::backend::utils::config::AppConfig;

/// Client for the generator service. Cheap to clone, shares the underlying
/// connection pool.
#[derive(Clone)]
pub struct GenerateClient {
    http: reqwest::Client,
    base_url: String,
}

impl GenerateClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("bookbinder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a possibly relative artifact URL against the service base.
    /// The service hands out paths like `/static/books/book_<id>.pdf`.
    pub fn absolute_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else {
            format!("{}/{}", self.base_url, path_or_url.trim_start_matches('/'))
        }
    }

    /// Submits a blog URL for generation. One request per call, no retries;
    /// the caller decides what any failure means for the UI.
    pub async fn generate(&self, url: &str) -> Result<GenerateOutcome, GenerateError> {
        let endpoint = format!("{}/generate", self.base_url);
        debug!("POST {endpoint} url={url}");

        let response = self
            .http
            .post(&endpoint)
            .json(&GenerateRequest {
                url: url.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                warn!("generate request failed: {e}");
                GenerateError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!("generate response body unreadable: {e}");
            GenerateError::Transport(e.to_string())
        })?;

        interpret_response(status, &body)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Maps a settled HTTP exchange onto the outcome/error taxonomy.
///
/// A 2xx body that lacks `download_url` counts as a server failure: the
/// service claimed success but there is nothing to download.
pub fn interpret_response(
    status: StatusCode,
    body: &[u8],
) -> Result<GenerateOutcome, GenerateError> {
    if status.is_success() {
        let parsed: GenerateResponse = serde_json::from_slice(body)
            .map_err(|e| GenerateError::Transport(format!("invalid response body: {e}")))?;

        match parsed.download_url {
            Some(download_url) => Ok(GenerateOutcome {
                download_url,
                filename: parsed.filename,
            }),
            None => Err(GenerateError::Server { message: None }),
        }
    } else {
        let message = serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.error);
        Err(GenerateError::Server { message })
    }
}
