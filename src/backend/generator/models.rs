//! Wire types for the generate endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub url: String,
}

/// Raw success body as the service sends it. `download_url` is checked
/// separately so a 2xx body without it can be rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub download_url: Option<String>,
    pub filename: Option<String>,
}

/// Raw error body. The `error` field is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

/// A validated successful generation: the artifact location plus the
/// suggested local filename, if the service provided one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub download_url: String,
    pub filename: Option<String>,
}

impl GenerateOutcome {
    /// Filename to save the artifact under: the server's suggestion when
    /// present, otherwise the last path segment of the download URL.
    pub fn suggested_filename(&self) -> String {
        if let Some(name) = self.filename.as_deref() {
            let name = sanitize_filename(name);
            if !name.is_empty() {
                return name;
            }
        }

        let segment = self
            .download_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("");
        let segment = sanitize_filename(segment.split('?').next().unwrap_or(""));

        if segment.is_empty() {
            "book.pdf".to_string()
        } else {
            segment
        }
    }
}

/// Strips path separators and traversal components from a server-supplied
/// filename so it can never escape the download directory.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    match cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace()) {
        "" => String::new(),
        trimmed => trimmed.to_string(),
    }
}
