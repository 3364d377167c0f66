//! Streams a generated artifact to a local file.
//!
//! Unlike the cosmetic progress shown while the service is generating, this
//! phase reports real byte progress: the transport knows the content length
//! and how much has arrived.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use futures_util::StreamExt;
use log::{debug, info};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::backend::generator::client::GenerateClient;
use crate::backend::generator::models::GenerateOutcome;

/// Byte-level progress of an artifact download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    pub downloaded: u64,
    pub total: Option<u64>,
}

impl DownloadProgress {
    /// Percentage when the total size is known; `None` for chunked responses
    /// without a content length.
    pub fn percent(&self) -> Option<f32> {
        self.total
            .filter(|t| *t > 0)
            .map(|t| ((self.downloaded as f32 / t as f32) * 100.0).min(100.0))
    }
}

/// Fetches the artifact named by a successful generation and writes it into
/// `dest_dir`, invoking `on_progress` after every received chunk. Returns
/// the path of the written file.
pub async fn download_artifact(
    client: &GenerateClient,
    outcome: &GenerateOutcome,
    dest_dir: &Path,
    mut on_progress: impl FnMut(DownloadProgress),
) -> Result<PathBuf> {
    let url = client.absolute_url(&outcome.download_url);
    let destination = dest_dir.join(outcome.suggested_filename());
    debug!("downloading {url} to {destination:?}");

    tokio::fs::create_dir_all(dest_dir)
        .await
        .with_context(|| format!("creating download directory {dest_dir:?}"))?;

    let response = client
        .http()
        .get(&url)
        .send()
        .await
        .with_context(|| format!("requesting {url}"))?;

    if !response.status().is_success() {
        bail!("download of {url} failed with HTTP {}", response.status());
    }

    let total = response.content_length();
    let mut file = File::create(&destination)
        .await
        .with_context(|| format!("creating {destination:?}"))?;

    let mut stream = response.bytes_stream();
    let mut downloaded = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("reading artifact stream")?;
        file.write_all(&chunk)
            .await
            .with_context(|| format!("writing {destination:?}"))?;
        downloaded += chunk.len() as u64;
        on_progress(DownloadProgress { downloaded, total });
    }

    file.flush().await?;
    info!("saved {downloaded} bytes to {destination:?}");

    Ok(destination)
}
