//! Client side of the external generate service.

pub mod client;
pub mod download;
pub mod error;
pub mod models;

pub use client::GenerateClient;
pub use download::{DownloadProgress, download_artifact};
pub use error::GenerateError;
pub use models::GenerateOutcome;
