//! Client configuration.

use std::path::PathBuf;

use anyhow::Result;
use log::warn;
use serde::{Deserialize, Serialize};

/// Name of the app data directory.
const APP_DIR: &str = "Bookbinder";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the generator service.
    pub base_url: String,
    /// Timeout for the generate request. Generation scrapes a whole blog, so
    /// this is deliberately generous.
    pub request_timeout_secs: u64,
    /// Where generated books are saved. Defaults to `<app dir>/books`.
    pub download_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 300,
            download_dir: None,
        }
    }
}

impl AppConfig {
    /// Base app data directory (`Bookbinder` under the platform's usual
    /// location).
    pub fn app_dir() -> Result<PathBuf> {
        let base_dir = match std::env::consts::OS {
            "windows" => std::env::var("APPDATA")
                .ok()
                .map(PathBuf::from)
                .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
            "macos" => std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join("Library/Application Support"))
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
            _ => std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        };
        Ok(base_dir.join(APP_DIR))
    }

    pub fn config_path() -> PathBuf {
        Self::app_dir()
            .unwrap_or_else(|_| PathBuf::from(APP_DIR))
            .join("config.json")
    }

    /// Directory generated books are saved into.
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir.clone().unwrap_or_else(|| {
            Self::app_dir()
                .unwrap_or_else(|_| PathBuf::from(APP_DIR))
                .join("books")
        })
    }

    /// Loads the config file, falling back to defaults when it is missing
    /// or unreadable. A broken file is reported, never fatal.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("ignoring malformed config at {path:?}: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves the config to disk, creating the app directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert!(config.download_dir.is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let config = AppConfig {
            base_url: "https://books.example".to_string(),
            request_timeout_secs: 30,
            download_dir: Some(PathBuf::from("/tmp/books")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: AppConfig = serde_json::from_str(r#"{"base_url": "http://h"}"#).unwrap();
        assert_eq!(back.base_url, "http://h");
        assert_eq!(back.request_timeout_secs, AppConfig::default().request_timeout_secs);
    }

    #[test]
    fn explicit_download_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            download_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        assert_eq!(config.download_dir(), dir.path());
    }
}
