//! Client configuration.
//!
//! Use the builder pattern to customize where the client talks to and where
//! it keeps its files.
//!
//! # Example
//!
//! ```ignore
//! use stockdeck::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()
//!     .with_base_url("https://inventory.example.com/api")
//!     .with_timeout(Duration::from_secs(5));
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::FileSessionStorage;
use crate::traits::SessionStorage;

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Name of the per-user data directory under `$HOME`.
const HOME_DIR_NAME: &str = ".stockdeck";

/// Log file name inside the home directory.
const LOG_FILE: &str = "stockdeck.log";

/// Environment variables read by [`ClientConfig::from_env`].
pub mod env {
    pub const API_URL: &str = "STOCKDECK_API_URL";
    pub const TIMEOUT_SECS: &str = "STOCKDECK_TIMEOUT_SECS";
    pub const HOME: &str = "STOCKDECK_HOME";
    pub const ASSETS: &str = "STOCKDECK_ASSETS";
    pub const LOG: &str = "STOCKDECK_LOG";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Directory holding the session file and log
    pub home_dir: PathBuf,
    /// Directory searched for logo candidates
    pub asset_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let home_dir = default_home_dir();
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            asset_dir: home_dir.join("assets"),
            home_dir,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the home directory. The asset directory follows unless it was
    /// set explicitly afterwards.
    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.asset_dir = dir.join("assets");
        self.home_dir = dir;
        self
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Defaults overridden by `STOCKDECK_*` environment variables.
    ///
    /// Unparseable or empty values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(home) = non_empty_var(env::HOME) {
            config = config.with_home_dir(home);
        }
        if let Some(assets) = non_empty_var(env::ASSETS) {
            config = config.with_asset_dir(assets);
        }
        if let Some(url) = non_empty_var(env::API_URL) {
            config = config.with_base_url(url);
        }
        if let Some(raw) = non_empty_var(env::TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(Duration::from_secs(secs)),
                _ => tracing::warn!("ignoring {}={:?}: expected positive seconds", env::TIMEOUT_SECS, raw),
            }
        }

        config
    }

    pub fn log_path(&self) -> PathBuf {
        self.home_dir.join(LOG_FILE)
    }

    pub fn session_path(&self) -> PathBuf {
        self.session_storage_impl().session_path().to_path_buf()
    }

    /// File-backed session storage rooted at the home directory.
    pub fn session_storage(&self) -> Arc<dyn SessionStorage> {
        Arc::new(self.session_storage_impl())
    }

    fn session_storage_impl(&self) -> FileSessionStorage {
        FileSessionStorage::in_dir(&self.home_dir)
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }
}

fn default_home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HOME_DIR_NAME)
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [env::API_URL, env::TIMEOUT_SECS, env::HOME, env::ASSETS] {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new()
            .with_base_url("https://example.com/api/")
            .with_timeout(Duration::from_secs(3))
            .with_home_dir("/tmp/sd");

        assert_eq!(config.base_url, "https://example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.asset_dir, PathBuf::from("/tmp/sd/assets"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/sd/stockdeck.log"));
        assert_eq!(config.session_path(), PathBuf::from("/tmp/sd/session.json"));
    }

    #[test]
    fn test_explicit_asset_dir_wins() {
        let config = ClientConfig::new()
            .with_home_dir("/tmp/sd")
            .with_asset_dir("/srv/brand");
        assert_eq!(config.asset_dir(), Path::new("/srv/brand"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.home_dir.ends_with(HOME_DIR_NAME));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(env::API_URL, "http://inventory.local:8080/api/");
        std::env::set_var(env::TIMEOUT_SECS, "7");
        std::env::set_var(env::HOME, "/tmp/stockdeck-home");

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://inventory.local:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.home_dir, PathBuf::from("/tmp/stockdeck-home"));
        assert_eq!(config.asset_dir, PathBuf::from("/tmp/stockdeck-home/assets"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_bad_timeout() {
        clear_env();
        std::env::set_var(env::TIMEOUT_SECS, "soon");
        assert_eq!(ClientConfig::from_env().timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        std::env::set_var(env::TIMEOUT_SECS, "0");
        assert_eq!(ClientConfig::from_env().timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        clear_env();
    }
}
