//! Tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file in the
//! home directory instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::env;

/// Filter used when `STOCKDECK_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "stockdeck=info,warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(env::LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send tracing output to `log_path` (appending).
///
/// Returns an error if the log file cannot be opened. Calling this twice is
/// harmless: the second subscriber is rejected and ignored.
pub fn init_file_logging(log_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_logging_creates_log_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("stockdeck.log");

        init_file_logging(&path).unwrap();
        assert!(path.exists());
    }
}
