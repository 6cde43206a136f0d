//! Session storage trait abstraction.
//!
//! The session token survives restarts. Where it is kept is behind this
//! trait so the store can be exercised against an in-memory double.

use async_trait::async_trait;
use thiserror::Error;

use crate::session::Session;

/// Session storage errors.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Failed to read the stored session
    #[error("Failed to read session: {0}")]
    ReadFailed(String),
    /// Failed to write the session
    #[error("Failed to save session: {0}")]
    SaveFailed(String),
    /// Failed to remove the stored session
    #[error("Failed to clear session: {0}")]
    ClearFailed(String),
    /// The stored session could not be decoded
    #[error("Stored session is corrupt: {0}")]
    Corrupt(String),
    /// No location to store the session in
    #[error("Could not determine a home directory for session storage")]
    NoHomeDirectory,
}

/// Persistent key-value slot for the current session.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Load the stored session.
    ///
    /// - `Ok(Some(session))` if one was stored
    /// - `Ok(None)` if nothing is stored
    /// - `Err(error)` if reading or decoding failed
    async fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Replace the stored session.
    async fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Remove the stored session. Succeeds if nothing was stored.
    async fn clear(&self) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        assert_eq!(
            StorageError::SaveFailed("disk full".to_string()).to_string(),
            "Failed to save session: disk full"
        );
        assert_eq!(
            StorageError::Corrupt("expected value".to_string()).to_string(),
            "Stored session is corrupt: expected value"
        );
        assert!(StorageError::NoHomeDirectory.to_string().contains("home directory"));
    }

    #[test]
    fn test_storage_error_implements_error_trait() {
        let err = StorageError::ClearFailed("busy".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
