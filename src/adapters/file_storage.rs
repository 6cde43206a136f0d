//! File-based session storage adapter.
//!
//! Stores the session as JSON in `<home>/session.json`, where `<home>` is
//! `~/.stockdeck` unless configured otherwise.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::session::Session;
use crate::traits::{SessionStorage, StorageError};

/// The session file name.
pub const SESSION_FILE: &str = "session.json";

/// File-based session storage.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    session_path: PathBuf,
}

impl FileSessionStorage {
    /// Store the session file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            session_path: dir.as_ref().join(SESSION_FILE),
        }
    }

    /// Get the path to the session file.
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        let bytes = match tokio::fs::read(&self.session_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::ReadFailed(e.to_string())),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        if let Some(parent) = self.session_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        }

        let json = serde_json::to_vec_pretty(session)
            .map_err(|e| StorageError::SaveFailed(e.to_string()))?;

        // Temp file + rename: the session file is never observed half-written.
        let tmp_path = self.session_path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| StorageError::SaveFailed(e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        }

        tokio::fs::rename(&tmp_path, &self.session_path)
            .await
            .map_err(|e| StorageError::SaveFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.session_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::ClearFailed(e.to_string())),
        }
    }
}
