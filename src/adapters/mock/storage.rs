//! In-memory session storage for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::session::Session;
use crate::traits::{SessionStorage, StorageError};

/// In-memory session storage with switchable failures.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStorage {
    session: Arc<Mutex<Option<Session>>>,
    save_should_fail: Arc<Mutex<bool>>,
    load_should_fail: Arc<Mutex<bool>>,
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage that already holds `session`.
    pub fn with_session(session: Session) -> Self {
        let storage = Self::default();
        *storage.session.lock().unwrap() = Some(session);
        storage
    }

    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Get the stored session synchronously (for testing).
    pub fn get_session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(StorageError::ReadFailed("Mock load failure".to_string()));
        }
        Ok(self.session.lock().unwrap().clone())
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(StorageError::SaveFailed("Mock save failure".to_string()));
        }
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(StorageError::ClearFailed("Mock clear failure".to_string()));
        }
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn session() -> Session {
        Session::new(
            User {
                id: "1".to_string(),
                email: "a@b.c".to_string(),
                first_name: String::new(),
                last_name: String::new(),
            },
            "mem-token",
        )
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let storage = InMemorySessionStorage::new();
        assert!(storage.load().await.unwrap().is_none());

        storage.save(&session()).await.unwrap();
        assert_eq!(storage.load().await.unwrap().unwrap().token, "mem-token");

        storage.clear().await.unwrap();
        assert!(storage.get_session().is_none());
    }

    #[tokio::test]
    async fn test_failure_switches() {
        let storage = InMemorySessionStorage::with_session(session());
        storage.set_load_should_fail(true);
        storage.set_clear_should_fail(true);
        storage.set_save_should_fail(true);

        assert!(matches!(storage.load().await, Err(StorageError::ReadFailed(_))));
        assert!(matches!(storage.clear().await, Err(StorageError::ClearFailed(_))));
        assert!(matches!(storage.save(&session()).await, Err(StorageError::SaveFailed(_))));
        assert!(storage.get_session().is_some());
    }
}
