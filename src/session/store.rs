//! Process-wide session store.

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tokio::sync::watch;

use super::Session;
use crate::api::ApiClient;
use crate::error::ApiErrorKind;
use crate::traits::SessionStorage;

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure { error: String },
}

/// Serializes as `{"success": true}` or `{"success": false, "error": "..."}`.
impl Serialize for LoginOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LoginOutcome::Success => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("success", &true)?;
                map.end()
            }
            LoginOutcome::Failure { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoginOutcome::Success => None,
            LoginOutcome::Failure { error } => Some(error),
        }
    }
}

/// Holds the current session and keeps it in sync with persistent storage.
///
/// The session is read-mostly: every request reads the token, while login
/// and logout replace the whole value. Consumers that want to react to
/// sign-in/sign-out can [`subscribe`](SessionStore::subscribe).
pub struct SessionStore {
    current: watch::Sender<Option<Arc<Session>>>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Create an empty store backed by `storage`.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let (current, _) = watch::channel(None);
        Self { current, storage }
    }

    /// Create a store and load any persisted session into it.
    ///
    /// Expired or unreadable sessions are discarded.
    pub async fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let store = Self::new(storage);
        match store.storage.load().await {
            Ok(Some(session)) if session.is_expired() => {
                tracing::info!(user = %session.user.email, "stored session expired, discarding");
                if let Err(e) = store.storage.clear().await {
                    tracing::warn!("failed to clear expired session: {}", e);
                }
            }
            Ok(Some(session)) => {
                tracing::info!(user = %session.user.email, "restored session");
                store.current.send_replace(Some(Arc::new(session)));
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("ignoring stored session: {}", e),
        }
        store
    }

    /// The current session, if any. Expired sessions are still returned;
    /// use [`is_authenticated`](Self::is_authenticated) for the predicate.
    pub fn current(&self) -> Option<Arc<Session>> {
        self.current.borrow().clone()
    }

    /// Token to attach to outgoing requests.
    pub fn token(&self) -> Option<String> {
        self.current
            .borrow()
            .as_ref()
            .filter(|s| !s.is_expired())
            .map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .borrow()
            .as_ref()
            .map(|s| !s.is_expired())
            .unwrap_or(false)
    }

    /// Receive every replacement of the session.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Session>>> {
        self.current.subscribe()
    }

    /// Persist `session` and make it current.
    ///
    /// A storage failure is logged; the session still applies for this run.
    pub async fn install(&self, session: Session) -> Arc<Session> {
        if let Err(e) = self.storage.save(&session).await {
            tracing::warn!("session will not survive restart: {}", e);
        }
        let session = Arc::new(session);
        self.current.send_replace(Some(session.clone()));
        session
    }

    /// Authenticate against the backend.
    ///
    /// On success the new session replaces any previous one. On failure the
    /// previous session is left untouched and a readable message returned.
    pub async fn login(
        &self,
        api: &ApiClient,
        email: &str,
        password: &str,
    ) -> LoginOutcome {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return LoginOutcome::Failure {
                error: "Email and password are required.".to_string(),
            };
        }

        match api.login(email, password).await {
            Ok(response) => {
                let session = self.install(Session::from(response)).await;
                tracing::info!(user = %session.user.email, "signed in");
                LoginOutcome::Success
            }
            Err(e) => {
                tracing::info!(code = e.error_code(), status = ?e.status, "login rejected");
                let error = match e.kind {
                    ApiErrorKind::Cancelled => "Sign-in was interrupted.".to_string(),
                    _ => e.message,
                };
                LoginOutcome::Failure { error }
            }
        }
    }

    /// Drop the in-memory session immediately, leaving storage alone.
    ///
    /// Requests issued afterwards carry no token. Follow with
    /// [`clear_storage`](Self::clear_storage) so it does not come back on
    /// restart.
    pub fn forget(&self) -> Option<Arc<Session>> {
        self.current.send_replace(None)
    }

    /// Delete the persisted session. The in-memory session is untouched.
    ///
    /// A storage failure is logged, never surfaced.
    pub async fn clear_storage(&self) {
        if let Err(e) = self.storage.clear().await {
            tracing::warn!("failed to clear stored session: {}", e);
        }
    }

    /// Clear the session in memory and in storage. Never fails.
    pub async fn logout(&self) {
        let previous = self.forget();
        self.clear_storage().await;
        if let Some(session) = previous {
            tracing::info!(user = %session.user.email, "signed out");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}
