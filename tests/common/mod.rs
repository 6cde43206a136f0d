//! Common test utilities for integration tests.
//!
//! Each test gets its own wiremock backend and an [`ApiClient`] talking to
//! it over real HTTP through [`ReqwestHttpClient`].
//!
//! ```ignore
//! let backend = TestBackend::start().await;
//! mount_order(&backend.server, order_json("42", &[(2, 3.5)])).await;
//! let api = backend.client(InMemorySessionStorage::new()).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use stockdeck::adapters::{InMemorySessionStorage, ReqwestHttpClient};
use stockdeck::api::ApiClient;
use stockdeck::app::{App, AppMessage};
use stockdeck::models::User;
use stockdeck::session::{Session, SessionStore};
use stockdeck::ui::Logo;
use tokio::sync::mpsc;
use wiremock::MockServer;

/// A mock backend serving the API under `/api`.
pub struct TestBackend {
    pub server: MockServer,
}

impl TestBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    /// Client backed by `storage`, with any stored session restored.
    pub async fn client(&self, storage: InMemorySessionStorage) -> ApiClient {
        let store = SessionStore::restore(Arc::new(storage)).await;
        let http = ReqwestHttpClient::with_timeout(Duration::from_secs(5))
            .expect("Failed to build HTTP client");
        ApiClient::new(&self.base_url(), http, Arc::new(store))
    }

    /// Client with a valid session already installed.
    pub async fn signed_in_client(&self) -> ApiClient {
        self.client(InMemorySessionStorage::with_session(test_session())).await
    }
}

pub fn test_user() -> User {
    User {
        id: "7".to_string(),
        email: "ops@example.com".to_string(),
        first_name: "Olga".to_string(),
        last_name: "Petrova".to_string(),
    }
}

/// A session whose token never expires.
pub fn test_session() -> Session {
    Session::new(test_user(), TEST_TOKEN)
}

pub const TEST_TOKEN: &str = "test-token-12345";

/// App with the built-in logo and its message receiver split off.
pub fn test_app(api: ApiClient) -> (App, mpsc::UnboundedReceiver<AppMessage>) {
    let mut app = App::new(api, Logo::builtin());
    let rx = app.message_rx.take().expect("receiver already taken");
    (app, rx)
}

/// Wait for the next background message, failing the test after a while.
pub async fn next_message(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for an app message")
        .expect("message channel closed")
}

/// Feed messages to the app until `done` holds.
pub async fn pump_until(
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<AppMessage>,
    mut done: impl FnMut(&App) -> bool,
) {
    while !done(app) {
        let msg = next_message(rx).await;
        app.handle_message(msg);
    }
}
