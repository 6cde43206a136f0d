//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSessionStorage`] - session persisted as a JSON file
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable HTTP responses
//! - [`mock::InMemorySessionStorage`] - in-memory session storage

pub mod file_storage;
pub mod mock;
pub mod reqwest_http;

pub use file_storage::FileSessionStorage;
pub use mock::{InMemorySessionStorage, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
