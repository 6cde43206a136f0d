//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable, optionally delayed responses
//! - [`InMemorySessionStorage`] - in-memory session storage

pub mod http;
pub mod storage;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use storage::InMemorySessionStorage;
