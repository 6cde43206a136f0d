//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport (GET, POST)
//! - [`SessionStorage`] - persistence of the signed-in session

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Method, Response};
pub use storage::{SessionStorage, StorageError};
