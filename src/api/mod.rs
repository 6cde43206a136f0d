//! Backend API client.
//!
//! [`ApiClient`] wraps an [`HttpClient`](crate::traits::HttpClient), attaches
//! the session token and turns every failure into an
//! [`ApiError`](crate::error::ApiError). Typed endpoints live in the
//! submodules.

mod auth;
pub(crate) mod client;
mod orders;

pub use auth::INVALID_CREDENTIALS;
pub use client::ApiClient;
