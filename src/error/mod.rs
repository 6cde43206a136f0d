//! Error handling for stockdeck.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **ApiError**: the one normalized error every API call resolves to
//! - **ApiResult<T>**: result alias used throughout the client and view-models
//!
//! | Category | Source | Page reaction |
//! |----------|--------|---------------|
//! | Network | connection, DNS, timeout | notice, manual retry |
//! | Auth | HTTP 401/403 | 401 drops the session |
//! | Server | HTTP 5xx | notice, manual retry |
//! | Client | other HTTP 4xx | notice, redirect |
//! | Data | unreadable body | notice, redirect |
//! | User | validation | inline message |
//! | Cancelled | view deactivated | result discarded |

mod api;
mod category;

pub use api::{extract_backend_message, ApiError, ApiErrorKind};
pub use category::ErrorCategory;

/// Type alias for Results using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;
