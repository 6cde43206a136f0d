//! Error category classification.
//!
//! Categories drive how a page reacts to a failure: which message to show,
//! whether the session must be dropped, and whether a manual retry makes
//! sense.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout. Generally transient.
    Network,

    /// Missing or rejected credentials. Requires signing in again.
    Auth,

    /// Backend-side failure (HTTP 5xx).
    Server,

    /// The request was understood but refused (HTTP 4xx other than auth).
    Client,

    /// The backend answered with a body this client cannot read.
    Data,

    /// The user must correct their input.
    User,

    /// The operation was abandoned because its view went away.
    Cancelled,
}

impl ErrorCategory {
    /// Returns true if a manual retry of the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Data => "data",
            ErrorCategory::User => "user",
            ErrorCategory::Cancelled => "cancelled",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and try again",
            ErrorCategory::Auth => "Sign in again",
            ErrorCategory::Server => "The server may be experiencing issues. Try again later",
            ErrorCategory::Client => "Go back and pick another record",
            ErrorCategory::Data => "The server sent unexpected data. Report this if it persists",
            ErrorCategory::User => "Check your input and try again",
            ErrorCategory::Cancelled => "",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
