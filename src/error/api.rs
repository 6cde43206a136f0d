//! Normalized API error.
//!
//! Every failure the HTTP client wrapper can produce (transport failure,
//! non-2xx status, unreadable payload, bad input, cancellation) is surfaced
//! as one [`ApiError`] carrying a user-facing message and, when the backend
//! answered, its status code.

use std::fmt;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// What went wrong, independent of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Connection refused, DNS failure, broken body stream.
    Network,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The backend answered with a non-2xx status.
    HttpStatus,
    /// The body could not be decoded into the expected shape.
    MalformedPayload,
    /// The request was never sent because its input was invalid.
    Validation,
    /// The owning view went away before the response arrived.
    Cancelled,
}

/// Normalized error returned by the API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// Short, user-facing message.
    pub message: String,
    /// HTTP status when the backend answered.
    pub status: Option<u16>,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: message.into(),
            status: None,
        }
    }

    pub fn timeout() -> Self {
        Self {
            kind: ApiErrorKind::Timeout,
            message: "The server took too long to respond. Please try again.".to_string(),
            status: None,
        }
    }

    /// Build from a non-2xx status, preferring the backend's own message.
    pub fn http_status(status: u16, backend_message: Option<String>) -> Self {
        let message = backend_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_status_message(status));
        Self {
            kind: ApiErrorKind::HttpStatus,
            message,
            status: Some(status),
        }
    }

    pub fn malformed(status: Option<u16>) -> Self {
        Self {
            kind: ApiErrorKind::MalformedPayload,
            message: "Received an invalid response from the server.".to_string(),
            status,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            message: message.into(),
            status: None,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            kind: ApiErrorKind::Cancelled,
            message: "The request was cancelled.".to_string(),
            status: None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.kind {
            ApiErrorKind::Network | ApiErrorKind::Timeout => ErrorCategory::Network,
            ApiErrorKind::MalformedPayload => ErrorCategory::Data,
            ApiErrorKind::Validation => ErrorCategory::User,
            ApiErrorKind::Cancelled => ErrorCategory::Cancelled,
            ApiErrorKind::HttpStatus => match self.status {
                Some(401) | Some(403) => ErrorCategory::Auth,
                Some(s) if s >= 500 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Network => "E_API_NET",
            ApiErrorKind::Timeout => "E_API_TIMEOUT",
            ApiErrorKind::HttpStatus => "E_API_HTTP",
            ApiErrorKind::MalformedPayload => "E_API_PAYLOAD",
            ApiErrorKind::Validation => "E_API_INPUT",
            ApiErrorKind::Cancelled => "E_API_CANCEL",
        }
    }

    /// Message for notices and inline errors.
    ///
    /// Failures a retry may fix carry the category's hint.
    pub fn user_message(&self) -> String {
        let category = self.category();
        if category.is_retryable() {
            format!("{} {}", self.message, category.recovery_hint())
        } else {
            self.message.clone()
        }
    }

    /// A 401 means the token is missing, expired or revoked.
    pub fn requires_reauth(&self) -> bool {
        self.kind == ApiErrorKind::HttpStatus && self.status == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::HttpStatus && self.status == Some(404)
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == ApiErrorKind::Cancelled
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(_) => ApiError::timeout(),
            HttpError::Cancelled => ApiError::cancelled(),
            HttpError::InvalidUrl(url) => ApiError::validation(format!("Invalid request URL: {}", url)),
            HttpError::ConnectionFailed(_) => ApiError::network(
                "Unable to connect to the server. Please check your connection.",
            ),
            HttpError::Io(_) | HttpError::Other(_) => {
                ApiError::network("The connection to the server failed. Please try again.")
            }
        }
    }
}

fn default_status_message(status: u16) -> String {
    match status {
        400 => "The request was invalid.".to_string(),
        401 => "Your session has expired. Please sign in again.".to_string(),
        403 => "You don't have permission for this action.".to_string(),
        404 => "The requested record was not found.".to_string(),
        409 => "The record was changed by someone else.".to_string(),
        429 => "Too many requests. Please wait a moment and try again.".to_string(),
        500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
        _ => format!("The server returned an error (HTTP {}).", status),
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"error": "..."}`, `{"message": "..."}` and
/// `{"error": {"message": "..."}}`. Anything else yields `None`.
pub fn extract_backend_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let candidate = match value.get("error") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Object(obj)) => obj
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        _ => None,
    };
    candidate
        .or_else(|| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_prefers_backend_message() {
        let err = ApiError::http_status(404, Some("Order 9 not found".to_string()));
        assert_eq!(err.message, "Order 9 not found");
        assert_eq!(err.status, Some(404));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: Order 9 not found");
    }

    #[test]
    fn test_http_status_falls_back_on_blank_message() {
        let err = ApiError::http_status(500, Some("   ".to_string()));
        assert!(err.message.contains("server"));
        assert_eq!(err.category(), ErrorCategory::Server);
    }

    #[test]
    fn test_category_mapping() {
        assert_eq!(ApiError::http_status(401, None).category(), ErrorCategory::Auth);
        assert_eq!(ApiError::http_status(403, None).category(), ErrorCategory::Auth);
        assert_eq!(ApiError::http_status(404, None).category(), ErrorCategory::Client);
        assert_eq!(ApiError::timeout().category(), ErrorCategory::Network);
        assert_eq!(ApiError::malformed(Some(200)).category(), ErrorCategory::Data);
        assert_eq!(ApiError::validation("x").category(), ErrorCategory::User);
    }

    #[test]
    fn test_user_message_hint_names_no_key() {
        let network = ApiError::network("refused").user_message();
        assert!(network.ends_with("Check your connection and try again"));
        assert!(!network.contains("press"));

        let server = ApiError::http_status(503, None).user_message();
        assert!(server.contains("Try again later"));

        assert_eq!(ApiError::http_status(404, Some("Gone".to_string())).user_message(), "Gone");
    }

    #[test]
    fn test_requires_reauth_only_for_401() {
        assert!(ApiError::http_status(401, None).requires_reauth());
        assert!(!ApiError::http_status(403, None).requires_reauth());
        assert!(!ApiError::network("down").requires_reauth());
    }

    #[test]
    fn test_from_http_error() {
        let err: ApiError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert!(err.status.is_none());

        let err: ApiError = HttpError::Timeout("15s".to_string()).into();
        assert_eq!(err.kind, ApiErrorKind::Timeout);

        let err: ApiError = HttpError::Cancelled.into();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_extract_backend_message_shapes() {
        assert_eq!(
            extract_backend_message(br#"{"error": "Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(
            extract_backend_message(br#"{"message": "Nope"}"#),
            Some("Nope".to_string())
        );
        assert_eq!(
            extract_backend_message(br#"{"error": {"code": 7, "message": "Nested"}}"#),
            Some("Nested".to_string())
        );
        assert_eq!(extract_backend_message(br#"{"error": ""}"#), None);
        assert_eq!(extract_backend_message(b"<html>502</html>"), None);
    }

    #[test]
    fn test_error_codes_are_distinct() {
        use std::collections::HashSet;
        let codes: HashSet<_> = [
            ApiError::network("x"),
            ApiError::timeout(),
            ApiError::http_status(500, None),
            ApiError::malformed(None),
            ApiError::validation("x"),
            ApiError::cancelled(),
        ]
        .iter()
        .map(|e| e.error_code())
        .collect();
        assert_eq!(codes.len(), 6);
    }
}
