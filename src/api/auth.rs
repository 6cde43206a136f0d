//! Authentication endpoint.

use super::client::{decode, ApiClient};
use crate::error::{extract_backend_message, ApiError, ApiResult};
use crate::models::{LoginRequest, LoginResponse};
use crate::traits::Method;

/// Shown when the backend rejects credentials without saying why.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

impl ApiClient {
    /// `POST /login`.
    ///
    /// A 4xx without a backend message reports invalid credentials; other
    /// failures are normalized as usual.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::validation(format!("Could not encode request: {}", e)))?;

        let response = self.send_raw(Method::Post, "/login", &[], Some(&body)).await?;
        if response.is_success() {
            return decode(&response);
        }

        let backend_message = extract_backend_message(&response.body);
        let message = match response.status {
            400..=499 => Some(backend_message.unwrap_or_else(|| INVALID_CREDENTIALS.to_string())),
            _ => backend_message,
        };
        Err(ApiError::http_status(response.status, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::api::client::tests::{client_with, BASE};
    use crate::error::ApiErrorKind;
    use serde_json::json;

    fn login_url() -> String {
        format!("{}/login", BASE)
    }

    #[tokio::test]
    async fn test_login_success() {
        let mock = MockHttpClient::new();
        mock.set_response(
            &login_url(),
            MockResponse::json(
                200,
                json!({"user": {"id": 3, "email": "a@b.c", "firstName": "Ann"}, "token": "t-1"}),
            ),
        );
        let api = client_with(&mock);

        let response = api.login("a@b.c", "pw").await.unwrap();
        assert_eq!(response.token, "t-1");
        assert_eq!(response.user.id, "3");

        let request = &mock.get_requests()[0];
        assert_eq!(request.method, "POST");
        let sent: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"email": "a@b.c", "password": "pw"}));
    }

    #[tokio::test]
    async fn test_login_rejected_uses_backend_message() {
        let mock = MockHttpClient::new();
        mock.set_response(&login_url(), MockResponse::json(401, json!({"error": "Account locked"})));
        let api = client_with(&mock);

        let err = api.login("a@b.c", "pw").await.unwrap_err();
        assert_eq!(err.status, Some(401));
        assert_eq!(err.message, "Account locked");
    }

    #[tokio::test]
    async fn test_login_rejected_without_message_falls_back() {
        let mock = MockHttpClient::new();
        mock.set_response(&login_url(), MockResponse::raw(401, ""));
        let api = client_with(&mock);

        let err = api.login("a@b.c", "pw").await.unwrap_err();
        assert_eq!(err.message, INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_login_server_error_keeps_generic_message() {
        let mock = MockHttpClient::new();
        mock.set_response(&login_url(), MockResponse::raw(502, "bad gateway"));
        let api = client_with(&mock);

        let err = api.login("a@b.c", "pw").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::HttpStatus);
        assert_ne!(err.message, INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_login_missing_token_is_malformed() {
        let mock = MockHttpClient::new();
        mock.set_response(&login_url(), MockResponse::json(200, json!({"user": {"id": 1, "email": "x"}})));
        let api = client_with(&mock);

        let err = api.login("a@b.c", "pw").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::MalformedPayload);
    }
}
