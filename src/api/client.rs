//! HTTP client wrapper for the inventory backend.

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{extract_backend_message, ApiError, ApiResult};
use crate::session::SessionStore;
use crate::traits::{Headers, HttpClient, HttpError, Method, Response};

/// Issues requests against the backend and normalizes every failure into an
/// [`ApiError`].
///
/// Each call is independent: no retries, caching or deduplication. The
/// current session token, if any, is attached as a bearer header.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, http: impl HttpClient + 'static, session: Arc<SessionStore>) -> Self {
        Self::with_shared_client(base_url, Arc::new(http), session)
    }

    pub fn with_shared_client(
        base_url: &str,
        http: Arc<dyn HttpClient>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    /// Production client built from configuration.
    pub fn from_config(config: &ClientConfig, session: Arc<SessionStore>) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::with_timeout(config.timeout)?;
        Ok(Self::new(&config.base_url, http, session))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Absolute URL for `path` with percent-encoded query parameters.
    ///
    /// `path` must be relative to the base URL and start with `/`.
    pub fn url_for(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<String> {
        if !path.starts_with('/') {
            return Err(ApiError::validation(format!("Invalid API path: {:?}", path)));
        }
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        Ok(url)
    }

    fn headers(&self, request_id: &str, has_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("X-Request-Id".to_string(), request_id.to_string());
        if has_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(session) = self.session.current().filter(|s| !s.is_expired()) {
            headers.insert("Authorization".to_string(), session.bearer());
        }
        headers
    }

    /// Perform a request and return the response whatever its status.
    ///
    /// Only transport failures are errors here.
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> ApiResult<Response> {
        let url = self.url_for(path, query)?;
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::validation(format!("Could not encode request: {}", e)))?;

        let request_id = uuid::Uuid::new_v4().to_string();
        let headers = self.headers(&request_id, body.is_some());
        tracing::debug!(%method, path, request_id = %request_id, "api request");

        let started = Instant::now();
        let result = self.http.request(method, &url, body.as_deref(), &headers).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(response) => {
                tracing::debug!(%method, path, status = response.status, elapsed_ms, "api response");
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(%method, path, elapsed_ms, "api transport failure: {}", e);
                Err(ApiError::from(e))
            }
        }
    }

    /// Perform a request; non-2xx statuses become [`ApiError`]s carrying the
    /// backend's message when it sent one.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> ApiResult<Response> {
        let response = self.send_raw(method, path, query, body).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::http_status(
                response.status,
                extract_backend_message(&response.body),
            ))
        }
    }

    /// GET `path` and decode the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let response = self.send(Method::Get, path, query, None).await?;
        decode(&response)
    }

    /// POST `body` as JSON to `path` and decode the reply as `T`.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::validation(format!("Could not encode request: {}", e)))?;
        let response = self.send(Method::Post, path, &[], Some(&value)).await?;
        decode(&response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Decode a 2xx body. Empty or mismatched bodies are malformed payloads.
pub(crate) fn decode<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    response.json::<T>().map_err(|e| {
        tracing::warn!(status = response.status, "malformed payload: {}", e);
        ApiError::malformed(Some(response.status))
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySessionStorage, MockHttpClient, MockResponse};
    use crate::error::ApiErrorKind;
    use crate::session::model::tests::user;
    use crate::session::Session;
    use serde_json::json;

    pub(crate) const BASE: &str = "http://api.test/api";

    pub(crate) fn client_with(mock: &MockHttpClient) -> ApiClient {
        let store = SessionStore::new(Arc::new(InMemorySessionStorage::new()));
        ApiClient::new(BASE, mock.clone(), Arc::new(store))
    }

    #[test]
    fn test_url_for_encodes_query() {
        let api = client_with(&MockHttpClient::new());
        assert_eq!(
            api.url_for("/orders", &[("status", "on hold")]).unwrap(),
            "http://api.test/api/orders?status=on%20hold"
        );
        assert_eq!(api.url_for("/products", &[]).unwrap(), "http://api.test/api/products");
    }

    #[test]
    fn test_url_for_rejects_relative_path() {
        let api = client_with(&MockHttpClient::new());
        let err = api.url_for("orders", &[]).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_no_token_without_session() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, json!([])));
        let api = client_with(&mock);

        api.send(Method::Get, "/products", &[], None).await.unwrap();

        let request = &mock.get_requests()[0];
        assert!(request.header("authorization").is_none());
        assert_eq!(request.header("accept"), Some("application/json"));
        assert!(request.header("x-request-id").is_some());
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_signed_in() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, json!([])));
        let api = client_with(&mock);
        api.session().install(Session::new(user(), "abc123")).await;

        api.send(Method::Get, "/products", &[], None).await.unwrap();

        assert_eq!(mock.get_requests()[0].header("authorization"), Some("Bearer abc123"));
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_status_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(422, json!({"error": "Quantity too large"})));
        let api = client_with(&mock);

        let err = api.send(Method::Get, "/orders", &[], None).await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::HttpStatus);
        assert_eq!(err.status, Some(422));
        assert_eq!(err.message, "Quantity too large");
    }

    #[tokio::test]
    async fn test_send_raw_keeps_error_status() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::raw(503, "down"));
        let api = client_with(&mock);

        let response = api.send_raw(Method::Get, "/suppliers", &[], None).await.unwrap();
        assert_eq!(response.status, 503);
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::raw(200, "<html>"));
        let api = client_with(&mock);

        let err = api.get_json::<Vec<serde_json::Value>>("/products", &[]).await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::MalformedPayload);
        assert_eq!(err.status, Some(200));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let api = client_with(&mock);

        let err = api.get_json::<serde_json::Value>("/products", &[]).await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert!(err.status.is_none());
    }

    #[tokio::test]
    async fn test_post_json_sends_body() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, json!({"ok": true})));
        let api = client_with(&mock);

        let reply: serde_json::Value = api.post_json("/echo", &json!({"a": 1})).await.unwrap();
        assert_eq!(reply["ok"], true);

        let request = &mock.get_requests()[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.body.as_deref(), Some(r#"{"a":1}"#));
        assert_eq!(request.header("content-type"), Some("application/json"));
    }
}
