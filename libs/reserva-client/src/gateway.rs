use std::sync::Arc;

use http::{HeaderValue, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::GatewayConfig;
use crate::envelope::{ErrorBody, unwrap_envelope};
use crate::error::{ApiError, MSG_CONNECTION, failure_message};
use crate::nav::{LOGIN_ROUTE, Navigator};
use crate::request::ApiRequest;
use crate::session::SessionContext;

/// Session-aware HTTP gateway for the Reserva API.
///
/// Every call funnels through one pipeline: attach the bearer credential,
/// execute, strip the response envelope on success, normalize the failure
/// otherwise. A 401 outside the login screen additionally clears the session
/// and redirects to the login route.
///
/// Cloning is cheap; clones share the underlying connection pool, session
/// and navigator.
#[derive(Clone)]
pub struct ApiGateway {
    client: reqwest::Client,
    api_root: String,
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
}

impl ApiGateway {
    /// Build a gateway over the resolved configuration.
    ///
    /// The underlying client carries no timeout: a hung network call hangs
    /// its caller, and cancellation is the host's concern.
    pub fn new(
        config: &GatewayConfig,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::new(e.to_string()))?;

        Ok(Self {
            client,
            api_root: config.api_root(),
            session,
            navigator,
        })
    }

    /// The session context this gateway reads and, on 401, clears.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Execute one request through the full pipeline.
    ///
    /// On success the returned value is the envelope's `data` field when the
    /// body is enveloped, the body itself otherwise. On failure the error
    /// carries the normalized message; see [`ApiError`].
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let (method, path, mut headers, body) = request.into_parts();
        let url = format!("{}/{}", self.api_root, path.trim_start_matches('/'));

        if let Some(credential) = self.session.credential() {
            let bearer = HeaderValue::try_from(format!("Bearer {credential}"))
                .map_err(|e| ApiError::new(format!("invalid credential: {e}")))?;
            headers.insert(http::header::AUTHORIZATION, bearer);
        }

        tracing::debug!(method = %method, url = %url, "Dispatching API request");

        let mut req_builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Transport failure");
            if e.is_connect() || e.is_timeout() {
                ApiError::new(MSG_CONNECTION)
            } else {
                ApiError::new(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            let raw = response
                .bytes()
                .await
                .map_err(|e| ApiError::new(e.to_string()))?;
            tracing::debug!(url = %url, status = status.as_u16(), "API request succeeded");
            return Ok(decode_success_body(&raw));
        }

        // Transport-level text, captured before the body is consumed.
        let transport = match response.error_for_status_ref() {
            Err(e) => e.to_string(),
            Ok(_) => format!("request failed with status {status}"),
        };
        let raw = response.bytes().await.unwrap_or_default();
        Err(self.normalize_failure(status, &raw, &transport))
    }

    /// GET `path` and deserialize the unwrapped payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = ApiRequest::builder().method(Method::GET).path(path).build()?;
        self.dispatch(request).await
    }

    /// POST `body` as JSON to `path` and deserialize the unwrapped payload.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = ApiRequest::builder()
            .method(Method::POST)
            .path(path)
            .json(body)?
            .build()?;
        self.dispatch(request).await
    }

    /// PUT `body` as JSON to `path` and deserialize the unwrapped payload.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = ApiRequest::builder()
            .method(Method::PUT)
            .path(path)
            .json(body)?
            .build()?;
        self.dispatch(request).await
    }

    /// DELETE `path` and deserialize the unwrapped payload.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = ApiRequest::builder()
            .method(Method::DELETE)
            .path(path)
            .build()?;
        self.dispatch(request).await
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let value = self.execute(request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::new(e.to_string()))
    }

    /// Classify a failed response, run the session-expiry side effects and
    /// produce the normalized error.
    fn normalize_failure(&self, status: StatusCode, raw: &[u8], transport: &str) -> ApiError {
        if status == StatusCode::UNAUTHORIZED && self.navigator.current_path() != LOGIN_ROUTE {
            // Teardown is independent of message construction: clear the
            // session and redirect exactly once per failed request.
            self.session.clear();
            self.navigator.navigate_to(LOGIN_ROUTE);
            tracing::warn!("Session expired, redirecting to login");
        }

        let body = ErrorBody::parse(raw);
        let message = failure_message(status, &body, transport);
        tracing::warn!(status = status.as_u16(), message = %message, "API request failed");
        ApiError::new(message)
    }
}

/// Decode a successful body: empty becomes JSON null, JSON gets the envelope
/// stripped, anything else passes through as a JSON string.
fn decode_success_body(raw: &[u8]) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    match serde_json::from_slice::<Value>(raw) {
        Ok(value) => unwrap_envelope(value),
        Err(_) => Value::String(String::from_utf8_lossy(raw).into_owned()),
    }
}
