use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

use crate::error::ApiError;

/// One outbound API call: method, path, headers and body.
///
/// Paths are relative to the gateway's `<base>/api` root. A request is
/// immutable once built; the gateway consumes it on execution.
#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl ApiRequest {
    /// Create a new request builder.
    pub fn builder() -> ApiRequestBuilder {
        ApiRequestBuilder::default()
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, rooted at `<base>/api`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The request body, if one was set.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Method, String, HeaderMap, Option<Bytes>) {
        (self.method, self.path, self.headers, self.body)
    }
}

/// Builder for constructing API requests with a fluent API.
#[derive(Debug, Default)]
pub struct ApiRequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl ApiRequestBuilder {
    /// Set the HTTP method. Defaults to GET.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the request path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a header.
    pub fn header<K, V>(mut self, key: K, value: V) -> Result<Self, ApiError>
    where
        K: TryInto<HeaderName>,
        V: TryInto<HeaderValue>,
        K::Error: std::fmt::Display,
        V::Error: std::fmt::Display,
    {
        let key = key
            .try_into()
            .map_err(|e| ApiError::new(format!("invalid header name: {e}")))?;
        let value = value
            .try_into()
            .map_err(|e| ApiError::new(format!("invalid header value: {e}")))?;
        self.headers.insert(key, value);
        Ok(self)
    }

    /// Set the body to a JSON-serialized value and add the Content-Type
    /// header.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_vec(value).map_err(|e| ApiError::new(e.to_string()))?;
        self.body = Some(Bytes::from(body));
        self.headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Ok(self)
    }

    /// Set the request body to raw bytes.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Build the request. The path is required.
    pub fn build(self) -> Result<ApiRequest, ApiError> {
        let method = self.method.unwrap_or(Method::GET);
        let path = self
            .path
            .ok_or_else(|| ApiError::new("request path is required"))?;

        Ok(ApiRequest {
            method,
            path,
            headers: self.headers,
            body: self.body,
        })
    }
}
