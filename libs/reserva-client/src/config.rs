use std::env;

/// Environment variable that overrides the API base address.
pub const BASE_URL_ENV: &str = "RESERVA_API_URL";

/// Fallback base address for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Path segment every API route hangs off of.
const API_SEGMENT: &str = "/api";

/// Resolved gateway configuration.
///
/// The base address is resolved once, at construction, and never re-read.
/// Restart the process to pick up a changed environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: String,
}

impl GatewayConfig {
    /// Resolve the base address from `RESERVA_API_URL`.
    ///
    /// The variable is optional; when absent the local development default
    /// is used.
    pub fn from_env() -> Self {
        Self::from_override(env::var(BASE_URL_ENV).ok().as_deref())
    }

    /// Resolve the base address from an optional override string.
    ///
    /// Overrides are normalized: surrounding whitespace is trimmed,
    /// `https://` is prepended when no scheme is present, and a trailing
    /// slash is stripped. A missing or blank override falls back to the
    /// local development default.
    pub fn from_override(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self {
                base_url: DEFAULT_BASE_URL.into(),
            };
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self {
                base_url: DEFAULT_BASE_URL.into(),
            };
        }

        let mut base_url = if trimmed.starts_with("http") {
            trimmed.to_owned()
        } else {
            format!("https://{trimmed}")
        };
        if base_url.ends_with('/') {
            base_url.pop();
        }

        Self { base_url }
    }

    /// Build a configuration from an explicit base address.
    ///
    /// The address goes through the same normalization as an environment
    /// override.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::from_override(Some(base_url.as_ref()))
    }

    /// The normalized base address, scheme included, without a trailing
    /// slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The root every request path is appended to: `<base>/api`.
    pub fn api_root(&self) -> String {
        format!("{}{API_SEGMENT}", self.base_url)
    }
}
