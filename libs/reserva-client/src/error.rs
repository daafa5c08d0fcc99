use http::StatusCode;
use thiserror::Error;

use crate::envelope::ErrorBody;

/// Fixed message for 401 responses.
pub(crate) const MSG_BAD_CREDENTIALS: &str =
    "Credenciales incorrectas. Verifica tu usuario y contraseña.";
/// Fixed message for 404 responses.
pub(crate) const MSG_USER_NOT_FOUND: &str = "Usuario no encontrado.";
/// Fixed message for 500 responses.
pub(crate) const MSG_SERVER_ERROR: &str = "Error del servidor. Intenta más tarde.";
/// Fixed message when no response was received at all.
pub(crate) const MSG_CONNECTION: &str = "Error de conexión. Verifica tu internet.";

/// The one error shape callers observe.
///
/// Whatever went wrong underneath, the caller receives a single
/// display-ready message. Raw transport errors and the response envelope
/// never escape the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message, safe to show to the user as-is.
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Compute the caller-visible message for a failed response.
///
/// The server's `error` field wins over its `message` field, which wins over
/// the transport-level text. The fixed 401/404/500 messages override all
/// three, whatever the server put in the body.
pub(crate) fn failure_message(status: StatusCode, body: &ErrorBody, transport: &str) -> String {
    match status.as_u16() {
        401 => MSG_BAD_CREDENTIALS.to_owned(),
        404 => MSG_USER_NOT_FOUND.to_owned(),
        500 => MSG_SERVER_ERROR.to_owned(),
        _ => body
            .error
            .clone()
            .or_else(|| body.message.clone())
            .unwrap_or_else(|| transport.to_owned()),
    }
}
