use serde::Deserialize;
use serde_json::Value;

/// Key whose presence marks a body as enveloped.
const SUCCESS_KEY: &str = "success";
/// Envelope field carrying the actual payload.
const DATA_KEY: &str = "data";

/// Strip the server's response envelope from a successful body.
///
/// The backend wraps payloads as `{ "success": ..., "data": ..., ... }`.
/// A body carrying the `success` key, whatever its value, is replaced by its
/// `data` field; an envelope without `data` yields JSON null. Anything else,
/// including non-object bodies, passes through unchanged.
pub(crate) fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut fields) if fields.contains_key(SUCCESS_KEY) => {
            fields.remove(DATA_KEY).unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Failure-body shape the server may send alongside an error status.
///
/// Parsed leniently: a body that is not JSON, or not an object, yields both
/// fields absent.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best-effort parse of a raw failure body.
    pub(crate) fn parse(raw: &[u8]) -> Self {
        serde_json::from_slice(raw).unwrap_or_default()
    }
}
