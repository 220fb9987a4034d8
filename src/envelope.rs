//! Top-level response envelope: `{"status": ..., "data": ...}` or
//! `{"status": ..., "message": ...}`.

use serde_json::{Map, Value};

use crate::error::{Result, YugiohPricesError};

/// The `status` value the service uses for a successful call.
pub const SUCCESS: &str = "success";

/// Parse a response body and return its `data` payload.
///
/// Returns `Ok(None)` for a success envelope without data (absent or `null`).
/// A non-success status becomes [`YugiohPricesError::Service`] carrying the
/// upstream `message` verbatim; a body that is not a JSON object becomes
/// [`YugiohPricesError::Parse`].
pub fn parse(text: &str) -> Result<Option<Value>> {
    // Object only; a derived struct would also take `[status, message, data]`.
    let mut envelope: Map<String, Value> = serde_json::from_str(text)?;

    if is_success(envelope.get("status")) {
        return Ok(envelope.remove("data").filter(|d| !d.is_null()));
    }

    let status = match envelope.remove("status") {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => "missing".to_string(),
        Some(other) => other.to_string(),
    };
    let message = match envelope.remove("message") {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    log::warn!("service returned status {:?}: {}", status, message);
    Err(YugiohPricesError::Service { status, message })
}

/// True if `status` is the string `"success"`.
pub fn is_success(status: Option<&Value>) -> bool {
    status.and_then(Value::as_str) == Some(SUCCESS)
}
