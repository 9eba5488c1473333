use crate::domain::model::{ReportKey, ReportResponse};
use crate::utils::error::{ReportError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a report body into its envelope.
///
/// The reporting API serialises its payload to a string and then encodes that
/// string again, so the body is usually a JSON string holding JSON. Plain JSON
/// objects are accepted as well.
pub fn decode_report<T: DeserializeOwned>(key: &ReportKey, body: &str) -> Result<ReportResponse<T>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ReportError::malformed(key, format!("body is not JSON: {}", e)))?;

    let value = match value {
        Value::String(inner) => {
            tracing::trace!("Unwrapping string-encoded body for {}", key);
            serde_json::from_str(&inner).map_err(|e| {
                ReportError::malformed(key, format!("inner payload is not JSON: {}", e))
            })?
        }
        other => other,
    };

    if !value.is_object() {
        return Err(ReportError::malformed(key, "envelope is not an object"));
    }

    serde_json::from_value(value).map_err(|e| ReportError::malformed(key, e))
}
