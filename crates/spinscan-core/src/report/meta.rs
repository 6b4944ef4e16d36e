//! Command and request-id extraction from a request body.

use serde_json::Value;

use crate::capture::HarEntry;

/// Placeholder for a command or request id that could not be read.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMeta {
    pub command: String,
    pub request_id: String,
}

/// Why a request body yielded no metadata. Always recoverable.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    #[error("request has no body")]
    MissingBody,
    #[error("request body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("request body is JSON but not an object")]
    NotAnObject,
}

impl RequestMeta {
    pub fn unknown() -> Self {
        Self {
            command: UNKNOWN.to_string(),
            request_id: UNKNOWN.to_string(),
        }
    }

    /// Reads `cmd` and `id` from a JSON object body. Absent or null fields become `unknown`.
    pub fn from_body(body: &str) -> Result<Self, MetaError> {
        let value: Value = serde_json::from_str(body)?;
        let obj = value.as_object().ok_or(MetaError::NotAnObject)?;
        Ok(Self {
            command: field_text(obj.get("cmd")),
            request_id: field_text(obj.get("id")),
        })
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Metadata for a record; any [`MetaError`] falls back to [`RequestMeta::unknown`].
pub fn extract_request_meta(entry: &HarEntry) -> RequestMeta {
    let body = entry
        .request
        .body_text()
        .filter(|b| !b.is_empty())
        .ok_or(MetaError::MissingBody);
    match body.and_then(RequestMeta::from_body) {
        Ok(meta) => meta,
        Err(MetaError::MissingBody) => RequestMeta::unknown(),
        Err(e) => {
            tracing::debug!(url = %entry.request.url, "request metadata unavailable: {}", e);
            RequestMeta::unknown()
        }
    }
}
