//! Permissive HAR-style structures for capture logs.
//!
//! Every field is optional on input: debug exports from the browser extension
//! routinely omit `postData`, `content.text`, and sometimes `status`. A field
//! holding an unexpected JSON type falls back to its default, and an
//! unreadable record only loses itself, never the rest of its log.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One element of the top-level capture array.
#[derive(Debug, Default, Deserialize)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub log: Option<HarRoot>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarRoot {
    #[serde(default, deserialize_with = "lenient_entries")]
    pub entries: Option<Vec<HarEntry>>,
}

/// One HTTP exchange record.
#[derive(Debug, Default, Deserialize)]
pub struct HarEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub request: HarRequest,
    #[serde(default, deserialize_with = "lenient")]
    pub response: HarResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub method: String,
    #[serde(default, rename = "postData", deserialize_with = "lenient")]
    pub post_data: Option<HarPostData>,
}

impl HarRequest {
    /// Raw request body text, if the capture recorded one.
    pub fn body_text(&self) -> Option<&str> {
        self.post_data.as_ref().and_then(|p| p.text.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HarPostData {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// `status` is kept as raw JSON: exports carry `200`, `"200"`, or nothing.
#[derive(Debug, Default, Deserialize)]
pub struct HarResponse {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: HarContent,
}

/// `size` is kept as raw JSON for the same reason as `status`.
#[derive(Debug, Default, Deserialize)]
pub struct HarContent {
    #[serde(default)]
    pub size: Option<Value>,
    #[serde(default, rename = "mimeType", deserialize_with = "lenient")]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// Deserializes `T`, or `T::default()` when the JSON has another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// `entries` array converted record by record. Anything but an array is treated as absent.
fn lenient_entries<'de, D>(deserializer: D) -> Result<Option<Vec<HarEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(None),
    };
    let entries = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<HarEntry>(item).unwrap_or_else(|e| {
                tracing::warn!(entry = i + 1, "unreadable exchange record: {}", e);
                HarEntry::default()
            })
        })
        .collect();
    Ok(Some(entries))
}
