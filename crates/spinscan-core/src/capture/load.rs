//! Read a capture file into memory.

use serde_json::Value;
use std::path::Path;

use super::error::CaptureError;
use super::parse::{HarEntry, LogEntry};

/// Whole capture held in memory; one slot per top-level log entry.
#[derive(Debug, Default)]
pub struct CaptureLog {
    pub logs: Vec<LogEntry>,
}

impl CaptureLog {
    /// Logs that carry an `entries` sequence, with their 0-based position in the capture.
    pub fn http_logs(&self) -> impl Iterator<Item = (usize, &[HarEntry])> {
        self.logs.iter().enumerate().filter_map(|(i, entry)| {
            entry
                .log
                .as_ref()
                .and_then(|log| log.entries.as_deref())
                .map(|entries| (i, entries))
        })
    }
}

/// Reads and parses a capture file.
///
/// Accepts an array of log entries (debug-session export) or a single HAR
/// document, which is treated as a capture with one log. Array elements that
/// do not deserialize as log entries are kept as empty slots so log numbering
/// still follows their position in the file.
pub fn load_capture(path: &Path) -> Result<CaptureLog, CaptureError> {
    let text = std::fs::read_to_string(path).map_err(|source| CaptureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let root: Value = serde_json::from_str(&text).map_err(|source| CaptureError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match root {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        other => {
            return Err(CaptureError::UnexpectedRoot {
                path: path.to_path_buf(),
                kind: json_kind(&other),
            })
        }
    };

    let logs = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<LogEntry>(item).unwrap_or_else(|e| {
                tracing::warn!(log = i + 1, "skipping unreadable log entry: {}", e);
                LogEntry::default()
            })
        })
        .collect();

    Ok(CaptureLog { logs })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
