//! Fixed-layout text blocks for the report.

use serde_json::Value;

use crate::capture::HarEntry;

use super::meta::RequestMeta;
use super::ReportOptions;

const HEAVY_RULE_WIDTH: usize = 100;
const LIGHT_RULE_WIDTH: usize = 80;

/// Shown for a missing request body, status, or MIME type.
pub const NOT_AVAILABLE: &str = "N/A";
pub const BODY_NOT_CAPTURED: &str = "Response body not captured in HAR";

fn heavy_rule() -> String {
    "=".repeat(HEAVY_RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(LIGHT_RULE_WIDTH)
}

/// Report title followed by a heavy rule.
pub fn format_header(title: &str) -> String {
    format!("{}\n{}\n\n", title, heavy_rule())
}

/// Per-log heading with the number of HTTP entries in that log. `log_number` is 1-based.
pub fn format_log_heading(log_number: usize, entry_count: usize) -> String {
    format!("LOG #{}: {} HTTP entries\n\n", log_number, entry_count)
}

pub fn format_trailer(total: usize) -> String {
    format!("\n\nTOTAL SPIN REQUESTS FOUND: {}\n", total)
}

/// Section for one matched record.
///
/// `index` is the running match number and `entry_index` the 1-based position
/// of the record within its log. The request body is cut to
/// `request_preview_chars` characters and the response body to
/// `response_preview_chars`.
pub fn format_section(
    index: usize,
    entry_index: usize,
    entry: &HarEntry,
    meta: &RequestMeta,
    opts: &ReportOptions,
) -> String {
    let heavy = heavy_rule();
    let light = light_rule();
    let request = &entry.request;
    let content = &entry.response.content;

    let status = entry
        .response
        .status
        .as_ref()
        .map(scalar_text)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let size = content
        .size
        .as_ref()
        .map(scalar_text)
        .unwrap_or_else(|| "0".to_string());
    let body = request
        .body_text()
        .filter(|b| !b.is_empty())
        .map(|b| truncate_chars(b, opts.request_preview_chars))
        .unwrap_or(NOT_AVAILABLE);

    let mut out = String::new();
    out.push_str(&format!("\n{heavy}\n"));
    out.push_str(&format!("SPIN #{} (Entry #{})\n", index, entry_index));
    out.push_str(&format!("{heavy}\n"));
    out.push_str(&format!("Command: {}\n", meta.command));
    out.push_str(&format!("Request ID: {}\n", meta.request_id));
    out.push_str(&format!("URL: {}\n", request.url));
    out.push_str(&format!("STATUS: {}\n", status));
    out.push_str(&format!("\nREQUEST BODY:\n{light}\n"));
    out.push_str(body);
    out.push_str(&format!("\n{light}\n"));

    out.push_str(&format!("\nRESPONSE PREVIEW:\n{light}\n"));
    out.push_str(&format!("Size: {} bytes\n", size));
    out.push_str(&format!(
        "MIME Type: {}\n",
        content.mime_type.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
    match content.text.as_deref() {
        Some(text) => {
            out.push_str("\nResponse Body:\n");
            out.push_str(truncate_chars(text, opts.response_preview_chars));
        }
        None => {
            out.push_str(BODY_NOT_CAPTURED);
            out.push('\n');
        }
    }
    out.push_str(&format!("\n{light}\n\n"));
    out
}

/// Strings are written without quotes, other JSON values in their JSON form.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Longest prefix of `s` holding at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
