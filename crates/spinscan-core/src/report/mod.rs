//! Spin-request report: select matching exchange records from a capture and
//! write one fixed-layout section per match, followed by a total.

mod format;
mod meta;
mod predicate;
mod run;

pub use format::{
    format_header, format_log_heading, format_section, format_trailer, truncate_chars,
    BODY_NOT_CAPTURED, NOT_AVAILABLE,
};
pub use meta::{extract_request_meta, MetaError, RequestMeta, UNKNOWN};
pub use predicate::{MatchPredicate, DEFAULT_METHOD, DEFAULT_URL_CONTAINS};
pub use run::{run, scan_capture, write_report, LogStats, ReportSummary};

use crate::config::SpinScanConfig;

pub const DEFAULT_TITLE: &str = "STAR SPIN ANALYSIS - Debug Session";
pub const DEFAULT_REQUEST_PREVIEW_CHARS: usize = 500;
pub const DEFAULT_RESPONSE_PREVIEW_CHARS: usize = 2000;

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub title: String,
    pub predicate: MatchPredicate,
    pub request_preview_chars: usize,
    pub response_preview_chars: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            predicate: MatchPredicate::default(),
            request_preview_chars: DEFAULT_REQUEST_PREVIEW_CHARS,
            response_preview_chars: DEFAULT_RESPONSE_PREVIEW_CHARS,
        }
    }
}

impl From<&SpinScanConfig> for ReportOptions {
    fn from(cfg: &SpinScanConfig) -> Self {
        Self {
            title: cfg.report_title.clone(),
            predicate: MatchPredicate::new(
                cfg.predicate.url_contains.clone(),
                cfg.predicate.method.clone(),
            ),
            request_preview_chars: cfg.request_preview_chars,
            response_preview_chars: cfg.response_preview_chars,
        }
    }
}
