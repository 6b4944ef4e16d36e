//! Report orchestration: load, scan, write.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::capture::{load_capture, CaptureLog};

use super::format::{format_header, format_log_heading, format_section, format_trailer};
use super::meta::extract_request_meta;
use super::ReportOptions;

/// Counts for one log that carried HTTP entries. `log_number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStats {
    pub log_number: usize,
    pub entries: usize,
    pub matches: usize,
}

/// Outcome of a scan. `total_matches` always equals the number of sections written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub logs: Vec<LogStats>,
    pub total_matches: usize,
}

impl ReportSummary {
    pub fn total_entries(&self) -> usize {
        self.logs.iter().map(|l| l.entries).sum()
    }
}

/// Writes the full report for an already-loaded capture to `out`.
pub fn write_report<W: Write>(
    capture: &CaptureLog,
    out: &mut W,
    opts: &ReportOptions,
) -> io::Result<ReportSummary> {
    out.write_all(format_header(&opts.title).as_bytes())?;

    let mut summary = ReportSummary::default();
    for (log_index, entries) in capture.http_logs() {
        let log_number = log_index + 1;
        out.write_all(format_log_heading(log_number, entries.len()).as_bytes())?;

        let mut log_matches = 0;
        for (entry_index, entry) in entries.iter().enumerate() {
            if !opts.predicate.matches(entry) {
                continue;
            }
            summary.total_matches += 1;
            log_matches += 1;
            let meta = extract_request_meta(entry);
            let section = format_section(summary.total_matches, entry_index + 1, entry, &meta, opts);
            out.write_all(section.as_bytes())?;
        }

        tracing::debug!(log = log_number, entries = entries.len(), matches = log_matches, "scanned log");
        summary.logs.push(LogStats {
            log_number,
            entries: entries.len(),
            matches: log_matches,
        });
    }

    out.write_all(format_trailer(summary.total_matches).as_bytes())?;
    Ok(summary)
}

/// Counts matching records per log without producing a report.
pub fn scan_capture(capture: &CaptureLog, opts: &ReportOptions) -> ReportSummary {
    let logs: Vec<LogStats> = capture
        .http_logs()
        .map(|(log_index, entries)| LogStats {
            log_number: log_index + 1,
            entries: entries.len(),
            matches: entries.iter().filter(|e| opts.predicate.matches(e)).count(),
        })
        .collect();
    let total_matches = logs.iter().map(|l| l.matches).sum();
    ReportSummary {
        logs,
        total_matches,
    }
}

/// Loads `input`, writes the report to `output`, and returns the counts.
///
/// The capture is loaded before `output` is opened, so a missing or malformed
/// capture leaves any existing report untouched.
pub fn run(input: &Path, output: &Path, opts: &ReportOptions) -> Result<ReportSummary> {
    let capture = load_capture(input)?;
    tracing::info!(
        input = %input.display(),
        logs = capture.logs.len(),
        "loaded capture"
    );

    let file = File::create(output)
        .with_context(|| format!("create report file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    let summary = write_report(&capture, &mut writer, opts)
        .with_context(|| format!("write report: {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush report: {}", output.display()))?;

    tracing::info!(
        output = %output.display(),
        logs = summary.logs.len(),
        entries = summary.total_entries(),
        matches = summary.total_matches,
        "report written"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{HarEntry, HarRequest, HarRoot, LogEntry};

    fn request(url: &str, method: &str) -> HarEntry {
        HarEntry {
            request: HarRequest {
                url: url.to_string(),
                method: method.to_string(),
                post_data: None,
            },
            ..Default::default()
        }
    }

    fn capture() -> CaptureLog {
        CaptureLog {
            logs: vec![
                LogEntry::default(),
                LogEntry {
                    log: Some(HarRoot {
                        entries: Some(vec![
                            request("https://g/handler.ashx", "POST"),
                            request("https://g/style.css", "GET"),
                            request("https://g/handler.ashx", "POST"),
                        ]),
                    }),
                },
                LogEntry {
                    log: Some(HarRoot {
                        entries: Some(vec![request("https://g/handler.ashx", "GET")]),
                    }),
                },
            ],
        }
    }

    #[test]
    fn write_report_counts_and_numbers_sections() {
        let mut out = Vec::new();
        let summary = write_report(&capture(), &mut out, &ReportOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(summary.total_matches, 2);
        assert_eq!(summary.total_entries(), 4);
        assert_eq!(
            summary.logs,
            vec![
                LogStats { log_number: 2, entries: 3, matches: 2 },
                LogStats { log_number: 3, entries: 1, matches: 0 },
            ]
        );
        assert!(text.contains("LOG #2: 3 HTTP entries\n\n"));
        assert!(text.contains("LOG #3: 1 HTTP entries\n\n"));
        assert!(!text.contains("LOG #1:"));
        assert!(text.contains("SPIN #1 (Entry #1)\n"));
        assert!(text.contains("SPIN #2 (Entry #3)\n"));
        assert_eq!(text.matches("SPIN #").count(), 2);
        assert!(text.ends_with("\n\nTOTAL SPIN REQUESTS FOUND: 2\n"));
    }

    #[test]
    fn write_report_empty_capture() {
        let mut out = Vec::new();
        let summary = write_report(&CaptureLog::default(), &mut out, &ReportOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(summary, ReportSummary::default());
        assert_eq!(
            text,
            format!(
                "STAR SPIN ANALYSIS - Debug Session\n{}\n\n\n\nTOTAL SPIN REQUESTS FOUND: 0\n",
                "=".repeat(100)
            )
        );
    }

    #[test]
    fn scan_capture_agrees_with_write_report() {
        let opts = ReportOptions::default();
        let mut out = Vec::new();
        let written = write_report(&capture(), &mut out, &opts).unwrap();
        assert_eq!(scan_capture(&capture(), &opts), written);
    }
}
