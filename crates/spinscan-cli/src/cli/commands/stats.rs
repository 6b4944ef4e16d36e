//! `spinscan stats <input>` – per-log spin request counts.

use anyhow::Result;
use spinscan_core::capture;
use spinscan_core::report::{self, ReportOptions, ReportSummary};
use std::path::Path;

fn print_stats(summary: &ReportSummary) {
    if summary.logs.is_empty() {
        println!("No HTTP logs in capture.");
    } else {
        println!("{:<6} {:>8} {:>8}", "LOG", "ENTRIES", "MATCHES");
        for log in &summary.logs {
            println!("{:<6} {:>8} {:>8}", log.log_number, log.entries, log.matches);
        }
    }
    println!("Total spin requests found: {}", summary.total_matches);
}

pub fn run_stats(input: &Path, opts: &ReportOptions) -> Result<()> {
    let capture = capture::load_capture(input)?;
    let summary = report::scan_capture(&capture, opts);
    tracing::info!(
        input = %input.display(),
        logs = summary.logs.len(),
        matches = summary.total_matches,
        "stats computed"
    );
    print_stats(&summary);
    Ok(())
}
