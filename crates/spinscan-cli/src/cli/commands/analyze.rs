//! `spinscan analyze <input> <output>` – write the spin request report.

use anyhow::Result;
use spinscan_core::report::{self, ReportOptions};
use std::path::Path;

pub fn run_analyze(input: &Path, output: &Path, opts: &ReportOptions) -> Result<()> {
    let summary = report::run(input, output, opts)?;
    println!("Analysis saved to: {}", output.display());
    println!("Total spin requests found: {}", summary.total_matches);
    Ok(())
}
