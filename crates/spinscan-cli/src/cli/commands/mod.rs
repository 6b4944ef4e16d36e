//! CLI command handlers, one per file.

mod analyze;
mod stats;

pub use analyze::run_analyze;
pub use stats::run_stats;
