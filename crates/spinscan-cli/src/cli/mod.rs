//! CLI for the spinscan capture analyzer.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use spinscan_core::config;
use spinscan_core::report::{MatchPredicate, ReportOptions};
use std::path::PathBuf;

use commands::{run_analyze, run_stats};

/// Top-level CLI for spinscan.
#[derive(Debug, Parser)]
#[command(name = "spinscan")]
#[command(about = "spinscan: extract spin requests from captured network logs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for the spin-request match rule; unset fields keep the configured value.
#[derive(Debug, Clone, Default, Args)]
pub struct PredicateArgs {
    /// Substring the request URL must contain (config default: handler.ashx).
    #[arg(long, value_name = "TEXT")]
    pub url_contains: Option<String>,

    /// HTTP method the request must use, compared exactly (config default: POST).
    #[arg(long, value_name = "METHOD")]
    pub method: Option<String>,
}

impl PredicateArgs {
    fn apply(self, predicate: &mut MatchPredicate) {
        if let Some(url_contains) = self.url_contains {
            predicate.url_contains = url_contains;
        }
        if let Some(method) = self.method {
            predicate.method = method;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Write a text report of every spin request in a capture file.
    Analyze {
        /// Capture file (JSON array of logs, or a HAR document).
        input: PathBuf,

        /// Report file to create or overwrite.
        output: PathBuf,

        #[command(flatten)]
        predicate: PredicateArgs,
    },

    /// Print per-log spin request counts without writing a report.
    Stats {
        /// Capture file (JSON array of logs, or a HAR document).
        input: PathBuf,

        #[command(flatten)]
        predicate: PredicateArgs,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let mut opts = ReportOptions::from(&cfg);

        match cli.command {
            CliCommand::Analyze {
                input,
                output,
                predicate,
            } => {
                predicate.apply(&mut opts.predicate);
                run_analyze(&input, &output, &opts)?;
            }
            CliCommand::Stats { input, predicate } => {
                predicate.apply(&mut opts.predicate);
                run_stats(&input, &opts)?;
            }
        }

        Ok(())
    }
}
