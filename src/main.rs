//! swamd - Command-line tool for generating markdown API tables from annotated Go sources.
//!
//! # Usage
//!
//! ```bash
//! swamd [-p <DIR>] [-o <FILE>] [-f markdown|json|yaml] [-v]
//! ```
//!
//! # Examples
//!
//! Document every handler under `./internal/api`:
//! ```bash
//! swamd -p ./internal/api -o docs/api_spec.md
//! ```
//!
//! Emit one JSON object per operation instead:
//! ```bash
//! swamd -p . -f json -o api_spec.jsonl
//! ```

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use swamd::cli;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let args = cli::parse_args_from_parsed(args)?;

    // Traversal failures are reported but do not change the exit status
    if let Err(e) = cli::run(args) {
        error!("Error: {:#}", e);
        return Ok(());
    }

    info!("API specification generation completed");
    Ok(())
}
