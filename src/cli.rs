use crate::error::Error;
use crate::pipeline::{generate, RunSummary};
use crate::scanner::FileScanner;
use crate::serializer::OutputFile;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::path::PathBuf;

/// swamd - Generate markdown API tables from swag-style annotations in Go source code
#[derive(Parser, Debug)]
#[command(name = "swamd")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Target path to parse source files from
    #[arg(short = 'p', long = "path", value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Output file to write API specifications to
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = "api_spec.md")]
    pub output: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// Extension of the source files to scan
    #[arg(short = 'e', long = "extension", value_name = "EXT", default_value = "go")]
    pub extension: String,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown tables, one per operation
    Markdown,
    /// JSON Lines, one object per operation
    Json,
    /// YAML, one document per operation
    Yaml,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(mut args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    args.extension = args.extension.trim_start_matches('.').to_string();
    if args.extension.is_empty() {
        return Err(
            Error::InvalidArgument("source file extension must not be empty".to_string()).into(),
        );
    }

    info!("Source path: {}", args.path.display());
    info!("Output file: {}", args.output.display());
    info!("Output format: {:?}", args.format);

    Ok(args)
}

/// Run the main workflow
///
/// Per-file problems never fail the run; only a traversal or output-reset
/// failure is returned as an error.
pub fn run(args: CliArgs) -> Result<RunSummary> {
    let mut output = OutputFile::new(args.output.clone());
    output
        .reset()
        .with_context(|| format!("Failed to remove output file {}", args.output.display()))?;

    info!("Scanning {} for .{} files...", args.path.display(), args.extension);
    let scanner = FileScanner::with_extension(args.path.clone(), args.extension.clone());
    let scan_result = scanner.scan()?;
    info!("Found {} source files", scan_result.source_files.len());

    let summary = generate(&scan_result.source_files, &mut output, args.format);

    if summary.operations_written == 0 {
        warn!("No annotated operations found under {}", args.path.display());
    }

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Files scanned: {}", scan_result.source_files.len());
    info!("  - Files processed: {}", summary.files_processed);
    info!("  - Files skipped: {}", summary.files_failed);
    info!(
        "  - Operations written: {} ({})",
        output.fragments_written(),
        output.path().display()
    );
    if !scan_result.warnings.is_empty() {
        info!("  - Traversal warnings: {}", scan_result.warnings.len());
    }

    Ok(summary)
}
