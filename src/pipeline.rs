//! Per-file processing: comments → annotations → operation → output fragment.
//!
//! Every error is local to the file that caused it. [`generate`] logs it,
//! counts it and moves on to the next file.

use crate::annotation::{scan_comment, RawAnnotation};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::operation::{assemble, OperationSpec};
use crate::parser::{CommentParser, ParsedFile};
use crate::serializer::{render_fragment, OutputFile};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// What happened to a file that was processed without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file documented an operation and its fragment was appended
    Documented(OperationSpec),
    /// The file has no annotations; nothing was written
    NoAnnotations,
}

/// Counters for a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub operations_written: usize,
    pub files_failed: usize,
}

/// Collects the annotations of a parsed file in comment order.
pub fn collect_annotations(parsed: &ParsedFile) -> Vec<RawAnnotation> {
    parsed
        .comments
        .iter()
        .filter_map(|comment| {
            let annotation = scan_comment(comment.body())?;
            debug!(
                "{}:{}: @{} {}",
                parsed.path.display(),
                comment.line,
                annotation.tag,
                annotation.text
            );
            Some(annotation)
        })
        .collect()
}

/// Reads, scans and assembles the operation documented by one file.
pub fn document_file(path: &Path) -> Result<Option<OperationSpec>> {
    let parsed = CommentParser::parse_file(path)?;
    let annotations = collect_annotations(&parsed);
    debug!(
        "Found {} annotations in {}",
        annotations.len(),
        path.display()
    );
    assemble(&annotations)
}

/// Processes one file and appends its fragment to the output.
pub fn process_file(
    path: &Path,
    output: &mut OutputFile,
    format: OutputFormat,
) -> Result<FileOutcome> {
    let Some(spec) = document_file(path)? else {
        return Ok(FileOutcome::NoAnnotations);
    };

    let fragment = render_fragment(&spec, format)?;
    output.append(&fragment)?;
    Ok(FileOutcome::Documented(spec))
}

/// Processes files in order, continuing past per-file failures.
pub fn generate(files: &[PathBuf], output: &mut OutputFile, format: OutputFormat) -> RunSummary {
    let mut summary = RunSummary::default();

    for path in files {
        match process_file(path, output, format) {
            Ok(outcome) => {
                summary.files_processed += 1;
                if let FileOutcome::Documented(spec) = &outcome {
                    summary.operations_written += 1;
                    debug!("Documented {} {}", spec.method, spec.path);
                }
                info!("{} - successfully processed.", path.display());
            }
            Err(e) => {
                summary.files_failed += 1;
                warn!("{} - skipped: {}", path.display(), e);
            }
        }
    }

    summary
}
