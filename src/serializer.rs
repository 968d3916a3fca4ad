//! Serialization of operations and the append-only output file.
//!
//! The default rendering is a two-column markdown table per operation. JSON
//! and YAML renderings of the same record are available for tooling that
//! wants structured data instead.

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::operation::OperationSpec;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Renders an operation as a markdown table fragment.
///
/// The layout is fixed:
///
/// ```text
/// |GET|/users/{id}|
/// | --- | --- |
/// |summary|Show a user|
/// |Tags|users|
/// |Params|**id** path {int} required – user id|
/// |Responses|**200** {object} User ok|
/// ||**404** {object} Error missing|
/// ```
///
/// Empty fields are omitted. Free text is written as is, so a `|` inside a
/// description breaks the table.
pub fn render_markdown(spec: &OperationSpec) -> String {
    let mut markdown = String::new();
    markdown.push_str(&format!("|{}|{}|\n", spec.method.to_uppercase(), spec.path));
    markdown.push_str("| --- | --- |\n");

    if !spec.summary.is_empty() {
        markdown.push_str(&format!("|summary|{}|\n", spec.summary));
    }
    if !spec.description.is_empty() {
        markdown.push_str(&format!("|description|{}|\n", spec.description));
    }
    for (label, values) in [
        ("Tags", &spec.tags),
        ("Accept", &spec.accept),
        ("Produce", &spec.produce),
    ] {
        if !values.is_empty() {
            markdown.push_str(&format!("|{}|{}|\n", label, values.join(", ")));
        }
    }

    if !spec.params.is_empty() {
        markdown.push_str("|Params");
        for (i, param) in spec.params.iter().enumerate() {
            let mandatory = if param.required { "required" } else { "optional" };
            markdown.push_str(&format!(
                "{}**{}** {} {{{}}} {} – {}|\n",
                row_border(i),
                param.name,
                param.location,
                param.param_type,
                mandatory,
                param.description
            ));
        }
    }

    if !spec.responses.is_empty() {
        markdown.push_str("|Responses");
        for (i, resp) in spec.responses.iter().enumerate() {
            markdown.push_str(&format!(
                "{}**{}** {} {} {}|\n",
                row_border(i),
                resp.status_code,
                resp.model_wrapper,
                resp.data_type,
                resp.description
            ));
        }
    }

    markdown
}

// Continuation rows leave the label cell empty.
fn row_border(index: usize) -> &'static str {
    if index == 0 {
        "|"
    } else {
        "||"
    }
}

/// Serializes an operation to a single-line JSON object.
pub fn serialize_json(spec: &OperationSpec) -> Result<String> {
    debug!("Serializing operation {} {} to JSON", spec.method, spec.path);
    Ok(serde_json::to_string(spec)?)
}

/// Serializes an operation to a YAML document (without the `---` marker).
pub fn serialize_yaml(spec: &OperationSpec) -> Result<String> {
    debug!("Serializing operation {} {} to YAML", spec.method, spec.path);
    Ok(serde_yaml::to_string(spec)?)
}

/// Renders the text appended to the output for one operation.
///
/// Markdown fragments are followed by a blank line, JSON fragments are one
/// line each (JSON Lines) and YAML fragments are separate `---` documents.
pub fn render_fragment(spec: &OperationSpec, format: OutputFormat) -> Result<String> {
    let fragment = match format {
        OutputFormat::Markdown => format!("{}\n", render_markdown(spec)),
        OutputFormat::Json => format!("{}\n", serialize_json(spec)?),
        OutputFormat::Yaml => format!("---\n{}", serialize_yaml(spec)?),
    };
    Ok(fragment)
}

/// The shared output destination.
///
/// Every [`append`](OutputFile::append) opens the file in append mode, writes
/// one fragment and closes it again, so fragments land in call order and the
/// handle never outlives a write.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    fragments_written: usize,
}

impl OutputFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            fragments_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fragments_written(&self) -> usize {
        self.fragments_written
    }

    /// Removes a file left over from a previous run. A missing file is fine.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed existing output file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(Error::OutputWrite {
                file: self.path.clone(),
                source,
            }),
        }
    }

    /// Appends one fragment, creating the file and its parent directories on
    /// first use.
    pub fn append(&mut self, content: &str) -> Result<()> {
        let to_error = |source: std::io::Error| Error::OutputWrite {
            file: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_error)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_error)?;
        file.write_all(content.as_bytes()).map_err(to_error)?;

        self.fragments_written += 1;
        debug!(
            "Appended {} bytes to {}",
            content.len(),
            self.path.display()
        );
        Ok(())
    }
}
