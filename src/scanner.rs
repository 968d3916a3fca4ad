use anyhow::{bail, Result};
use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File scanner for traversing source trees.
///
/// The `FileScanner` recursively walks a directory to find source files with a
/// given extension (`go` by default). Entries are visited in file-name order so
/// that repeated runs see files in the same sequence. Hidden directories (those
/// starting with `.`) and `vendor` directories are skipped.
///
/// # Example
///
/// ```no_run
/// use swamd::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./my-service"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} Go files", result.source_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
    extension: String,
}

/// Result of directory scanning operation.
#[derive(Debug)]
pub struct ScanResult {
    /// Discovered source files, in traversal order
    pub source_files: Vec<PathBuf>,
    /// Warning messages for entries that could not be accessed
    pub warnings: Vec<String>,
}

impl FileScanner {
    /// Creates a scanner for `.go` files under `root_path`.
    pub fn new(root_path: PathBuf) -> Self {
        Self::with_extension(root_path, "go")
    }

    /// Creates a scanner for files ending in `.<extension>`.
    pub fn with_extension(root_path: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            root_path,
            extension: extension.into(),
        }
    }

    /// Scans the directory tree and collects matching files.
    ///
    /// Inaccessible entries are logged and recorded as warnings, but scanning
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the root path does not exist or is not a directory.
    pub fn scan(&self) -> Result<ScanResult> {
        if !self.root_path.exists() {
            bail!("Path does not exist: {}", self.root_path.display());
        }
        if !self.root_path.is_dir() {
            bail!("Path is not a directory: {}", self.root_path.display());
        }

        let mut source_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                // Never filter the root itself, even if it is "."
                if e.depth() == 0 {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                let is_hidden = file_name.starts_with('.');
                let is_vendor = e.file_type().is_dir() && file_name == "vendor";

                !is_hidden && !is_vendor
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if entry.file_type().is_file()
                        && path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
                    {
                        source_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(ScanResult {
            source_files,
            warnings,
        })
    }
}
