//! swamd - Markdown API documentation from swag-style annotation comments.
//!
//! Go HTTP handlers are commonly documented with annotation comments:
//!
//! ```go
//! // @Summary      Show an account
//! // @Tags         accounts
//! // @Param        id   path      int  true  "Account ID"
//! // @Success      200  {object}  model.Account
//! // @Router       /accounts/{id} [get]
//! func ShowAccount(c *gin.Context) {}
//! ```
//!
//! This library collects those annotations, one operation per source file, and
//! renders each operation as a small markdown table.
//!
//! # Architecture
//!
//! 1. [`scanner`] - Recursively finds source files in a directory
//! 2. [`parser`] - Collects the comments of a source file
//! 3. [`annotation`] - Detects `@Keyword text` annotations in comments
//! 4. [`fields`] - Decodes `@Param`, `@Success`/`@Failure` and `@Router` text
//! 5. [`operation`] - Folds a file's annotations into an [`operation::OperationSpec`]
//! 6. [`serializer`] - Renders operations and appends them to the output file
//! 7. [`pipeline`] - Runs the steps above per file
//!
//! # Example Usage
//!
//! ```no_run
//! use swamd::{
//!     cli::OutputFormat,
//!     pipeline::generate,
//!     scanner::FileScanner,
//!     serializer::OutputFile,
//! };
//! use std::path::PathBuf;
//!
//! let scan_result = FileScanner::new(PathBuf::from("./my-service")).scan().unwrap();
//!
//! let mut output = OutputFile::new(PathBuf::from("api_spec.md"));
//! output.reset().unwrap();
//!
//! let summary = generate(&scan_result.source_files, &mut output, OutputFormat::Markdown);
//! println!("Wrote {} operations", summary.operations_written);
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod annotation;
pub mod cli;
pub mod error;
pub mod fields;
pub mod operation;
pub mod parser;
pub mod pipeline;
pub mod scanner;
pub mod serializer;
