//! Error handling for tfdocgen.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors surfaced by tfdocgen operations.
///
/// The library returns these to its caller; only the binary decides whether
/// an error terminates the process.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The line scan over a Markdown document failed part way through.
    /// Any partially built table of contents is discarded.
    #[error("Failed to scan document at line {line}: {reason}.")]
    Scan { line: usize, reason: String },

    /// The module inspector reported errors for the module
    #[error("Problem loading module: {0}.")]
    ModuleLoad(String),

    /// The module inspector could not be run or exited unsuccessfully
    #[error("Module inspection failed: {0}.")]
    Inspect(String),

    /// The inspection document or a JSON config is not valid JSON
    #[error("JSON error: {0}.")]
    Json(#[from] serde_json::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur during template rendering
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents invalid combinations of user input
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
