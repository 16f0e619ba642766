//! Error handling for the Plater application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for Plater operations.
///
/// Every filesystem failure carries the path it occurred on; a failure
/// anywhere aborts the whole run, so the destination tree may be left
/// incomplete and the caller must treat the run as failed.
#[derive(Error, Debug)]
pub enum Error {
    /// The template root does not exist or is not a directory
    #[error("Template directory does not exist: '{template_dir}'.")]
    TemplateNotFound { template_dir: String },

    /// The destination root does not exist or is not a directory
    #[error("Output directory does not exist: '{output_dir}'.")]
    OutputDirInvalid { output_dir: String },

    /// A template entry or fragment could not be read
    #[error("Cannot read '{}': {source}.", path.display())]
    SourceUnreadable { path: PathBuf, source: io::Error },

    /// A destination entry could not be created or written
    #[error("Cannot write '{}': {source}.", path.display())]
    DestinationUnwritable { path: PathBuf, source: io::Error },

    /// A template entry name is not valid Unicode and cannot be substituted
    #[error("Entry name is not valid Unicode: '{}'.", path.display())]
    NonUnicodeName { path: PathBuf },
}

impl Error {
    /// Maps an I/O error to [`Error::SourceUnreadable`] for the given path.
    pub fn unreadable(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Error::SourceUnreadable { path, source }
    }

    /// Maps an I/O error to [`Error::DestinationUnwritable`] for the given path.
    pub fn unwritable(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Error::DestinationUnwritable { path, source }
    }
}

/// Convenience type alias for Results with Plater's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
