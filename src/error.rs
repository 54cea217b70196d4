//! Error types for the tidytable library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tidytable operations.
#[derive(Debug, Error)]
pub enum TidyError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error decoding file contents in the requested encoding.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A required column is missing, no year columns were detected,
    /// a rename would overwrite an existing column, or input rows are ragged.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for tidytable operations.
pub type Result<T> = std::result::Result<T, TidyError>;
