//! Error types for gigcal.

use std::path::PathBuf;

use thiserror::Error;

/// Run-level errors. Any of these aborts the pipeline.
#[derive(Error, Debug)]
pub enum GigcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {field} time '{value}' for '{title}' on {date}")]
    InvalidTime {
        field: &'static str,
        value: String,
        title: String,
        date: chrono::NaiveDate,
    },
}

/// Result type alias for gigcal operations.
pub type GigcalResult<T> = Result<T, GigcalError>;
