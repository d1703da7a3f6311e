//! Error types for the resume-core library.

use thiserror::Error;

/// Main error type for the resume-core library.
#[derive(Error, Debug)]
pub enum ResumeError {
    /// The input block sequence is missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A section extractor failed.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a single section extractor.
///
/// These never abort a parse: the assembler logs them and leaves the
/// affected field unset.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The section has more lines than the configured limit.
    #[error("section {label} has {lines} lines (limit {limit})")]
    SectionTooLarge {
        label: String,
        lines: usize,
        limit: usize,
    },

    /// A runtime-built pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Pattern(String),
}

impl From<regex::Error> for ExtractionError {
    fn from(err: regex::Error) -> Self {
        ExtractionError::Pattern(err.to_string())
    }
}

/// Result type for the resume-core library.
pub type Result<T> = std::result::Result<T, ResumeError>;
