//! Error types for the shiftscan-core library.

use thiserror::Error;

/// Main error type for the shiftscan library.
#[derive(Error, Debug)]
pub enum ShiftScanError {
    /// Shift extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported to the caller of a parse.
///
/// Messy schedule text is never an error; lines that cannot be resolved are
/// dropped. Only contract violations on the input itself end up here.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractionError {
    /// Input exceeds the configured size bound.
    #[error("input is {len} characters, limit is {max}")]
    InputTooLarge { len: usize, max: usize },

    /// Input is not usable text at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for the shiftscan library.
pub type Result<T> = std::result::Result<T, ShiftScanError>;
