//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// User input that failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Ledger store errors (malformed rows, failed rewrites)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a validation error for a date that doesn't match the expected format
    pub fn invalid_date(input: &str, format: &str) -> Self {
        Self::Validation(format!(
            "Invalid date '{}'. Please enter the date in {} format",
            input,
            display_format(format)
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Render a strftime format the way users type it ("%d-%m-%Y" -> "dd-mm-yyyy")
pub fn display_format(format: &str) -> String {
    format
        .replace("%d", "dd")
        .replace("%m", "mm")
        .replace("%Y", "yyyy")
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
