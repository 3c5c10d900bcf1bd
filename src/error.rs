//! Error types for the ca_ledger library.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting and normalizing a statement.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing CSV output.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// The workbook could not be opened or read.
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// The requested worksheet does not exist in the workbook.
    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    /// Column reference is not a valid letter-based address.
    #[error("Invalid column reference: {0:?}")]
    InvalidColumn(String),

    /// Field name is not part of the column mapping.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A surviving row carries a date cell that is not a calendar date.
    #[error("Invalid date at row {row}: {value}")]
    InvalidDate { row: usize, value: String },

    /// A monetary cell could not be read as a number.
    #[error("Invalid amount at row {row}: {value}")]
    InvalidAmount { row: usize, value: String },
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Workbook(err.to_string())
    }
}
