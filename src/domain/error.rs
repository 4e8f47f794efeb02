use std::io;

use thiserror::Error;

/// Library-wide error type for fatal wabulk failures.
///
/// Per-recipient send failures are reported through [`SendError`](super::SendError)
/// and never abort a batch.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file could not be parsed.
    #[error("Invalid config file: {0}")]
    ConfigFileInvalid(String),

    /// Spreadsheet lacks one or more required columns.
    #[error("Spreadsheet must contain columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// Workbook could not be opened or read.
    #[error("Failed to read workbook '{path}': {details}")]
    Workbook { path: String, details: String },

    /// Requested sheet does not exist in the workbook.
    #[error("Sheet '{sheet}' not found. Available: {available}")]
    SheetNotFound { sheet: String, available: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
