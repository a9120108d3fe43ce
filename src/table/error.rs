//! Results table error types

use thiserror::Error;

/// Errors from results table construction and persistence
#[derive(Debug, Error)]
pub enum TableError {
    /// A row's metadata keys or variant tags disagree with the table's
    /// fixed column set.
    #[error("row {id} does not match the table's column set")]
    ColumnMismatch { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed results table at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
