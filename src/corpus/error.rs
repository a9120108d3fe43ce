//! Corpus error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from corpus discovery
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus root does not exist.
    #[error("corpus root not found: {0}")]
    Missing(PathBuf),

    /// The corpus root exists but contains no matching items. Fatal:
    /// there is nothing to evaluate.
    #[error("no audio items found under {0}")]
    Empty(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;
