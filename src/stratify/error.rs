//! Stratified aggregation error types
//!
//! These are parameter errors in the sense of the error taxonomy: they
//! indicate a misconfigured analysis and surface immediately, never
//! downgraded to a per-item skip.

use thiserror::Error;

use crate::bootstrap::BootstrapError;
use crate::wer::WerError;

/// Errors from stratified aggregation
#[derive(Debug, Error)]
pub enum StratifyError {
    /// A requested group has zero rows after filtering.
    #[error("empty group: {0}")]
    EmptyGroup(String),

    /// A requested variant has no hypothesis column in the table.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// A group-by key is not a metadata column of the table.
    #[error("unknown metadata key: {0}")]
    UnknownKey(String),

    #[error("scoring failed: {0}")]
    Wer(#[from] WerError),

    #[error("estimation failed: {0}")]
    Bootstrap(#[from] BootstrapError),
}

/// Result type for aggregation operations
pub type Result<T> = std::result::Result<T, StratifyError>;
