//! Batch orchestration error types

use thiserror::Error;

use crate::table::TableError;

/// Errors that abort a batch run outright, as opposed to the per-item
/// failures recorded in [`super::BatchOutcome::skipped`].
#[derive(Debug, Error)]
pub enum BatchError {
    /// Zero items to process; there is nothing to evaluate.
    #[error("empty corpus: no items to process")]
    EmptyCorpus,

    /// A collaborator produced rows inconsistent with the run's fixed
    /// column set.
    #[error("results table error: {0}")]
    Table(#[from] TableError),
}

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, BatchError>;
