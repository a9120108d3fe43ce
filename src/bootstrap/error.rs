//! Bootstrap error types

use thiserror::Error;

/// Errors from the resampling estimator
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The mean of an empty sequence is undefined.
    #[error("empty value sequence")]
    EmptyInput,

    /// At least one resampling round is required.
    #[error("iteration count must be at least 1")]
    InvalidIterations,

    /// The significance level must lie strictly between 0 and 1.
    #[error("alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),
}

/// Result type for bootstrap operations
pub type Result<T> = std::result::Result<T, BootstrapError>;
