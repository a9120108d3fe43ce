//! WER error types

use thiserror::Error;

/// Errors from word error rate computation
#[derive(Debug, Error)]
pub enum WerError {
    /// The reference has zero words while the hypothesis does not, so the
    /// rate is undefined by word-count normalization. Surfaced rather
    /// than coerced to 0 or infinity; the caller decides how to treat
    /// the utterance.
    #[error("empty reference against a {hypothesis_words}-word hypothesis")]
    EmptyReference { hypothesis_words: usize },
}

/// Result type for WER operations
pub type Result<T> = std::result::Result<T, WerError>;
