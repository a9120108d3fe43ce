//! Word error rate scoring.
//!
//! Computes the per-utterance word error rate between a reference and a
//! hypothesis transcript via minimum edit distance over word sequences.

mod error;
mod scorer;

pub use error::{Result, WerError};
pub use scorer::word_error_rate;
