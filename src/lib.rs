//! Speech-to-text evaluation engine.
//!
//! Compares predicted transcripts against reference transcripts over a
//! labeled corpus and summarizes accuracy with bootstrap confidence
//! intervals, stratified by corpus metadata (noise level, speaker,
//! utterance length).
//!
//! ## Architecture
//!
//! - `text`: transcript normalization
//! - `wer`: word error rate via edit distance
//! - `bootstrap`: seeded resampling estimator for confidence intervals
//! - `stratify`: grouped aggregation over the results table
//! - `corpus`: corpus discovery and path-derived metadata
//! - `batch`: fault-tolerant orchestration over transcription collaborators
//! - `table`: results table plus delimited export/import
//!
//! ## Example
//!
//! ```
//! use evaluar::bootstrap::{estimate, BootstrapConfig};
//! use evaluar::wer::word_error_rate;
//!
//! let rate = word_error_rate("one two three", "one too three").unwrap();
//! assert!((rate - 1.0 / 3.0).abs() < 1e-12);
//!
//! let est = estimate(&[0.0, 10.0, 20.0], &BootstrapConfig::default()).unwrap();
//! assert!(est.ci_low <= est.mean && est.mean <= est.ci_high);
//! ```

pub mod batch;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod stratify;
pub mod table;
pub mod text;
pub mod wer;

pub use batch::{BatchOrchestrator, BatchOutcome, CollaboratorError, SkippedItem};
pub use bootstrap::{estimate, BootstrapConfig, Estimate};
pub use corpus::CorpusItem;
pub use stratify::{aggregate, AnalysisResult, AnalysisSpec, GroupOrder, GroupStats};
pub use table::{ResultsRow, ResultsTable};
pub use text::normalize;
pub use wer::word_error_rate;
