//! Stratified aggregation over the results table.
//!
//! Partitions results by one or more metadata dimensions, optionally
//! after filtering (holding one dimension fixed to isolate another),
//! and estimates per-group, per-variant word error rates with bootstrap
//! confidence intervals.

mod aggregator;
mod error;


pub use aggregator::{
    aggregate, AnalysisResult, AnalysisSpec, GroupKey, GroupOrder, GroupStats, VariantStats,
};
pub use error::{Result, StratifyError};
