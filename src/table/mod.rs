//! Results table and delimited persistence.
//!
//! One row per successfully processed corpus item: identity, metadata,
//! reference transcript, and one hypothesis per decoding variant. The
//! column set is fixed per run; export and import share one delimited
//! text format so analyses can be re-run without re-transcribing.

mod error;
mod export;
mod import;
mod results;

pub use error::{Result, TableError};
pub use export::{hypothesis_column, write_results_csv, write_stats_csv, write_stats_json};
pub use import::read_results_csv;
pub use results::{ResultsRow, ResultsTable};
