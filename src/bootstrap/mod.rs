//! Bootstrap confidence interval estimation.
//!
//! Given per-utterance error values, produces a point estimate (the
//! arithmetic mean) and a percentile confidence interval from seeded
//! resampling with replacement. Repeated calls with the same seed are
//! bit-for-bit reproducible.

mod error;
mod estimator;

pub use error::{BootstrapError, Result};
pub use estimator::{estimate, BootstrapConfig, Estimate};
