//! Fault-tolerant batch orchestration.
//!
//! Iterates the corpus in deterministic order, resolves each item's
//! metadata and reference through a [`ReferenceSource`], asks one
//! [`Transcriber`] per decoding variant for a hypothesis, and assembles
//! the results table. A failure on a single item is recorded and
//! skipped; it never aborts the run.
//!
//! Processing is sequential and synchronous: the transcription
//! collaborator is the dominant cost and owns any internal parallelism,
//! so the orchestrator holds at most one call into it at a time.

mod collaborator;
mod error;
mod orchestrator;
mod sources;

#[cfg(test)]
mod tests;

pub use collaborator::{CollaboratorError, ReferenceSource, Transcriber};
pub use error::{BatchError, Result};
pub use orchestrator::{BatchOrchestrator, BatchOutcome, SkippedItem};
pub use sources::{FileHypothesisSource, FsReferenceSource};
