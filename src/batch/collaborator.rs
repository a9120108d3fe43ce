//! Collaborator interfaces and their closed failure set

use thiserror::Error;

use crate::corpus::CorpusItem;

/// The closed set of per-item failures a collaborator may raise. The
/// orchestrator's isolation logic matches on exactly these, so every
/// expected failure mode across the collaborator boundary must map to
/// one of them.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// No reference exists for the item.
    #[error("not found: {0}")]
    NotFound(String),

    /// The item's data could not be read or decoded.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The transcription collaborator failed on the item.
    #[error("transcription failed: {0}")]
    Transcription(String),
}

/// Resolves an item's metadata and normalized reference transcript.
pub trait ReferenceSource {
    fn resolve(
        &self,
        item: &CorpusItem,
    ) -> Result<(Vec<(String, String)>, String), CollaboratorError>;
}

/// One decoding variant of the external transcription service: returns
/// a normalized hypothesis for an item or raises one of the closed
/// failure set. Side-effect-free from the orchestrator's perspective.
pub trait Transcriber {
    fn transcribe(&self, item: &CorpusItem) -> Result<String, CollaboratorError>;
}

impl<F> Transcriber for F
where
    F: Fn(&CorpusItem) -> Result<String, CollaboratorError>,
{
    fn transcribe(&self, item: &CorpusItem) -> Result<String, CollaboratorError> {
        self(item)
    }
}
