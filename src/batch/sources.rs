//! Filesystem-backed collaborators

use std::fs;

use super::collaborator::{CollaboratorError, ReferenceSource, Transcriber};
use crate::corpus::{parse_metadata, CorpusItem};
use crate::text::normalize;

/// Reference source reading the sibling `.txt` transcript of an audio
/// item and deriving metadata from the item's path.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsReferenceSource;

impl ReferenceSource for FsReferenceSource {
    fn resolve(
        &self,
        item: &CorpusItem,
    ) -> Result<(Vec<(String, String)>, String), CollaboratorError> {
        let transcript = item.path.with_extension("txt");
        if !transcript.exists() {
            return Err(CollaboratorError::NotFound(format!(
                "no reference transcript for {}",
                item.id
            )));
        }
        let raw = fs::read_to_string(&transcript).map_err(|e| {
            CollaboratorError::Decode(format!("{}: {e}", transcript.display()))
        })?;
        Ok((parse_metadata(&item.path), normalize(&raw)))
    }
}

/// Stand-in for the external acoustic transcription service: reads a
/// precomputed hypothesis transcript stored next to the audio item as
/// `<stem>.<suffix>.txt`, one suffix per decoding variant.
#[derive(Clone, Debug)]
pub struct FileHypothesisSource {
    suffix: String,
}

impl FileHypothesisSource {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Transcriber for FileHypothesisSource {
    fn transcribe(&self, item: &CorpusItem) -> Result<String, CollaboratorError> {
        let path = item.path.with_extension(format!("{}.txt", self.suffix));
        if !path.exists() {
            return Err(CollaboratorError::Transcription(format!(
                "no '{}' hypothesis for {}",
                self.suffix, item.id
            )));
        }
        let raw = fs::read_to_string(&path).map_err(|e| {
            CollaboratorError::Transcription(format!("{}: {e}", path.display()))
        })?;
        Ok(normalize(&raw))
    }
}
