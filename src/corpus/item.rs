//! Corpus item identity

use std::path::PathBuf;

/// One audio item discovered at corpus scan time. Immutable; the
/// waveform itself is never decoded here, collaborators receive the
/// path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusItem {
    /// Item identity used in logs and the results table (file name)
    pub id: String,
    /// Full path to the audio file
    pub path: PathBuf,
}

impl CorpusItem {
    pub fn new(path: PathBuf) -> Self {
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { id, path }
    }
}
