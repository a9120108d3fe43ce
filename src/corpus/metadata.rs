//! Metadata derived from corpus paths

use std::path::Path;

/// The corpus metadata dimensions, in column order.
pub const METADATA_KEYS: [&str; 3] = ["snr", "speaker", "length"];

/// Derive the categorical attributes of an item from its path,
/// expected as `.../<snr>/<speaker>/<length-folder>/<file>`.
///
/// The length class comes from the parent folder name (`seq1*` -> "1",
/// `seq3*` -> "3", `seq5*` -> "5"). Total: components that cannot be
/// resolved yield "unknown" instead of failing, so a stray file never
/// aborts a run on metadata alone.
pub fn parse_metadata(path: &Path) -> Vec<(String, String)> {
    let parts: Vec<String> = path
        .iter()
        .map(|c| c.to_string_lossy().into_owned())
        .collect();

    let from_end = |back: usize| -> String {
        parts
            .len()
            .checked_sub(back)
            .and_then(|i| parts.get(i))
            .cloned()
            .unwrap_or_else(|| "unknown".to_string())
    };

    let snr = from_end(4);
    let speaker = from_end(3);
    let length_folder = from_end(2);
    let length = if length_folder.contains("seq1") {
        "1"
    } else if length_folder.contains("seq3") {
        "3"
    } else if length_folder.contains("seq5") {
        "5"
    } else {
        "unknown"
    };

    let values = [snr, speaker, length.to_string()];
    METADATA_KEYS
        .iter()
        .zip(values)
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
