//! Recursive corpus discovery

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{CorpusError, Result};
use super::item::CorpusItem;

/// Discover all audio items under `root` with the given extension
/// (without the dot), sorted by path so that runs process items in a
/// stable, deterministic order.
pub fn scan(root: &Path, extension: &str) -> Result<Vec<CorpusItem>> {
    if !root.exists() {
        return Err(CorpusError::Missing(root.to_path_buf()));
    }

    let mut paths = Vec::new();
    collect(root, extension, &mut paths)?;
    paths.sort();

    if paths.is_empty() {
        return Err(CorpusError::Empty(root.to_path_buf()));
    }

    Ok(paths.into_iter().map(CorpusItem::new).collect())
}

fn collect(dir: &Path, extension: &str, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(&path, extension, out)?;
        } else if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
    }

    #[test]
    fn test_scan_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "SNR35dB/man/seq1digit/b.wav");
        touch(dir.path(), "SNR05dB/man/seq1digit/a.wav");
        touch(dir.path(), "SNR05dB/man/seq1digit/a.txt");
        touch(dir.path(), "notes.md");

        let items = scan(dir.path(), "wav").unwrap();
        assert_eq!(items.len(), 2);
        // Path-sorted: SNR05dB before SNR35dB.
        assert_eq!(items[0].id, "a.wav");
        assert_eq!(items[1].id, "b.wav");
        assert!(items[0].path < items[1].path);
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = scan(&dir.path().join("nope"), "wav").unwrap_err();
        assert!(matches!(err, CorpusError::Missing(_)));
    }

    #[test]
    fn test_empty_corpus_is_fatal() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "readme.txt");
        let err = scan(dir.path(), "wav").unwrap_err();
        assert!(matches!(err, CorpusError::Empty(_)));
    }
}
