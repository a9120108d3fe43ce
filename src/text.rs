//! Transcript normalization.
//!
//! References and hypotheses are canonicalized to the transcription
//! alphabet `[a-z0-9 ]` before scoring so that casing and punctuation
//! never count as errors.

/// Normalize a transcript for scoring.
///
/// Lowercases, drops every character outside `[a-z0-9 ]` (non-space
/// whitespace is dropped, not turned into a separator), collapses runs
/// of spaces, and trims. Idempotent: `normalize(normalize(x)) ==
/// normalize(x)`.
pub fn normalize(text: &str) -> String {
    let filtered: String = text
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    let mut out = String::with_capacity(filtered.len());
    for word in filtered.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("THE CAT!"), "the cat");
        assert_eq!(normalize("the cat"), "the cat");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  one   two  "), "one two");
    }

    #[test]
    fn test_non_space_whitespace_is_dropped() {
        // Tabs and newlines are outside the alphabet, so they vanish
        // rather than separating words.
        assert_eq!(normalize("a\tb"), "ab");
        assert_eq!(normalize("a \n b"), "a b");
    }

    #[test]
    fn test_digits_survive() {
        assert_eq!(normalize("Route 66."), "route 66");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t  "), "");
        assert_eq!(normalize("!?;"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = ["  Héllo, WORLD 42! ", "one two", "", "a\tb c"];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
