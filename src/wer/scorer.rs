//! Edit-distance word error rate

use super::error::{Result, WerError};

/// Compute the word error rate between a reference and a hypothesis.
///
/// Both inputs are assumed normalized (see [`crate::text::normalize`])
/// and are tokenized on whitespace. The rate is the minimum number of
/// word substitutions, insertions, and deletions (unit cost each)
/// divided by the reference word count, so it may exceed 1.0 when the
/// hypothesis inserts many extra words; that is valid and never clamped.
///
/// An empty reference against an empty hypothesis scores 0.0. An empty
/// reference against a non-empty hypothesis is a degenerate input and
/// fails with [`WerError::EmptyReference`].
pub fn word_error_rate(reference: &str, hypothesis: &str) -> Result<f64> {
    let ref_words: Vec<&str> = reference.split_whitespace().collect();
    let hyp_words: Vec<&str> = hypothesis.split_whitespace().collect();

    if ref_words.is_empty() {
        if hyp_words.is_empty() {
            return Ok(0.0);
        }
        return Err(WerError::EmptyReference {
            hypothesis_words: hyp_words.len(),
        });
    }

    let distance = edit_distance(&ref_words, &hyp_words);
    Ok(distance as f64 / ref_words.len() as f64)
}

/// Levenshtein distance over word sequences, two-row dynamic program.
fn edit_distance(reference: &[&str], hypothesis: &[&str]) -> usize {
    let mut prev: Vec<usize> = (0..=hypothesis.len()).collect();
    let mut curr: Vec<usize> = vec![0; hypothesis.len() + 1];

    for (i, ref_word) in reference.iter().enumerate() {
        curr[0] = i + 1;
        for (j, hyp_word) in hypothesis.iter().enumerate() {
            let substitute = prev[j] + usize::from(ref_word != hyp_word);
            let delete = prev[j + 1] + 1;
            let insert = curr[j] + 1;
            curr[j + 1] = substitute.min(delete).min(insert);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[hypothesis.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_zero() {
        let rate = word_error_rate("one two three", "one two three").unwrap();
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_single_substitution() {
        let rate = word_error_rate("one two three", "one too three").unwrap();
        assert!((rate - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_deletion_and_insertion() {
        // One deletion out of three reference words.
        let rate = word_error_rate("one two three", "one three").unwrap();
        assert!((rate - 1.0 / 3.0).abs() < 1e-12);

        // One insertion, still normalized by the three reference words.
        let rate = word_error_rate("one two three", "one two three four").unwrap();
        assert!((rate - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rate_can_exceed_one() {
        let rate = word_error_rate("one", "two three four five").unwrap();
        assert_eq!(rate, 4.0);
    }

    #[test]
    fn test_empty_hypothesis_is_all_deletions() {
        let rate = word_error_rate("one two three", "").unwrap();
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn test_both_empty_is_zero() {
        assert_eq!(word_error_rate("", "").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_reference_is_degenerate() {
        let err = word_error_rate("", "one").unwrap_err();
        assert!(matches!(
            err,
            WerError::EmptyReference {
                hypothesis_words: 1
            }
        ));
    }

    #[test]
    fn test_not_symmetric() {
        // The normalization base differs, so swapping arguments changes
        // the rate: 1 insertion / 2 words vs 1 deletion / 3 words.
        let forward = word_error_rate("a b", "a b c").unwrap();
        let backward = word_error_rate("a b c", "a b").unwrap();
        assert!((forward - 0.5).abs() < 1e-12);
        assert!((backward - 1.0 / 3.0).abs() < 1e-12);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_edit_distance_mixed_operations() {
        let reference: Vec<&str> = "the quick brown fox".split_whitespace().collect();
        let hypothesis: Vec<&str> = "quick brown foxes jump".split_whitespace().collect();
        // delete "the", substitute "fox" -> "foxes", insert "jump"
        assert_eq!(edit_distance(&reference, &hypothesis), 3);
    }
}
