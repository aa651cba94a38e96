//! Levenshtein edit distance
//!
//! Unit-cost insertions, deletions and substitutions, computed with two
//! rolling rows sized to the shorter operand: O(|a|·|b|) time,
//! O(min(|a|,|b|)) space.
//!
//! Comparison is per `char`. ASCII inputs (every [`NormalizedText`] is
//! ASCII) are compared byte-wise without collecting characters.
//!
//! [`NormalizedText`]: crate::normalize::NormalizedText
//!
//! # Example
//!
//! ```rust
//! use docsim_core::edit_distance::{edit_distance, edit_similarity};
//!
//! assert_eq!(edit_distance("kitten", "sitting"), 3);
//! let result = edit_similarity("kitten", "sitting");
//! assert!((result.similarity - 57.142857).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

/// Distance and the similarity percentage derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditDistanceResult {
    /// Minimum number of single-character edits
    pub distance: usize,
    /// `max(0, (1 - distance / max(|a|,|b|)) * 100)`, 100 when both are empty
    pub similarity: f64,
}

/// Minimum number of single-character edits turning `a` into `b`
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a.is_ascii() && b.is_ascii() {
        return rolling_distance(a.as_bytes(), b.as_bytes());
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    rolling_distance(&a, &b)
}

/// Edit distance plus normalized similarity.
///
/// Two empty strings are identical: distance 0, similarity 100.
pub fn edit_similarity(a: &str, b: &str) -> EditDistanceResult {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return EditDistanceResult {
            distance: 0,
            similarity: 100.0,
        };
    }

    let distance = edit_distance(a, b);
    let similarity = ((1.0 - distance as f64 / max_len as f64) * 100.0).max(0.0);
    EditDistanceResult {
        distance,
        similarity,
    }
}

/// Rows run over the longer operand, columns over the shorter one.
fn rolling_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, long_item) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, short_item) in short.iter().enumerate() {
            let cost = usize::from(long_item != short_item);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_distances() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("sunday", "saturday"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("abc", "abc"), 0);
    }

    #[test]
    fn test_empty_operands() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abcd", ""), 4);
    }

    #[test]
    fn test_orientation_does_not_matter() {
        assert_eq!(edit_distance("a", "abcdef"), 5);
        assert_eq!(edit_distance("abcdef", "a"), 5);
    }

    #[test]
    fn test_non_ascii_counts_chars() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("ñ", ""), 1);
    }

    #[test]
    fn test_similarity_kitten() {
        let result = edit_similarity("kitten", "sitting");
        assert_eq!(result.distance, 3);
        assert!((result.similarity - (1.0 - 3.0 / 7.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_both_empty() {
        let result = edit_similarity("", "");
        assert_eq!(result.distance, 0);
        assert_eq!(result.similarity, 100.0);
    }

    #[test]
    fn test_similarity_completely_different() {
        let result = edit_similarity("abc", "xyz");
        assert_eq!(result.distance, 3);
        assert_eq!(result.similarity, 0.0);
    }

    #[test]
    fn test_similarity_one_empty() {
        let result = edit_similarity("", "hello");
        assert_eq!(result.distance, 5);
        assert_eq!(result.similarity, 0.0);
    }
}
