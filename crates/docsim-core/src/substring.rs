//! Longest common substring
//!
//! Finds the longest contiguous run of characters shared by two strings.
//! This is NOT longest common subsequence: any mismatch resets the run.
//!
//! # Algorithm
//!
//! Dynamic programming over two rolling rows of length `|b| + 1`. The outer
//! loop walks `a`, the inner loop walks `b`; a cell extends the diagonal run
//! on a match and drops to zero otherwise. Only a strictly longer run
//! replaces the recorded one, so among equal-length matches the first one
//! found in that order wins.
//!
//! # Example
//!
//! ```rust
//! use docsim_core::substring::longest_common_substring;
//!
//! let found = longest_common_substring("abcdef", "zabcx");
//! assert_eq!(found.as_str(), "abc");
//! assert_eq!(found.length, 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest shared fragment, taken from the first operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringMatch {
    /// `None` when the inputs share no character
    pub fragment: Option<String>,
    /// Length in characters, 0 when nothing matched
    pub length: usize,
}

impl SubstringMatch {
    /// The "no common substring" result
    pub fn none() -> Self {
        Self {
            fragment: None,
            length: 0,
        }
    }

    fn found(fragment: String, length: usize) -> Self {
        Self {
            fragment: Some(fragment),
            length,
        }
    }

    pub fn is_found(&self) -> bool {
        self.fragment.is_some()
    }

    /// Matched text, empty when nothing matched
    pub fn as_str(&self) -> &str {
        self.fragment.as_deref().unwrap_or("")
    }
}

impl fmt::Display for SubstringMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "'{}'", fragment),
            None => write!(f, "(no common substring)"),
        }
    }
}

/// Longest common contiguous substring of `a` and `b`
pub fn longest_common_substring(a: &str, b: &str) -> SubstringMatch {
    if a.is_ascii() && b.is_ascii() {
        let (end, length) = longest_run(a.as_bytes(), b.as_bytes());
        if length == 0 {
            return SubstringMatch::none();
        }
        return SubstringMatch::found(a[end - length..end].to_string(), length);
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (end, length) = longest_run(&a, &b);
    if length == 0 {
        return SubstringMatch::none();
    }
    SubstringMatch::found(a[end - length..end].iter().collect(), length)
}

/// Match length as a share of the shorter input (0-100).
///
/// 0 when either input is empty.
pub fn substring_similarity(length: usize, len_a: usize, len_b: usize) -> f64 {
    let min_len = len_a.min(len_b);
    if min_len == 0 {
        return 0.0;
    }
    (length as f64 / min_len as f64 * 100.0).min(100.0)
}

/// Returns (end position in `a`, run length) of the first longest run
fn longest_run<T: PartialEq>(a: &[T], b: &[T]) -> (usize, usize) {
    if a.is_empty() || b.is_empty() {
        return (0, 0);
    }

    // Column 0 stays zero in both rows
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best_len = 0;
    let mut best_end = 0;

    for (i, a_item) in a.iter().enumerate() {
        for (j, b_item) in b.iter().enumerate() {
            if a_item == b_item {
                let run = prev[j] + 1;
                curr[j + 1] = run;
                if run > best_len {
                    best_len = run;
                    best_end = i + 1;
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_end, best_len)
}
