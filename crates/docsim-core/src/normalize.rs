//! Text normalization
//!
//! Turns a raw document into a canonical stream of lowercase words
//! separated by single spaces, with stopwords removed.
//!
//! # Passes
//!
//! 1. Character filter: ASCII letters are lowercased and kept, whitespace
//!    becomes a single space, everything else is dropped. Dropping means
//!    `"well-known"` fuses into `"wellknown"`.
//! 2. Stopword filter: words are split on spaces, stopwords removed and the
//!    survivors rejoined with one space.
//!
//! Character classes follow the C locale and work on bytes, so non-ASCII
//! letters (and any invalid UTF-8) are treated as non-alphabetic.
//!
//! # Example
//!
//! ```rust
//! use docsim_core::normalize::normalize;
//!
//! let text = normalize("The Quick, Brown FOX!! 123");
//! assert_eq!(text.as_str(), "quick brown fox");
//! ```

use crate::stopwords::is_stopword;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Lowercase words separated by single spaces, stopwords removed.
///
/// Only produced by [`normalize`], so the invariant always holds: no
/// uppercase, nothing outside `a-z` and space, no leading/trailing or
/// doubled spaces, no stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.0.split(' ').filter(|w| !w.is_empty()).count()
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for NormalizedText {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Size of a document before and after normalization, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizationStats {
    pub raw_len: usize,
    pub normalized_len: usize,
}

impl NormalizationStats {
    pub fn new(raw_len: usize, normalized_len: usize) -> Self {
        Self {
            raw_len,
            normalized_len,
        }
    }

    /// Share of the raw document removed by normalization (0-100).
    ///
    /// An empty raw document counts as length 1 so the result stays finite.
    pub fn reduction_percent(&self) -> f64 {
        let raw = (self.raw_len as f64).max(1.0);
        (1.0 - self.normalized_len as f64 / raw) * 100.0
    }
}

/// Normalize a raw document.
///
/// Total over any byte sequence: empty input, or input made only of
/// stopwords, yields an empty [`NormalizedText`].
pub fn normalize(text: impl AsRef<[u8]>) -> NormalizedText {
    let filtered = filter_chars(text.as_ref());
    NormalizedText(drop_stopwords(&filtered))
}

/// Normalize and report the size change
pub fn normalize_with_stats(text: impl AsRef<[u8]>) -> (NormalizedText, NormalizationStats) {
    let raw = text.as_ref();
    let normalized = normalize(raw);
    let stats = NormalizationStats::new(raw.len(), normalized.len());
    (normalized, stats)
}

/// C-locale `isspace`
#[inline]
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn filter_chars(raw: &[u8]) -> String {
    let mut filtered = String::with_capacity(raw.len());
    for &byte in raw {
        if byte.is_ascii_alphabetic() {
            filtered.push(byte.to_ascii_lowercase() as char);
        } else if is_space(byte) {
            filtered.push(' ');
        }
    }
    filtered
}

fn drop_stopwords(filtered: &str) -> String {
    let mut result = String::with_capacity(filtered.len());
    for word in filtered
        .split(' ')
        .filter(|word| !word.is_empty() && !is_stopword(word))
    {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}
