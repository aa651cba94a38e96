//! English stopword set
//!
//! Uses compile-time perfect hashing (phf) for O(1) membership checks.
//! The set is fixed at build time and never mutated.

use phf::phf_set;

/// Common short English words excluded from comparison
static STOPWORDS: phf::Set<&'static str> = phf_set! {
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go",
    "me", "when", "make", "can", "like", "time", "no", "just", "him", "know",
    "take", "into", "year", "your", "some", "could", "them", "see", "other",
    "than", "then", "now", "look", "only", "come", "its", "over", "think",
    "also", "back", "after", "use", "two", "how", "our", "work", "first",
    "well", "way", "even", "new", "want", "because", "any", "these", "give",
    "day", "most", "us", "is", "was", "are", "been", "has", "had", "were",
    "said", "did", "having", "may", "should", "am", "being",
};

/// Check if a lowercase word is a stopword
#[inline]
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// The full stopword set
pub fn stopwords() -> &'static phf::Set<&'static str> {
    &STOPWORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("and"));
        assert!(is_stopword("being"));
    }

    #[test]
    fn test_content_words_pass() {
        assert!(!is_stopword("quick"));
        assert!(!is_stopword("prejudice"));
    }

    #[test]
    fn test_case_sensitive() {
        // Callers lowercase before lookup
        assert!(!is_stopword("The"));
    }

    #[test]
    fn test_set_size() {
        assert_eq!(stopwords().len(), 112);
        assert!(stopwords().iter().all(|w| w.bytes().all(|b| b.is_ascii_lowercase())));
    }
}
