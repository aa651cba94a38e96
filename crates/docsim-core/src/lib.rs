//! docsim Core Engine
//!
//! Document similarity between two plain-text buffers. Pure, synchronous
//! and allocation-light: no I/O, no logging, no shared mutable state.
//!
//! # Pipeline
//!
//! ```text
//! raw bytes ─▶ normalize ─▶ NormalizedText pair ─┬▶ edit_distance ─▶ EditVerdict
//!                                                └▶ substring     ─▶ MatchLengthVerdict
//!                                                                  + MatchSimilarityVerdict
//! ```
//!
//! # Example
//!
//! ```rust
//! use docsim_core::{analyze_edit_distance, analyze_substring, normalize};
//!
//! let a = normalize("It is a truth universally acknowledged...");
//! let b = normalize("A truth, universally acknowledged!");
//! assert_eq!(a.as_str(), "truth universally acknowledged");
//!
//! let edit = analyze_edit_distance(&a, &b);
//! assert_eq!(edit.distance, 0);
//!
//! let sub = analyze_substring(&a, &b);
//! assert_eq!(sub.matched.as_str(), "truth universally acknowledged");
//! ```

pub mod analysis;
pub mod classify;
pub mod edit_distance;
pub mod normalize;
pub mod stopwords;
pub mod substring;

// Re-export main types at crate root
pub use analysis::{analyze_edit_distance, analyze_substring, EditDistanceAnalysis, SubstringAnalysis};
pub use classify::{
    classify_edit_similarity, classify_match_length, classify_match_similarity, EditVerdict,
    MatchLengthVerdict, MatchSimilarityVerdict,
};
pub use edit_distance::{edit_distance, edit_similarity, EditDistanceResult};
pub use normalize::{normalize, normalize_with_stats, NormalizationStats, NormalizedText};
pub use stopwords::is_stopword;
pub use substring::{longest_common_substring, substring_similarity, SubstringMatch};
