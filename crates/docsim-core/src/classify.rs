//! Similarity verdicts
//!
//! Fixed threshold ladders that turn a numeric result into a label.
//!
//! ```text
//! edit similarity P:   <5 different | <25 low | <60 moderate | else highly similar
//! match length L:      <50 small    | <200 moderate | else long identical phrases
//! match similarity P:  <1 independent | <5 low | else notable
//! ```
//!
//! The substring engine is judged on BOTH the length ladder and the
//! similarity ladder. The two are reported side by side and are never
//! merged into one scale, so they can disagree in tone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edit-distance similarity below this is "practically different"
pub const EDIT_DIFFERENT_BELOW: f64 = 5.0;
/// Edit-distance similarity below this is "low similarity"
pub const EDIT_LOW_BELOW: f64 = 25.0;
/// Edit-distance similarity below this is "moderate similarity"
pub const EDIT_MODERATE_BELOW: f64 = 60.0;

/// Match length below this is "small coincidental matches"
pub const MATCH_SMALL_BELOW: usize = 50;
/// Match length below this is "moderate matches"
pub const MATCH_MODERATE_BELOW: usize = 200;

/// Substring similarity below this is "practically independent"
pub const SHARE_INDEPENDENT_BELOW: f64 = 1.0;
/// Substring similarity below this is "low similarity"
pub const SHARE_LOW_BELOW: f64 = 5.0;

/// Verdict on edit-distance similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditVerdict {
    PracticallyDifferent,
    LowSimilarity,
    ModerateSimilarity,
    /// Highly similar, likely derived from one another
    HighlySimilar,
}

impl EditVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PracticallyDifferent => "practically different",
            Self::LowSimilarity => "low similarity",
            Self::ModerateSimilarity => "moderate similarity",
            Self::HighlySimilar => "highly similar / likely derived",
        }
    }
}

/// Verdict on the raw length of the longest common substring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLengthVerdict {
    SmallCoincidentalMatches,
    ModerateMatches,
    LongIdenticalPhrases,
}

impl MatchLengthVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SmallCoincidentalMatches => "small coincidental matches",
            Self::ModerateMatches => "moderate matches",
            Self::LongIdenticalPhrases => "long identical phrases",
        }
    }
}

/// Verdict on the length-derived substring similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSimilarityVerdict {
    PracticallyIndependent,
    LowSimilarity,
    NotableSimilarity,
}

impl MatchSimilarityVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PracticallyIndependent => "practically independent",
            Self::LowSimilarity => "low similarity",
            Self::NotableSimilarity => "notable similarity",
        }
    }
}

impl fmt::Display for EditVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for MatchLengthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for MatchSimilarityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an edit-distance similarity percentage
pub fn classify_edit_similarity(similarity: f64) -> EditVerdict {
    if similarity < EDIT_DIFFERENT_BELOW {
        EditVerdict::PracticallyDifferent
    } else if similarity < EDIT_LOW_BELOW {
        EditVerdict::LowSimilarity
    } else if similarity < EDIT_MODERATE_BELOW {
        EditVerdict::ModerateSimilarity
    } else {
        EditVerdict::HighlySimilar
    }
}

/// Classify the length of a common substring
pub fn classify_match_length(length: usize) -> MatchLengthVerdict {
    if length < MATCH_SMALL_BELOW {
        MatchLengthVerdict::SmallCoincidentalMatches
    } else if length < MATCH_MODERATE_BELOW {
        MatchLengthVerdict::ModerateMatches
    } else {
        MatchLengthVerdict::LongIdenticalPhrases
    }
}

/// Classify a substring similarity percentage
pub fn classify_match_similarity(similarity: f64) -> MatchSimilarityVerdict {
    if similarity < SHARE_INDEPENDENT_BELOW {
        MatchSimilarityVerdict::PracticallyIndependent
    } else if similarity < SHARE_LOW_BELOW {
        MatchSimilarityVerdict::LowSimilarity
    } else {
        MatchSimilarityVerdict::NotableSimilarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_ladder_boundaries() {
        assert_eq!(classify_edit_similarity(0.0), EditVerdict::PracticallyDifferent);
        assert_eq!(classify_edit_similarity(4.99), EditVerdict::PracticallyDifferent);
        assert_eq!(classify_edit_similarity(5.0), EditVerdict::LowSimilarity);
        assert_eq!(classify_edit_similarity(24.99), EditVerdict::LowSimilarity);
        assert_eq!(classify_edit_similarity(25.0), EditVerdict::ModerateSimilarity);
        assert_eq!(classify_edit_similarity(59.99), EditVerdict::ModerateSimilarity);
        assert_eq!(classify_edit_similarity(60.0), EditVerdict::HighlySimilar);
        assert_eq!(classify_edit_similarity(100.0), EditVerdict::HighlySimilar);
    }

    #[test]
    fn test_length_ladder_boundaries() {
        assert_eq!(classify_match_length(0), MatchLengthVerdict::SmallCoincidentalMatches);
        assert_eq!(classify_match_length(49), MatchLengthVerdict::SmallCoincidentalMatches);
        assert_eq!(classify_match_length(50), MatchLengthVerdict::ModerateMatches);
        assert_eq!(classify_match_length(199), MatchLengthVerdict::ModerateMatches);
        assert_eq!(classify_match_length(200), MatchLengthVerdict::LongIdenticalPhrases);
    }

    #[test]
    fn test_similarity_ladder_boundaries() {
        assert_eq!(
            classify_match_similarity(0.99),
            MatchSimilarityVerdict::PracticallyIndependent
        );
        assert_eq!(classify_match_similarity(1.0), MatchSimilarityVerdict::LowSimilarity);
        assert_eq!(classify_match_similarity(4.99), MatchSimilarityVerdict::LowSimilarity);
        assert_eq!(classify_match_similarity(5.0), MatchSimilarityVerdict::NotableSimilarity);
    }

    #[test]
    fn test_ladders_can_disagree() {
        assert_eq!(classify_match_length(75).label(), "moderate matches");
        assert_eq!(classify_match_similarity(3.0).label(), "low similarity");
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(
            EditVerdict::HighlySimilar.to_string(),
            "highly similar / likely derived"
        );
        assert_eq!(
            MatchLengthVerdict::LongIdenticalPhrases.to_string(),
            "long identical phrases"
        );
    }
}
