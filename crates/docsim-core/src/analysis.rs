//! One-call engine runs with their verdicts attached
//!
//! The two engines are independent views over the same normalized pair;
//! neither bundle looks at the other.

use crate::classify::{
    classify_edit_similarity, classify_match_length, classify_match_similarity, EditVerdict,
    MatchLengthVerdict, MatchSimilarityVerdict,
};
use crate::edit_distance::edit_similarity;
use crate::substring::{longest_common_substring, substring_similarity, SubstringMatch};
use serde::{Deserialize, Serialize};

/// Edit-distance result with its verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditDistanceAnalysis {
    pub distance: usize,
    pub similarity: f64,
    pub verdict: EditVerdict,
}

/// Longest-common-substring result with both verdicts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstringAnalysis {
    pub matched: SubstringMatch,
    pub similarity: f64,
    pub length_verdict: MatchLengthVerdict,
    pub similarity_verdict: MatchSimilarityVerdict,
}

/// Run the edit-distance engine and classify the result
pub fn analyze_edit_distance(a: &str, b: &str) -> EditDistanceAnalysis {
    let result = edit_similarity(a, b);
    EditDistanceAnalysis {
        distance: result.distance,
        similarity: result.similarity,
        verdict: classify_edit_similarity(result.similarity),
    }
}

/// Run the substring engine and classify the result on both ladders
pub fn analyze_substring(a: &str, b: &str) -> SubstringAnalysis {
    let matched = longest_common_substring(a, b);
    let similarity = substring_similarity(matched.length, a.chars().count(), b.chars().count());
    SubstringAnalysis {
        length_verdict: classify_match_length(matched.length),
        similarity_verdict: classify_match_similarity(similarity),
        matched,
        similarity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_analysis() {
        let analysis = analyze_edit_distance("kitten", "sitting");
        assert_eq!(analysis.distance, 3);
        assert_eq!(analysis.verdict, EditVerdict::ModerateSimilarity);
    }

    #[test]
    fn test_substring_analysis_identical() {
        let analysis = analyze_substring("pride prejudice", "pride prejudice");
        assert_eq!(analysis.matched.length, 15);
        assert_eq!(analysis.similarity, 100.0);
        assert_eq!(analysis.length_verdict, MatchLengthVerdict::SmallCoincidentalMatches);
        assert_eq!(analysis.similarity_verdict, MatchSimilarityVerdict::NotableSimilarity);
    }

    #[test]
    fn test_empty_pair_asymmetry() {
        let edit = analyze_edit_distance("", "");
        let sub = analyze_substring("", "");
        assert_eq!((edit.distance, edit.similarity), (0, 100.0));
        assert_eq!((sub.matched.length, sub.similarity), (0, 0.0));
        assert_eq!(edit.verdict, EditVerdict::HighlySimilar);
        assert_eq!(
            sub.similarity_verdict,
            MatchSimilarityVerdict::PracticallyIndependent
        );
    }
}
