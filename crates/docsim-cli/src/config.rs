//! Comparison configuration

use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Fragments longer than this are truncated in text reports
pub const DEFAULT_FRAGMENT_CHARS: usize = 200;

/// Which comparison engines to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmSelection {
    /// Levenshtein edit distance only
    Edit,
    /// Longest common substring only
    Substring,
    #[default]
    Both,
}

impl AlgorithmSelection {
    pub fn runs_edit_distance(&self) -> bool {
        matches!(self, Self::Edit | Self::Both)
    }

    pub fn runs_substring(&self) -> bool {
        matches!(self, Self::Substring | Self::Both)
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one `compare` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    pub algorithms: AlgorithmSelection,
    pub format: OutputFormat,
    /// Maximum fragment characters shown in text reports
    pub fragment_max_chars: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            algorithms: AlgorithmSelection::default(),
            format: OutputFormat::default(),
            fragment_max_chars: DEFAULT_FRAGMENT_CHARS,
        }
    }
}

impl CompareConfig {
    pub fn validate(&self) -> Result<()> {
        if self.fragment_max_chars == 0 {
            return Err(Error::Config(
                "fragment_max_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompareConfig::default();
        assert_eq!(config.algorithms, AlgorithmSelection::Both);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.fragment_max_chars, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_fragment_rejected() {
        let config = CompareConfig {
            fragment_max_chars: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_selection() {
        assert!(AlgorithmSelection::Both.runs_edit_distance());
        assert!(AlgorithmSelection::Both.runs_substring());
        assert!(!AlgorithmSelection::Edit.runs_substring());
        assert!(!AlgorithmSelection::Substring.runs_edit_distance());
    }
}
