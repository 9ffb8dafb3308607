//! Match options: which algorithm, how to normalize, and the acceptance threshold.

use super::algorithm::Algorithm;
use super::string_similarity::token_sort_key;
use crate::error::{ListCompareError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default similarity threshold (percent).
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Configuration for one reconciliation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchOptions {
    /// Matching strategy
    pub algorithm: Algorithm,
    /// Case-fold items before comparison (surrounding whitespace is always trimmed)
    pub ignore_case: bool,
    /// Minimum similarity (0 - 100) for scored algorithms; ignored by binary ones
    pub threshold: f64,
}

impl MatchOptions {
    /// Options for the given algorithm with default case handling and threshold.
    #[must_use]
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ignore_case: true,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// High threshold for lists that should only differ by typos
    #[must_use]
    pub const fn strict(algorithm: Algorithm) -> Self {
        Self::new(algorithm).with_threshold(90.0)
    }

    /// Default threshold
    #[must_use]
    pub const fn balanced(algorithm: Algorithm) -> Self {
        Self::new(algorithm)
    }

    /// Low threshold for discovery on messy lists
    #[must_use]
    pub const fn permissive(algorithm: Algorithm) -> Self {
        Self::new(algorithm).with_threshold(65.0)
    }

    /// Create options from a preset name ("strict", "balanced", "permissive").
    #[must_use]
    pub fn from_preset(name: &str, algorithm: Algorithm) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strict" => Some(Self::strict(algorithm)),
            "balanced" | "default" => Some(Self::balanced(algorithm)),
            "permissive" | "loose" => Some(Self::permissive(algorithm)),
            _ => None,
        }
    }

    /// Set a custom threshold value.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set case sensitivity.
    #[must_use]
    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Reject options that would make reconciliation unpredictable.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            return Err(ListCompareError::config(format!(
                "threshold must be between 0 and 100, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Comparison key for an item under these options.
    ///
    /// Soundex keys are the raw text since the code is case- and
    /// punctuation-insensitive already. Token sort always case-folds.
    #[must_use]
    pub fn comparison_key(&self, item: &str) -> String {
        match self.algorithm {
            Algorithm::Soundex => item.to_string(),
            Algorithm::TokenSort => token_sort_key(item),
            _ if self.ignore_case => item.trim().to_lowercase(),
            _ => item.trim().to_string(),
        }
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MatchOptions::default();
        assert_eq!(options.algorithm, Algorithm::Exact);
        assert!(options.ignore_case);
        assert_eq!(options.threshold, DEFAULT_THRESHOLD);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let strict = MatchOptions::from_preset("STRICT", Algorithm::Levenshtein).unwrap();
        let permissive = MatchOptions::from_preset("permissive", Algorithm::Levenshtein).unwrap();
        assert!(strict.threshold > permissive.threshold);
        assert!(MatchOptions::from_preset("optimal", Algorithm::Exact).is_none());
    }

    #[test]
    fn test_validate_threshold_range() {
        assert!(MatchOptions::default().with_threshold(0.0).validate().is_ok());
        assert!(MatchOptions::default().with_threshold(100.0).validate().is_ok());
        assert!(MatchOptions::default().with_threshold(100.5).validate().is_err());
        assert!(MatchOptions::default().with_threshold(-1.0).validate().is_err());
        assert!(MatchOptions::default()
            .with_threshold(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_comparison_key() {
        let folded = MatchOptions::new(Algorithm::Levenshtein);
        assert_eq!(folded.comparison_key("  Apple "), "apple");

        let exact = MatchOptions::new(Algorithm::Exact).with_ignore_case(false);
        assert_eq!(exact.comparison_key("  Apple "), "Apple");

        let tokens = MatchOptions::new(Algorithm::TokenSort).with_ignore_case(false);
        assert_eq!(tokens.comparison_key("York New"), "new york");

        let phonetic = MatchOptions::new(Algorithm::Soundex);
        assert_eq!(phonetic.comparison_key(" Robert "), " Robert ");
    }
}
