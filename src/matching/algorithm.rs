//! The closed set of matching algorithms.

use crate::error::ListCompareError;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Minimum Jaro-Winkler similarity (0.0 - 1.0) for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A matching strategy.
///
/// Binary algorithms only answer match / no match. Scored algorithms produce
/// a 0-100 similarity that is compared against the caller's threshold.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Equality after normalization
    #[default]
    Exact,
    /// Same four-character Soundex code
    Soundex,
    /// Levenshtein edit-distance similarity
    Levenshtein,
    /// Damerau-Levenshtein similarity (transpositions cost one edit)
    DamerauLevenshtein,
    /// Jaro-Winkler similarity
    JaroWinkler,
    /// Levenshtein similarity of sorted, case-folded word tokens
    TokenSort,
}

impl Algorithm {
    /// All algorithms in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Exact,
        Self::Soundex,
        Self::Levenshtein,
        Self::DamerauLevenshtein,
        Self::JaroWinkler,
        Self::TokenSort,
    ];

    /// Stable kebab-case tag used in config files and output.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Soundex => "soundex",
            Self::Levenshtein => "levenshtein",
            Self::DamerauLevenshtein => "damerau-levenshtein",
            Self::JaroWinkler => "jaro-winkler",
            Self::TokenSort => "token-sort",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Exact => "Exact",
            Self::Soundex => "Soundex",
            Self::Levenshtein => "Levenshtein",
            Self::DamerauLevenshtein => "Damerau-Levenshtein",
            Self::JaroWinkler => "Jaro-Winkler",
            Self::TokenSort => "Token Sort",
        }
    }

    /// Whether the algorithm only answers match / no match.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Exact | Self::Soundex)
    }

    /// Whether the algorithm produces a similarity compared against a threshold.
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        !self.is_binary()
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = ListCompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        if let Some(found) = Self::ALL.iter().find(|a| a.tag() == wanted) {
            return Ok(*found);
        }

        let valid: Vec<&str> = Self::ALL.iter().map(Algorithm::tag).collect();
        let suggestion = Self::ALL
            .iter()
            .map(|a| (a.tag(), strsim::jaro_winkler(&wanted, a.tag())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mut message = format!("Unknown algorithm '{s}'. Valid options: {}", valid.join(", "));
        if let Some((tag, _)) = suggestion {
            message.push_str(&format!(" (did you mean '{tag}'?)"));
        }
        Err(ListCompareError::config(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_and_scored_partition() {
        let binary: Vec<_> = Algorithm::ALL.iter().filter(|a| a.is_binary()).collect();
        assert_eq!(binary, vec![&Algorithm::Exact, &Algorithm::Soundex]);
        assert!(Algorithm::ALL
            .iter()
            .all(|a| a.is_binary() != a.is_scored()));
    }

    #[test]
    fn test_parse_tags() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.tag().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(
            "Jaro_Winkler".parse::<Algorithm>().unwrap(),
            Algorithm::JaroWinkler
        );
    }

    #[test]
    fn test_parse_unknown_is_config_error() {
        let err = "hungarian".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, ListCompareError::Config(_)));
        assert!(err.to_string().contains("hungarian"));
    }

    #[test]
    fn test_parse_unknown_suggests_closest() {
        let err = "levenstein".parse::<Algorithm>().unwrap_err();
        assert!(
            err.to_string().contains("did you mean 'levenshtein'"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Algorithm::DamerauLevenshtein).unwrap();
        assert_eq!(json, "\"damerau-levenshtein\"");
        let back: Algorithm = serde_json::from_str("\"token-sort\"").unwrap();
        assert_eq!(back, Algorithm::TokenSort);
    }
}
