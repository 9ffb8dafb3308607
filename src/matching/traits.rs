//! Scoring capability shared by every algorithm.
//!
//! The reconciler only needs to know whether a score is a yes/no answer or
//! a percentage; [`SimilarityScorer`] is that seam.

use super::algorithm::Algorithm;
use super::string_similarity::{
    damerau_levenshtein_similarity, jaro_winkler_similarity, levenshtein_similarity,
    soundex_match, token_sort_ratio,
};

/// Outcome of scoring one candidate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreKind {
    /// Binary algorithms: the pair matches or it does not
    Binary(bool),
    /// Scored algorithms: similarity in `0.0..=100.0`
    Percent(f64),
}

impl ScoreKind {
    /// Whether this score accepts the pair at the given threshold.
    ///
    /// Binary scores ignore the threshold. A percentage of zero never
    /// matches, even at threshold zero.
    #[must_use]
    pub fn clears(&self, threshold: f64) -> bool {
        match *self {
            Self::Binary(matched) => matched,
            Self::Percent(score) => score > 0.0 && score >= threshold,
        }
    }

    /// The percentage, if this is a scored result.
    #[must_use]
    pub const fn percent(&self) -> Option<f64> {
        match *self {
            Self::Binary(_) => None,
            Self::Percent(score) => Some(score),
        }
    }
}

/// Trait for pairwise string scoring strategies.
///
/// Inputs are expected to be normalized already; implementors do not trim
/// or case-fold unless the algorithm itself requires it.
pub trait SimilarityScorer {
    /// Score a single pair.
    fn score(&self, a: &str, b: &str) -> ScoreKind;

    /// Name of this scorer for logging.
    fn name(&self) -> &'static str;
}

impl SimilarityScorer for Algorithm {
    fn score(&self, a: &str, b: &str) -> ScoreKind {
        match self {
            Self::Exact => ScoreKind::Binary(a == b),
            Self::Soundex => ScoreKind::Binary(soundex_match(a, b)),
            Self::Levenshtein => ScoreKind::Percent(levenshtein_similarity(a, b)),
            Self::DamerauLevenshtein => ScoreKind::Percent(damerau_levenshtein_similarity(a, b)),
            Self::JaroWinkler => ScoreKind::Percent(jaro_winkler_similarity(a, b)),
            Self::TokenSort => ScoreKind::Percent(token_sort_ratio(a, b)),
        }
    }

    fn name(&self) -> &'static str {
        self.tag()
    }
}
