//! Similarity library for list item matching.
//!
//! # Architecture
//!
//! - [`string_similarity`]: the pure scoring functions (Soundex, Levenshtein,
//!   Damerau-Levenshtein, Jaro / Jaro-Winkler, token sort)
//! - [`Algorithm`]: the closed set of strategies the reconciler can apply
//! - [`SimilarityScorer`]: the scoring seam, answering either
//!   [`ScoreKind::Binary`] or [`ScoreKind::Percent`]
//! - [`MatchOptions`]: algorithm, case handling and threshold for one call
//!
//! # Example
//!
//! ```
//! use list_comparer::matching::{Algorithm, ScoreKind, SimilarityScorer};
//!
//! let score = Algorithm::Levenshtein.score("kitten", "sitting");
//! assert!(matches!(score, ScoreKind::Percent(p) if (p - 57.142).abs() < 0.01));
//! ```

mod algorithm;
mod config;
pub mod string_similarity;
mod traits;

pub use algorithm::Algorithm;
pub use config::{MatchOptions, DEFAULT_THRESHOLD};
pub use string_similarity::{
    damerau_levenshtein_distance, damerau_levenshtein_similarity, jaro_similarity,
    jaro_winkler_similarity, levenshtein_distance, levenshtein_similarity, soundex,
    soundex_match, token_sort_key, token_sort_ratio,
};
pub use traits::{ScoreKind, SimilarityScorer};
