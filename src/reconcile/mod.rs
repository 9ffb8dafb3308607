//! List reconciliation.
//!
//! Partitions two item lists into matched pairs and per-side leftovers
//! using one [`Algorithm`]. Matching is greedy and order-dependent:
//!
//! - **Binary** algorithms (exact, Soundex) are first-fit. Each first-list
//!   item takes the first still-free second-list item that matches.
//! - **Scored** algorithms are best-fit per item. Each first-list item takes
//!   the free candidate with the strictly highest similarity at or above
//!   the threshold; ties go to the lower second-list index.
//!
//! A second-list item, once claimed, is never reconsidered. This is not a
//! globally optimal assignment.
//!
//! # Example
//!
//! ```
//! use list_comparer::matching::{Algorithm, MatchOptions};
//! use list_comparer::reconcile::reconcile;
//!
//! let options = MatchOptions::new(Algorithm::Exact);
//! let result = reconcile(&["Apple", "Banana"], &["banana", "apple"], &options)?;
//! assert_eq!(result.matches.len(), 2);
//! assert!(result.only_in_first.is_empty());
//! # Ok::<(), list_comparer::ListCompareError>(())
//! ```

mod greedy;
pub mod rates;
mod result;

pub use rates::{compare_all, AlgorithmRate};
pub use result::{MatchPair, ReconciliationResult, ReconciliationSummary, UnmatchedItem};

use crate::alignment::align;
use crate::error::Result;
use crate::matching::{Algorithm, MatchOptions};
use greedy::Claims;

/// Validated reconciliation settings.
///
/// Construction checks the options once; [`Reconciler::reconcile`] is then
/// total over any pair of lists.
#[derive(Debug, Clone)]
pub struct Reconciler {
    options: MatchOptions,
    compute_alignment: bool,
}

impl Reconciler {
    /// Create a reconciler, rejecting invalid options.
    pub fn new(options: MatchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            compute_alignment: true,
        })
    }

    /// Skip the character alignment on accepted pairs.
    #[must_use]
    pub const fn with_alignment(mut self, enabled: bool) -> Self {
        self.compute_alignment = enabled;
        self
    }

    /// The options this reconciler applies.
    #[must_use]
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Reconcile two lists.
    pub fn reconcile<S: AsRef<str>>(&self, list1: &[S], list2: &[S]) -> ReconciliationResult {
        let algorithm = self.options.algorithm;
        let _span = tracing::debug_span!(
            "reconcile",
            algorithm = %algorithm,
            len1 = list1.len(),
            len2 = list2.len()
        )
        .entered();

        let mut claims = Claims::new(list1.len(), list2.len());

        match algorithm {
            Algorithm::Soundex => greedy::soundex_buckets(list1, list2, &mut claims),
            Algorithm::Exact => {
                let (keys1, keys2) = self.keys(list1, list2);
                greedy::first_fit(&keys1, &keys2, &algorithm, &mut claims);
            }
            Algorithm::Levenshtein
            | Algorithm::DamerauLevenshtein
            | Algorithm::JaroWinkler
            | Algorithm::TokenSort => {
                let (keys1, keys2) = self.keys(list1, list2);
                greedy::best_fit(
                    &keys1,
                    &keys2,
                    &algorithm,
                    self.options.threshold,
                    &mut claims,
                );
            }
        }

        let (pairs, only1, only2) = claims.finish();

        let matches: Vec<MatchPair> = pairs
            .into_iter()
            .map(|claim| {
                let item1 = list1[claim.index1].as_ref();
                let item2 = list2[claim.index2].as_ref();
                tracing::trace!(
                    index1 = claim.index1,
                    index2 = claim.index2,
                    similarity = ?claim.similarity,
                    "accepted pair"
                );
                MatchPair {
                    item1: item1.to_string(),
                    item2: item2.to_string(),
                    index1: claim.index1,
                    index2: claim.index2,
                    algorithm,
                    similarity: claim.similarity,
                    alignment: self.compute_alignment.then(|| align(item1, item2)),
                }
            })
            .collect();

        let only_in_first = collect_unmatched(list1, &only1);
        let only_in_second = collect_unmatched(list2, &only2);

        tracing::debug!(
            matched = matches.len(),
            only_in_first = only_in_first.len(),
            only_in_second = only_in_second.len(),
            "reconciliation complete"
        );

        ReconciliationResult {
            matches,
            only_in_first,
            only_in_second,
        }
    }

    fn keys<S: AsRef<str>>(&self, list1: &[S], list2: &[S]) -> (Vec<String>, Vec<String>) {
        let key = |item: &S| self.options.comparison_key(item.as_ref());
        (list1.iter().map(key).collect(), list2.iter().map(key).collect())
    }
}

fn collect_unmatched<S: AsRef<str>>(list: &[S], indices: &[usize]) -> Vec<UnmatchedItem> {
    indices
        .iter()
        .map(|&index| UnmatchedItem {
            index,
            value: list[index].as_ref().to_string(),
        })
        .collect()
}

/// Reconcile two lists under `options`.
///
/// Fails only when the options are invalid.
pub fn reconcile<S: AsRef<str>>(
    list1: &[S],
    list2: &[S],
    options: &MatchOptions,
) -> Result<ReconciliationResult> {
    Ok(Reconciler::new(options.clone())?.reconcile(list1, list2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(list1: &[&str], list2: &[&str], options: MatchOptions) -> ReconciliationResult {
        reconcile(list1, list2, &options).unwrap()
    }

    fn values(items: &[UnmatchedItem]) -> Vec<&str> {
        items.iter().map(|i| i.value.as_str()).collect()
    }

    #[test]
    fn test_exact_ignore_case() {
        let result = run(
            &["Apple", "Banana"],
            &["banana", "apple"],
            MatchOptions::new(Algorithm::Exact),
        );
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].item1, "Apple");
        assert_eq!(result.matches[0].item2, "apple");
        assert_eq!(result.matches[0].index2, 1);
        assert!(result.matches[0].similarity.is_none());
        assert!(result.matches[0].alignment.is_some());
        assert!(!result.has_unmatched());
    }

    #[test]
    fn test_exact_case_sensitive() {
        let result = run(
            &["Apple", "Banana"],
            &["banana", "apple"],
            MatchOptions::new(Algorithm::Exact).with_ignore_case(false),
        );
        assert!(result.matches.is_empty());
        assert_eq!(values(&result.only_in_first), vec!["Apple", "Banana"]);
        assert_eq!(values(&result.only_in_second), vec!["banana", "apple"]);
    }

    #[test]
    fn test_exact_trims_whitespace() {
        let result = run(
            &["  pear "],
            &["pear"],
            MatchOptions::new(Algorithm::Exact).with_ignore_case(false),
        );
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].item1, "  pear ");
    }

    #[test]
    fn test_duplicates_pair_one_to_one() {
        let result = run(&["a", "a", "a"], &["a", "a"], MatchOptions::new(Algorithm::Exact));
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.only_in_first.len(), 1);
        assert_eq!(result.only_in_first[0].index, 2);
    }

    #[test]
    fn test_levenshtein_threshold_boundary() {
        let accept = run(
            &["kitten"],
            &["sitting"],
            MatchOptions::new(Algorithm::Levenshtein).with_threshold(57.0),
        );
        assert_eq!(accept.matches.len(), 1);
        let similarity = accept.matches[0].similarity.unwrap();
        assert!((similarity - 400.0 / 7.0).abs() < 1e-9);

        let reject = run(
            &["kitten"],
            &["sitting"],
            MatchOptions::new(Algorithm::Levenshtein).with_threshold(58.0),
        );
        assert!(reject.matches.is_empty());
    }

    #[test]
    fn test_greedy_first_list_order_wins() {
        // The second item is identical to the candidate, but the first one
        // clears the threshold and claims it first.
        let result = run(
            &["Jonathn", "Jonathon"],
            &["Jonathon"],
            MatchOptions::new(Algorithm::Levenshtein).with_threshold(70.0),
        );
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].item1, "Jonathn");
        assert_eq!(result.matches[0].similarity, Some(87.5));
        assert_eq!(values(&result.only_in_first), vec!["Jonathon"]);
    }

    #[test]
    fn test_token_sort_ignores_word_order() {
        let result = run(
            &["New York City"],
            &["city new york"],
            MatchOptions::new(Algorithm::TokenSort).with_ignore_case(false),
        );
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].similarity, Some(100.0));
    }

    #[test]
    fn test_soundex_matches_phonetically() {
        let result = run(&["Robert", "Smith"], &["Smyth", "Rupert"], MatchOptions::new(Algorithm::Soundex));
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].index2, 1);
        assert_eq!(result.matches[1].index2, 0);
    }

    #[test]
    fn test_soundex_no_letters_never_match() {
        let result = run(&["123"], &["123"], MatchOptions::new(Algorithm::Soundex));
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_empty_lists_for_every_algorithm() {
        let empty: [&str; 0] = [];
        for algorithm in Algorithm::ALL {
            let options = MatchOptions::new(algorithm);
            let both = run(&empty, &empty, options.clone());
            assert_eq!(both, ReconciliationResult::default());

            let left = run(&["x", "y"], &empty, options.clone());
            assert!(left.matches.is_empty());
            assert_eq!(values(&left.only_in_first), vec!["x", "y"]);

            let right = run(&empty, &["x"], options);
            assert!(right.matches.is_empty());
            assert_eq!(values(&right.only_in_second), vec!["x"]);
        }
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let options = MatchOptions::new(Algorithm::JaroWinkler).with_threshold(150.0);
        assert!(reconcile(&["a"], &["a"], &options).is_err());
        assert!(Reconciler::new(options).is_err());
    }

    #[test]
    fn test_alignment_can_be_disabled() {
        let reconciler = Reconciler::new(MatchOptions::new(Algorithm::Exact))
            .unwrap()
            .with_alignment(false);
        let result = reconciler.reconcile(&["a"], &["a"]);
        assert!(result.matches[0].alignment.is_none());
    }
}
