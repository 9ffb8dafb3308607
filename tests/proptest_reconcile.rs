//! Property-based tests for the similarity library and the reconciler.
//!
//! Ensures nothing panics on arbitrary input, that scores stay in range,
//! and that every reconciliation partitions both input lists.

use list_comparer::matching::{
    damerau_levenshtein_distance, damerau_levenshtein_similarity, jaro_similarity,
    jaro_winkler_similarity, levenshtein_distance, levenshtein_similarity, soundex,
    token_sort_ratio,
};
use list_comparer::{reconcile, Algorithm, MatchOptions, ReconciliationResult};
use proptest::prelude::*;

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

/// Short items from a small alphabet so lists actually share matches.
fn items() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-dA-D ]{0,6}", 0..12)
}

fn assert_partition(
    result: &ReconciliationResult,
    len1: usize,
    len2: usize,
) -> Result<(), TestCaseError> {
    let mut seen1 = vec![0u32; len1];
    let mut seen2 = vec![0u32; len2];
    for pair in &result.matches {
        seen1[pair.index1] += 1;
        seen2[pair.index2] += 1;
    }
    for item in &result.only_in_first {
        seen1[item.index] += 1;
    }
    for item in &result.only_in_second {
        seen2[item.index] += 1;
    }
    prop_assert!(seen1.iter().all(|&n| n == 1), "first list: {:?}", seen1);
    prop_assert!(seen2.iter().all(|&n| n == 1), "second list: {:?}", seen2);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn scores_stay_in_range(a in "\\PC{0,20}", b in "\\PC{0,20}") {
        for score in [
            levenshtein_similarity(&a, &b),
            damerau_levenshtein_similarity(&a, &b),
            jaro_similarity(&a, &b),
            jaro_winkler_similarity(&a, &b),
            token_sort_ratio(&a, &b),
        ] {
            prop_assert!((0.0..=100.0).contains(&score), "{} for {:?} / {:?}", score, a, b);
        }
    }

    #[test]
    fn identical_strings_score_full(a in "\\PC{0,20}") {
        prop_assert_eq!(levenshtein_similarity(&a, &a), 100.0);
        prop_assert_eq!(damerau_levenshtein_similarity(&a, &a), 100.0);
        prop_assert_eq!(jaro_winkler_similarity(&a, &a), 100.0);
    }

    #[test]
    fn levenshtein_agrees_with_strsim(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn damerau_agrees_with_strsim(a in "[a-e]{0,10}", b in "[a-e]{0,10}") {
        prop_assert_eq!(
            damerau_levenshtein_distance(&a, &b),
            strsim::damerau_levenshtein(&a, &b)
        );
    }

    #[test]
    fn damerau_never_exceeds_levenshtein(a in "[a-e]{0,10}", b in "[a-e]{0,10}") {
        prop_assert!(damerau_levenshtein_distance(&a, &b) <= levenshtein_distance(&a, &b));
    }

    #[test]
    fn soundex_codes_are_well_formed(s in "\\PC{0,30}") {
        if let Some(code) = soundex(&s) {
            prop_assert_eq!(code.len(), 4);
            let mut chars = code.chars();
            prop_assert!(chars.next().is_some_and(|c| c.is_ascii_uppercase()));
            prop_assert!(chars.all(|c| c.is_ascii_digit()));
        } else {
            prop_assert!(!s.chars().any(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn reconcile_partitions_both_lists(
        list1 in items(),
        list2 in items(),
        algorithm in algorithm(),
        ignore_case in any::<bool>(),
        threshold in 0.0f64..=100.0,
    ) {
        let options = MatchOptions::new(algorithm)
            .with_ignore_case(ignore_case)
            .with_threshold(threshold);
        let result = reconcile(&list1, &list2, &options).unwrap();
        assert_partition(&result, list1.len(), list2.len())?;

        for pair in &result.matches {
            prop_assert_eq!(&pair.item1, &list1[pair.index1]);
            prop_assert_eq!(&pair.item2, &list2[pair.index2]);
            prop_assert_eq!(pair.algorithm, algorithm);
            prop_assert_eq!(pair.similarity.is_some(), algorithm.is_scored());
            if let Some(similarity) = pair.similarity {
                prop_assert!(similarity >= threshold && similarity > 0.0);
            }
        }
    }

    #[test]
    fn reconcile_is_idempotent(
        list1 in items(),
        list2 in items(),
        algorithm in algorithm(),
    ) {
        let options = MatchOptions::new(algorithm);
        let first = reconcile(&list1, &list2, &options).unwrap();
        let second = reconcile(&list1, &list2, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exact_pairs_share_a_key(list1 in items(), list2 in items()) {
        let options = MatchOptions::new(Algorithm::Exact);
        let result = reconcile(&list1, &list2, &options).unwrap();
        for pair in &result.matches {
            prop_assert_eq!(
                pair.item1.trim().to_lowercase(),
                pair.item2.trim().to_lowercase()
            );
        }
    }
}
