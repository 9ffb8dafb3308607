//! Match rate of every algorithm over the same pair of lists.

use super::result::match_rate;
use super::Reconciler;
use crate::error::Result;
use crate::matching::{Algorithm, MatchOptions};
use rayon::prelude::*;
use serde::Serialize;

/// How many pairs one algorithm found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlgorithmRate {
    pub algorithm: Algorithm,
    pub matches: usize,
    /// `matches / max(len1, len2) * 100`
    pub rate: f64,
}

/// Reconcile with every algorithm and report each one's match rate.
///
/// Algorithms run in parallel; results come back in [`Algorithm::ALL`] order.
pub fn compare_all<S: AsRef<str> + Sync>(
    list1: &[S],
    list2: &[S],
    ignore_case: bool,
    threshold: f64,
) -> Result<Vec<AlgorithmRate>> {
    let reconcilers = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let options = MatchOptions::new(algorithm)
                .with_ignore_case(ignore_case)
                .with_threshold(threshold);
            Reconciler::new(options).map(|r| r.with_alignment(false))
        })
        .collect::<Result<Vec<_>>>()?;

    let rates = reconcilers
        .par_iter()
        .map(|reconciler| {
            let matches = reconciler.reconcile(list1, list2).matches.len();
            AlgorithmRate {
                algorithm: reconciler.options().algorithm,
                matches,
                rate: match_rate(matches, list1.len(), list2.len()),
            }
        })
        .collect();

    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_cover_all_algorithms_in_order() {
        let rates = compare_all(&["Robert", "colour"], &["Rupert", "color"], true, 80.0).unwrap();
        let order: Vec<_> = rates.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());

        let exact = &rates[0];
        assert_eq!(exact.matches, 0);
        assert_eq!(exact.rate, 0.0);

        let soundex = &rates[1];
        assert_eq!(soundex.matches, 2);
        assert!((soundex.rate - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rates_on_empty_lists() {
        let empty: [&str; 0] = [];
        let rates = compare_all(&empty, &empty, true, 80.0).unwrap();
        assert!(rates.iter().all(|r| r.matches == 0 && r.rate == 0.0));
    }

    #[test]
    fn test_rates_reject_invalid_threshold() {
        assert!(compare_all(&["a"], &["a"], true, -5.0).is_err());
    }
}
