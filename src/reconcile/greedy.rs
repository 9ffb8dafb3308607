//! Greedy matching passes.
//!
//! Both passes walk the first list in original order and never revisit a
//! claim, so an earlier first-list item always wins a contested candidate
//! even when a later one would score higher.

use crate::matching::{soundex, ScoreKind, SimilarityScorer};
use std::collections::{HashMap, VecDeque};

/// Claim bitmaps for one reconciliation call plus the accepted pairs.
pub(super) struct Claims {
    first: Vec<bool>,
    second: Vec<bool>,
    pairs: Vec<Claim>,
}

/// An accepted pair by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Claim {
    pub index1: usize,
    pub index2: usize,
    pub similarity: Option<f64>,
}

impl Claims {
    pub(super) fn new(len1: usize, len2: usize) -> Self {
        Self {
            first: vec![false; len1],
            second: vec![false; len2],
            pairs: Vec::new(),
        }
    }

    fn claim(&mut self, index1: usize, index2: usize, similarity: Option<f64>) {
        self.first[index1] = true;
        self.second[index2] = true;
        self.pairs.push(Claim {
            index1,
            index2,
            similarity,
        });
    }

    fn claimed(&self) -> usize {
        self.pairs.len()
    }

    /// Accepted pairs followed by the unclaimed indices of each side, in order.
    pub(super) fn finish(self) -> (Vec<Claim>, Vec<usize>, Vec<usize>) {
        let unclaimed = |bits: &[bool]| {
            bits.iter()
                .enumerate()
                .filter_map(|(i, &taken)| (!taken).then_some(i))
                .collect::<Vec<_>>()
        };
        let only_first = unclaimed(&self.first);
        let only_second = unclaimed(&self.second);
        (self.pairs, only_first, only_second)
    }
}

/// First-fit pass for binary scorers: each first-list key takes the first
/// free second-list key that the scorer accepts.
pub(super) fn first_fit(
    keys1: &[String],
    keys2: &[String],
    scorer: &impl SimilarityScorer,
    claims: &mut Claims,
) {
    for (i, key1) in keys1.iter().enumerate() {
        let found = keys2
            .iter()
            .enumerate()
            .filter(|(j, _)| !claims.second[*j])
            .find(|(_, key2)| matches!(scorer.score(key1, key2), ScoreKind::Binary(true)));

        if let Some((j, _)) = found {
            claims.claim(i, j, None);
        }
    }
    tracing::trace!(scorer = scorer.name(), claimed = claims.claimed(), "first-fit pass done");
}

/// First-fit Soundex pass with the second list bucketed by code.
///
/// Within a bucket candidates stay in second-list order, so popping the
/// front is the same as scanning for the first free match.
pub(super) fn soundex_buckets<S: AsRef<str>>(list1: &[S], list2: &[S], claims: &mut Claims) {
    let mut buckets: HashMap<String, VecDeque<usize>> = HashMap::new();
    for (j, item) in list2.iter().enumerate() {
        if let Some(code) = soundex(item.as_ref()) {
            buckets.entry(code).or_default().push_back(j);
        }
    }

    for (i, item) in list1.iter().enumerate() {
        let Some(code) = soundex(item.as_ref()) else {
            continue;
        };
        if let Some(j) = buckets.get_mut(&code).and_then(VecDeque::pop_front) {
            claims.claim(i, j, None);
        }
    }
}

/// Best-fit pass for scored algorithms.
///
/// Each first-list key is scored against every free second-list key and
/// takes the highest score that clears `threshold`. Ties keep the earliest
/// candidate since only a strictly greater score replaces the running best.
pub(super) fn best_fit(
    keys1: &[String],
    keys2: &[String],
    scorer: &impl SimilarityScorer,
    threshold: f64,
    claims: &mut Claims,
) {
    for (i, key1) in keys1.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;

        for (j, key2) in keys2.iter().enumerate() {
            if claims.second[j] {
                continue;
            }
            let score = scorer.score(key1, key2);
            let Some(similarity) = score.percent() else {
                continue;
            };
            if score.clears(threshold) && best.map_or(true, |(_, top)| similarity > top) {
                best = Some((j, similarity));
            }
        }

        if let Some((j, similarity)) = best {
            claims.claim(i, j, Some(similarity));
        }
    }
    tracing::trace!(
        scorer = scorer.name(),
        threshold,
        claimed = claims.claimed(),
        "best-fit pass done"
    );
}
