//! Reconciliation result structures.

use crate::alignment::Alignment;
use crate::matching::Algorithm;
use serde::Serialize;

/// One accepted pairing between the two lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchPair {
    /// Original text from the first list
    pub item1: String,
    /// Original text from the second list
    pub item2: String,
    /// Position in the first list
    pub index1: usize,
    /// Position in the second list
    pub index2: usize,
    /// Algorithm that accepted the pair
    pub algorithm: Algorithm,
    /// Similarity percentage, present for scored algorithms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    /// Character alignment of the original strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

/// An item that found no partner, with its original position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedItem {
    pub index: usize,
    pub value: String,
}

/// Counts derived from a [`ReconciliationResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ReconciliationSummary {
    pub first_len: usize,
    pub second_len: usize,
    pub matched: usize,
    pub only_in_first: usize,
    pub only_in_second: usize,
    /// `matched / max(first_len, second_len) * 100`
    pub match_rate: f64,
}

/// Partition of two lists into matched pairs and per-side leftovers.
///
/// Every index of each input list appears exactly once: either in a
/// [`MatchPair`] or in the corresponding "only in" list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[must_use]
pub struct ReconciliationResult {
    /// Accepted pairs in the order they were found
    pub matches: Vec<MatchPair>,
    /// First-list items without a partner, in original order
    pub only_in_first: Vec<UnmatchedItem>,
    /// Second-list items without a partner, in original order
    pub only_in_second: Vec<UnmatchedItem>,
}

impl ReconciliationResult {
    /// Length of the first input list.
    #[must_use]
    pub fn first_len(&self) -> usize {
        self.matches.len() + self.only_in_first.len()
    }

    /// Length of the second input list.
    #[must_use]
    pub fn second_len(&self) -> usize {
        self.matches.len() + self.only_in_second.len()
    }

    /// Whether anything was left unmatched on either side.
    #[must_use]
    pub fn has_unmatched(&self) -> bool {
        !self.only_in_first.is_empty() || !self.only_in_second.is_empty()
    }

    /// Matches as a percentage of the longer list; `0.0` when both are empty.
    #[must_use]
    pub fn match_rate(&self) -> f64 {
        match_rate(self.matches.len(), self.first_len(), self.second_len())
    }

    /// Summary counts
    #[must_use]
    pub fn summary(&self) -> ReconciliationSummary {
        ReconciliationSummary {
            first_len: self.first_len(),
            second_len: self.second_len(),
            matched: self.matches.len(),
            only_in_first: self.only_in_first.len(),
            only_in_second: self.only_in_second.len(),
            match_rate: self.match_rate(),
        }
    }
}

pub(crate) fn match_rate(matched: usize, len1: usize, len2: usize) -> f64 {
    let longest = len1.max(len2);
    if longest == 0 {
        0.0
    } else {
        matched as f64 / longest as f64 * 100.0
    }
}
