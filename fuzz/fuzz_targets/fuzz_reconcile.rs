#![no_main]
use libfuzzer_sys::fuzz_target;
use list_comparer::{reconcile, Algorithm, MatchOptions};

/// Fuzz the reconciler with line-separated lists.
///
/// The first byte picks the algorithm; the rest is split at the first NUL
/// into the two lists. Every index must be accounted for exactly once.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(s) = std::str::from_utf8(rest) else {
        return;
    };
    let (a, b) = s.split_once('\0').unwrap_or((s, ""));
    let list1: Vec<&str> = a.lines().collect();
    let list2: Vec<&str> = b.lines().collect();

    let algorithm = Algorithm::ALL[usize::from(selector) % Algorithm::ALL.len()];
    let options = MatchOptions::new(algorithm).with_threshold(f64::from(selector % 101));
    let result = reconcile(&list1, &list2, &options).expect("threshold in range");

    assert_eq!(result.first_len(), list1.len());
    assert_eq!(result.second_len(), list2.len());
});
