#![no_main]
use libfuzzer_sys::fuzz_target;
use list_comparer::matching::{
    damerau_levenshtein_similarity, jaro_winkler_similarity, levenshtein_similarity, soundex,
    token_sort_ratio,
};

/// Fuzz the similarity functions.
///
/// Input is split at the first NUL byte into the two strings. Scores must
/// stay within 0..=100.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (a, b) = s.split_once('\0').unwrap_or((s, ""));

    for score in [
        levenshtein_similarity(a, b),
        damerau_levenshtein_similarity(a, b),
        jaro_winkler_similarity(a, b),
        token_sort_ratio(a, b),
    ] {
        assert!((0.0..=100.0).contains(&score));
    }
    let _ = soundex(a);
});
