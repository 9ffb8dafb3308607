//! String similarity algorithms for list item matching.
//!
//! Every function here is total: empty strings are valid input and nothing
//! panics. Lengths are measured in `char`s. Scored functions return a
//! percentage in `0.0..=100.0`.

use std::collections::HashMap;

/// Winkler's prefix scaling factor.
const WINKLER_SCALING: f64 = 0.1;

/// Longest common prefix that earns a Winkler bonus.
const WINKLER_MAX_PREFIX: usize = 4;

// ============================================================================
// Soundex
// ============================================================================

/// Compute the Soundex code for phonetic matching.
///
/// Returns `None` when the input has no letters, since such strings cannot
/// be matched phonetically.
///
/// - "Robert" <-> "Rupert" (R163)
/// - "Smith" <-> "Smyth" (S530)
#[must_use]
pub fn soundex(name: &str) -> Option<String> {
    let upper = name.to_uppercase();
    let mut letters = upper.chars().filter(char::is_ascii_uppercase);

    let first = letters.next()?;
    let mut code = String::with_capacity(4);
    code.push(first);

    let mut last_digit = soundex_digit(first);

    for c in letters {
        if code.len() == 4 {
            break;
        }
        let digit = soundex_digit(c);
        if digit == '0' {
            // Uncoded letters separate runs, so "Tymczak" keeps both 2s.
            last_digit = '0';
        } else if digit != last_digit {
            code.push(digit);
            last_digit = digit;
        }
    }

    while code.len() < 4 {
        code.push('0');
    }

    Some(code)
}

/// Get Soundex digit for an upper-case ASCII letter.
#[must_use]
pub const fn soundex_digit(c: char) -> char {
    match c {
        'B' | 'F' | 'P' | 'V' => '1',
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        _ => '0', // A, E, I, O, U, H, W, Y
    }
}

/// Two strings match phonetically iff both have a Soundex code and the codes agree.
#[must_use]
pub fn soundex_match(a: &str, b: &str) -> bool {
    match (soundex(a), soundex(b)) {
        (Some(code_a), Some(code_b)) => code_a == code_b,
        _ => false,
    }
}

// ============================================================================
// Edit distances
// ============================================================================

/// Levenshtein distance: insertions, deletions and substitutions at unit cost.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rolling rows over the (len_a + 1) x (len_b + 1) matrix.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Damerau-Levenshtein distance with unrestricted adjacent transpositions.
///
/// Uses the Lowrance-Wagner recurrence with a last-seen row per character,
/// so "ca" -> "abc" costs 2 (transpose, then insert) where optimal string
/// alignment would report 3.
#[must_use]
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (len_a, len_b) = (a.len(), b.len());

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let max_dist = len_a + len_b;
    let width = len_b + 2;
    // Row/column 0 hold the sentinel; logical cell (i, j) lives at (i + 1, j + 1).
    let mut d = vec![0usize; (len_a + 2) * width];
    let idx = |i: usize, j: usize| i * width + j;

    d[idx(0, 0)] = max_dist;
    for i in 0..=len_a {
        d[idx(i + 1, 0)] = max_dist;
        d[idx(i + 1, 1)] = i;
    }
    for j in 0..=len_b {
        d[idx(0, j + 1)] = max_dist;
        d[idx(1, j + 1)] = j;
    }

    let mut last_row: HashMap<char, usize> = HashMap::new();

    for i in 1..=len_a {
        let mut last_match_col = 0;
        for j in 1..=len_b {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = last_match_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = d[idx(i, j)] + cost;
            let insertion = d[idx(i + 1, j)] + 1;
            let deletion = d[idx(i, j + 1)] + 1;
            let transposition = d[idx(k, l)] + (i - k - 1) + 1 + (j - l - 1);

            d[idx(i + 1, j + 1)] = substitution
                .min(insertion)
                .min(deletion)
                .min(transposition);
        }
        last_row.insert(a[i - 1], i);
    }

    d[idx(len_a + 1, len_b + 1)]
}

/// Convert an edit distance into a percentage of the longer string.
fn distance_to_percent(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 100.0;
    }
    (max_len - distance.min(max_len)) as f64 / max_len as f64 * 100.0
}

/// Levenshtein similarity: `100 * (max_len - distance) / max_len`.
///
/// Two empty strings are identical and score 100.
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    distance_to_percent(levenshtein_distance(a, b), max_len)
}

/// Damerau-Levenshtein similarity, scaled like [`levenshtein_similarity`].
#[must_use]
pub fn damerau_levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    distance_to_percent(damerau_levenshtein_distance(a, b), max_len)
}

// ============================================================================
// Jaro / Jaro-Winkler
// ============================================================================

/// Jaro similarity on the unit interval.
fn jaro_unit(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    // First fit inside the window, scanning left to right.
    for (i, ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0;
    for (i, ca) in a.iter().enumerate() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if *ca != b[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = transpositions as f64 / 2.0;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro similarity as a percentage.
///
/// Identical strings score 100, a string against an empty one scores 0.
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    jaro_unit(&a, &b) * 100.0
}

/// Jaro-Winkler similarity as a percentage.
///
/// Adds `prefix_len * 0.1 * (1 - jaro)` for a shared prefix of up to four
/// characters. The bonus applies at every Jaro level.
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let jaro = jaro_unit(&a, &b);

    let prefix_len = a
        .iter()
        .zip(b.iter())
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();

    let boosted = (prefix_len as f64 * WINKLER_SCALING).mul_add(1.0 - jaro, jaro);
    (boosted * 100.0).min(100.0)
}

// ============================================================================
// Token sort
// ============================================================================

/// Canonical token-sort form: case-folded, trimmed, whitespace tokens
/// sorted and joined by single spaces.
#[must_use]
pub fn token_sort_key(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    let mut tokens: Vec<&str> = lowered.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Token-sort ratio: Levenshtein similarity of the two token-sort keys.
///
/// Always case-folds, independently of any caller setting.
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    levenshtein_similarity(&token_sort_key(a), &token_sort_key(b))
}
