//! Character-level alignment between two matched items.
//!
//! The alignment explains *why* two items were paired: characters on the
//! longest common subsequence are shared, everything else is highlighted.
//! It is presentational only and never influences whether items match.
//!
//! # Example
//!
//! ```
//! use list_comparer::alignment::{align, render_marked};
//!
//! let alignment = align("colour", "color");
//! assert_eq!(render_marked(&alignment.segments_first()), "colo[u]r");
//! assert_eq!(render_marked(&alignment.segments_second()), "color");
//! ```

use crate::reports::escape::escape_html;
use serde::Serialize;

/// CSS class wrapped around highlighted runs in HTML output.
pub const HIGHLIGHT_CLASS: &str = "diff-highlight";

/// One column of an alignment, seen from one of the two strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlignedCell {
    /// A character of this string, shared with the other string or not
    Char { ch: char, matched: bool },
    /// A position where only the other string has a character
    Gap,
}

/// Pairwise alignment of two strings; both sides have the same number of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub first: Vec<AlignedCell>,
    pub second: Vec<AlignedCell>,
}

/// A run of characters rendered the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Alignment {
    /// Rendering runs for the first string.
    #[must_use]
    pub fn segments_first(&self) -> Vec<Segment> {
        segments(&self.first)
    }

    /// Rendering runs for the second string.
    #[must_use]
    pub fn segments_second(&self) -> Vec<Segment> {
        segments(&self.second)
    }
}

/// Align two strings along their longest common subsequence.
///
/// On backtrack ties the second string is consumed first, which keeps the
/// output stable for a given input pair.
#[must_use]
pub fn align(a: &str, b: &str) -> Alignment {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());
    let width = m + 1;

    let mut dp = vec![0usize; (n + 1) * width];
    for i in 1..=n {
        for j in 1..=m {
            dp[i * width + j] = if a[i - 1] == b[j - 1] {
                dp[(i - 1) * width + j - 1] + 1
            } else {
                dp[(i - 1) * width + j].max(dp[i * width + j - 1])
            };
        }
    }

    let mut first = Vec::with_capacity(n + m);
    let mut second = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            first.push(AlignedCell::Char { ch: a[i - 1], matched: true });
            second.push(AlignedCell::Char { ch: b[j - 1], matched: true });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i * width + j - 1] >= dp[(i - 1) * width + j]) {
            first.push(AlignedCell::Gap);
            second.push(AlignedCell::Char { ch: b[j - 1], matched: false });
            j -= 1;
        } else {
            first.push(AlignedCell::Char { ch: a[i - 1], matched: false });
            second.push(AlignedCell::Gap);
            i -= 1;
        }
    }

    first.reverse();
    second.reverse();
    Alignment { first, second }
}

/// Group cells into maximal plain and highlighted runs.
///
/// Gaps contribute no text but do end a highlighted run.
fn segments(cells: &[AlignedCell]) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    let mut in_diff = false;

    for cell in cells {
        match *cell {
            AlignedCell::Char { ch, matched: false } => {
                match out.last_mut() {
                    Some(last) if in_diff => last.text.push(ch),
                    _ => out.push(Segment {
                        text: ch.to_string(),
                        highlighted: true,
                    }),
                }
                in_diff = true;
            }
            AlignedCell::Char { ch, matched: true } => {
                in_diff = false;
                match out.last_mut() {
                    Some(last) if !last.highlighted => last.text.push(ch),
                    _ => out.push(Segment {
                        text: ch.to_string(),
                        highlighted: false,
                    }),
                }
            }
            AlignedCell::Gap => in_diff = false,
        }
    }

    out
}

/// Render segments as escaped HTML with highlighted runs in a span.
#[must_use]
pub fn render_html(segments: &[Segment]) -> String {
    let mut html = String::new();
    for segment in segments {
        if segment.highlighted {
            html.push_str(&format!(
                "<span class=\"{HIGHLIGHT_CLASS}\">{}</span>",
                escape_html(&segment.text)
            ));
        } else {
            html.push_str(&escape_html(&segment.text));
        }
    }
    html
}

/// Render segments for a terminal, highlighted runs in reverse video.
#[must_use]
pub fn render_ansi(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.highlighted {
                format!("\x1b[7m{}\x1b[0m", segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect()
}

/// Render segments as plain text, highlighted runs in square brackets.
#[must_use]
pub fn render_marked(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.highlighted {
                format!("[{}]", segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect()
}
