//! Summary report generator for shell output.
//!
//! Matches are listed with their character alignment: differing runs are
//! shown in reverse video when colored, in `[brackets]` otherwise.

use super::{format_similarity, RatesInput, ReportError, ReportFormat, ReportGenerator, ReportInput};
use crate::alignment::{render_ansi, render_marked, Alignment, Segment};
use crate::reconcile::{MatchPair, UnmatchedItem};
use unicode_width::UnicodeWidthStr;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn rate_color(rate: f64) -> &'static str {
    if rate >= 90.0 {
        "green"
    } else if rate >= 50.0 {
        "yellow"
    } else {
        "red"
    }
}

/// Pad `rendered` on the right so that its visible part spans `target` columns.
fn pad(rendered: &str, visible_width: usize, target: usize) -> String {
    format!(
        "{rendered}{}",
        " ".repeat(target.saturating_sub(visible_width))
    )
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Rendered text and its visible width.
    fn render_segments(&self, segments: &[Segment]) -> (String, usize) {
        if self.colored {
            let plain: String = segments.iter().map(|s| s.text.as_str()).collect();
            (render_ansi(segments), plain.width())
        } else {
            let marked = render_marked(segments);
            let width = marked.width();
            (marked, width)
        }
    }

    fn render_pair(&self, pair: &MatchPair, show_alignment: bool) -> ((String, usize), (String, usize)) {
        match (&pair.alignment, show_alignment) {
            (Some(alignment), true) => self.render_alignment(alignment),
            _ => (
                (pair.item1.clone(), pair.item1.width()),
                (pair.item2.clone(), pair.item2.width()),
            ),
        }
    }

    fn render_alignment(&self, alignment: &Alignment) -> ((String, usize), (String, usize)) {
        (
            self.render_segments(&alignment.segments_first()),
            self.render_segments(&alignment.segments_second()),
        )
    }

    fn push_unmatched(&self, lines: &mut Vec<String>, label: &str, items: &[UnmatchedItem]) {
        if items.is_empty() {
            return;
        }
        lines.push(String::new());
        lines.push(self.color(&format!("Only in {label}:"), "bold"));
        let index_width = items.last().map_or(1, |i| (i.index + 1).to_string().len());
        for item in items {
            lines.push(format!(
                "  {} {}",
                self.color(&format!("{:>index_width$}.", item.index + 1), "dim"),
                item.value
            ));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, input: &ReportInput<'_>) -> Result<String, ReportError> {
        let result = input.result;
        let options = input.options;
        let metadata = &input.config.metadata;
        let summary = result.summary();
        let mut lines = Vec::new();

        // Header
        let title = input.config.title.as_deref().unwrap_or("List Comparison Summary");
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let case = if options.ignore_case {
            "ignore case"
        } else {
            "case-sensitive"
        };
        let algorithm = if options.algorithm.is_scored() {
            format!(
                "{} (threshold {:.1}%, {case})",
                options.algorithm.display_name(),
                options.threshold
            )
        } else {
            format!("{} ({case})", options.algorithm.display_name())
        };
        lines.push(format!("{}  {algorithm}", self.color("Algorithm:", "cyan")));
        lines.push(format!(
            "{}  {} ({} items) ↔ {} ({} items)",
            self.color("Lists:", "cyan"),
            metadata.first_label(),
            summary.first_len,
            metadata.second_label(),
            summary.second_len
        ));
        lines.push(format!(
            "{}  {} ({})",
            self.color("Matched:", "cyan"),
            summary.matched,
            self.color(&format!("{:.1}%", summary.match_rate), rate_color(summary.match_rate))
        ));
        lines.push(format!(
            "{}  {} in {}, {} in {}",
            self.color("Unmatched:", "cyan"),
            summary.only_in_first,
            metadata.first_label(),
            summary.only_in_second,
            metadata.second_label()
        ));

        // Matches
        if !result.matches.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Matches:", "bold"));

            let rendered: Vec<_> = result
                .matches
                .iter()
                .map(|pair| self.render_pair(pair, input.config.show_alignment))
                .collect();
            let first_width = rendered.iter().map(|((_, w), _)| *w).max().unwrap_or(0);
            let second_width = rendered.iter().map(|(_, (_, w))| *w).max().unwrap_or(0);

            for (pair, ((first, w1), (second, w2))) in result.matches.iter().zip(rendered) {
                let similarity = format_similarity(pair.similarity);
                lines.push(
                    format!(
                        "  {}  {}  {}  {}",
                        pad(&first, w1, first_width),
                        self.color("↔", "dim"),
                        pad(&second, w2, second_width),
                        pair.similarity.map_or_else(
                            || self.color(&similarity, "dim"),
                            |s| self.color(&similarity, rate_color(s))
                        )
                    )
                    .trim_end()
                    .to_string(),
                );
            }
        }

        // Leftovers
        self.push_unmatched(&mut lines, metadata.first_label(), &result.only_in_first);
        self.push_unmatched(&mut lines, metadata.second_label(), &result.only_in_second);

        if result.matches.is_empty() && !result.has_unmatched() {
            lines.push(String::new());
            lines.push(format!("  {}", self.color("Both lists are empty", "dim")));
        }

        Ok(lines.join("\n"))
    }

    fn generate_rates(&self, input: &RatesInput<'_>) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("Algorithm Match Rates", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} ↔ {} items, threshold {:.1}%, {}",
            self.color("Lists:", "cyan"),
            input.first_len,
            input.second_len,
            input.threshold,
            if input.ignore_case {
                "ignore case"
            } else {
                "case-sensitive"
            }
        ));
        lines.push(String::new());
        lines.push(format!(
            "{}  {}  {}",
            self.color(&format!("{:<20}", "ALGORITHM"), "bold"),
            self.color(&format!("{:>7}", "MATCHES"), "bold"),
            self.color(&format!("{:>6}", "RATE"), "bold")
        ));

        for rate in input.rates {
            lines.push(format!(
                "{:<20}  {:>7}  {}",
                rate.algorithm.display_name(),
                rate.matches,
                self.color(&format!("{:>5.1}%", rate.rate), rate_color(rate.rate))
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Algorithm;
    use crate::reconcile::compare_all;
    use crate::reports::test_support::sample;
    use crate::reports::ReportConfig;

    #[test]
    fn test_plain_summary_marks_differences() {
        let (result, options) = sample();
        let config = ReportConfig::default();
        let report = SummaryReporter::new()
            .no_color()
            .generate(&ReportInput {
                result: &result,
                options: &options,
                config: &config,
            })
            .unwrap();

        assert!(!report.contains('\x1b'));
        assert!(report.contains("Levenshtein (threshold 70.0%, ignore case)"));
        assert!(report.contains("Matched:  2 (66.7%)"));
        assert!(report.contains("Jonath[a]n Smith"));
        assert!(report.contains("Jonath[o]n Smith"));
        assert!(report.contains("92.9%"));
        assert!(report.contains("Only in List 1:"));
        assert!(report.contains("3. <b>Bold</b>"));
        assert!(report.contains("2. Globex"));
    }

    #[test]
    fn test_colored_summary_uses_reverse_video() {
        let (result, options) = sample();
        let config = ReportConfig::default();
        let report = SummaryReporter::new()
            .generate(&ReportInput {
                result: &result,
                options: &options,
                config: &config,
            })
            .unwrap();
        assert!(report.contains("\x1b[7ma\x1b[0m"));
    }

    #[test]
    fn test_summary_without_alignment() {
        let (result, options) = sample();
        let config = ReportConfig::default().with_alignment(false);
        let report = SummaryReporter::new()
            .no_color()
            .generate(&ReportInput {
                result: &result,
                options: &options,
                config: &config,
            })
            .unwrap();
        assert!(report.contains("Jonathan Smith"));
        assert!(!report.contains('['));
    }

    #[test]
    fn test_rates_table() {
        let rates = compare_all(&["Robert"], &["Rupert"], true, 80.0).unwrap();
        let config = ReportConfig::default();
        let report = SummaryReporter::new()
            .no_color()
            .generate_rates(&RatesInput {
                rates: &rates,
                first_len: 1,
                second_len: 1,
                ignore_case: true,
                threshold: 80.0,
                config: &config,
            })
            .unwrap();
        assert!(report.contains("ALGORITHM"));
        for algorithm in Algorithm::ALL {
            assert!(report.contains(algorithm.display_name()));
        }
        assert!(report.contains("100.0%"));
    }

    #[test]
    fn test_pad_uses_visible_width() {
        assert_eq!(pad("日本", "日本".width(), 6), "日本  ");
        assert_eq!(pad("long", 4, 2), "long");
    }
}
