//! HTML report generator.

use super::escape::{escape_html, escape_html_attr};
use super::{format_similarity, RatesInput, ReportError, ReportFormat, ReportGenerator, ReportInput};
use crate::alignment::render_html;
use crate::reconcile::{MatchPair, UnmatchedItem};
use std::fmt::Write;

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Leave out the inline stylesheet (for embedding in another page).
    #[must_use]
    pub const fn without_styles(mut self) -> Self {
        self.include_styles = false;
        self
    }

    fn get_styles(&self) -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #1e1e2e;
                --text-color: #cdd6f4;
                --accent-color: #89b4fa;
                --success-color: #a6e3a1;
                --warning-color: #f9e2af;
                --error-color: #f38ba8;
                --border-color: #45475a;
                --card-bg: #313244;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.6;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
            }

            h1, h2, h3 {
                color: var(--accent-color);
            }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 20px;
                margin-bottom: 30px;
            }

            .summary-cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                gap: 20px;
                margin-bottom: 30px;
            }

            .card {
                background-color: var(--card-bg);
                border-radius: 8px;
                padding: 20px;
                border: 1px solid var(--border-color);
            }

            .card-title {
                font-size: 0.9em;
                color: #a6adc8;
                margin-bottom: 10px;
            }

            .card-value {
                font-size: 2em;
                font-weight: bold;
            }

            .card-value.matched { color: var(--success-color); }
            .card-value.unmatched { color: var(--error-color); }
            .card-value.rate { color: var(--warning-color); }

            table {
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 30px;
                background-color: var(--card-bg);
                border-radius: 8px;
                overflow: hidden;
            }

            th, td {
                padding: 12px 15px;
                text-align: left;
                border-bottom: 1px solid var(--border-color);
            }

            th {
                background-color: #45475a;
                font-weight: 600;
            }

            tr:hover {
                background-color: #3b3d4d;
            }

            td.item {
                font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                white-space: pre-wrap;
            }

            .diff-highlight {
                background-color: rgba(243, 139, 168, 0.3);
                color: var(--error-color);
                border-radius: 2px;
            }

            .section {
                margin-bottom: 40px;
            }

            .footer {
                margin-top: 40px;
                padding-top: 20px;
                border-top: 1px solid var(--border-color);
                font-size: 0.9em;
                color: #a6adc8;
            }
        </style>
        "#
    }

    fn write_head(&self, html: &mut String, title: &str) -> Result<(), ReportError> {
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{}</title>", escape_html(title))?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>{}</h1>", escape_html(title))?;
        writeln!(
            html,
            "    <p>Generated by list-comparer v{} on {}</p>",
            env!("CARGO_PKG_VERSION"),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(html, "</div>")?;
        Ok(())
    }
}

fn write_tail(html: &mut String) -> Result<(), ReportError> {
    writeln!(html, "<div class=\"footer\">")?;
    writeln!(html, "    <p>Generated by list-comparer</p>")?;
    writeln!(html, "</div>")?;
    writeln!(html, "</div>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(())
}

fn write_card(html: &mut String, title: &str, value: &str, class: &str) -> Result<(), ReportError> {
    writeln!(html, "    <div class=\"card\">")?;
    writeln!(html, "        <div class=\"card-title\">{}</div>", escape_html(title))?;
    writeln!(html, "        <div class=\"card-value {class}\">{value}</div>")?;
    writeln!(html, "    </div>")?;
    Ok(())
}

fn match_cells(pair: &MatchPair, show_alignment: bool) -> (String, String) {
    match (&pair.alignment, show_alignment) {
        (Some(alignment), true) => (
            render_html(&alignment.segments_first()),
            render_html(&alignment.segments_second()),
        ),
        _ => (escape_html(&pair.item1), escape_html(&pair.item2)),
    }
}

fn write_unmatched(html: &mut String, label: &str, items: &[UnmatchedItem]) -> Result<(), ReportError> {
    writeln!(html, "<div class=\"section\">")?;
    writeln!(
        html,
        "<h2>Only in {} ({})</h2>",
        escape_html(label),
        items.len()
    )?;
    if items.is_empty() {
        writeln!(html, "<p>Every item found a match.</p>")?;
    } else {
        writeln!(html, "<table>")?;
        writeln!(html, "<thead><tr><th>#</th><th>Item</th></tr></thead>")?;
        writeln!(html, "<tbody>")?;
        for item in items {
            writeln!(
                html,
                "<tr><td>{}</td><td class=\"item\">{}</td></tr>",
                item.index + 1,
                escape_html(&item.value)
            )?;
        }
        writeln!(html, "</tbody>")?;
        writeln!(html, "</table>")?;
    }
    writeln!(html, "</div>")?;
    Ok(())
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, input: &ReportInput<'_>) -> Result<String, ReportError> {
        let result = input.result;
        let options = input.options;
        let metadata = &input.config.metadata;
        let summary = result.summary();
        let mut html = String::new();

        let title = input
            .config
            .title
            .clone()
            .unwrap_or_else(|| "List Comparison Report".to_string());
        self.write_head(&mut html, &title)?;

        // Summary cards
        writeln!(html, "<div class=\"summary-cards\">")?;
        write_card(&mut html, "Algorithm", &escape_html(options.algorithm.display_name()), "")?;
        write_card(&mut html, "Matched", &summary.matched.to_string(), "matched")?;
        write_card(&mut html, "Match Rate", &format!("{:.1}%", summary.match_rate), "rate")?;
        write_card(
            &mut html,
            &format!("Only in {}", metadata.first_label()),
            &summary.only_in_first.to_string(),
            "unmatched",
        )?;
        write_card(
            &mut html,
            &format!("Only in {}", metadata.second_label()),
            &summary.only_in_second.to_string(),
            "unmatched",
        )?;
        writeln!(html, "</div>")?;

        let mut settings = format!(
            "{} items vs {} items, {}",
            summary.first_len,
            summary.second_len,
            if options.ignore_case {
                "ignoring case"
            } else {
                "case-sensitive"
            }
        );
        if options.algorithm.is_scored() {
            settings.push_str(&format!(", threshold {:.1}%", options.threshold));
        }
        writeln!(html, "<p>{}</p>", escape_html(&settings))?;

        // Matches
        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "<h2>Matches ({})</h2>", result.matches.len())?;
        if result.matches.is_empty() {
            writeln!(html, "<p>No matches found.</p>")?;
        } else {
            writeln!(html, "<table>")?;
            writeln!(
                html,
                "<thead><tr><th>#</th><th title=\"{}\">{}</th><th>#</th><th title=\"{}\">{}</th><th>Similarity</th></tr></thead>",
                escape_html_attr(metadata.first_label()),
                escape_html(metadata.first_label()),
                escape_html_attr(metadata.second_label()),
                escape_html(metadata.second_label())
            )?;
            writeln!(html, "<tbody>")?;
            for pair in &result.matches {
                let (first, second) = match_cells(pair, input.config.show_alignment);
                writeln!(
                    html,
                    "<tr><td>{}</td><td class=\"item\">{first}</td><td>{}</td><td class=\"item\">{second}</td><td>{}</td></tr>",
                    pair.index1 + 1,
                    pair.index2 + 1,
                    format_similarity(pair.similarity)
                )?;
            }
            writeln!(html, "</tbody>")?;
            writeln!(html, "</table>")?;
        }
        writeln!(html, "</div>")?;

        write_unmatched(&mut html, metadata.first_label(), &result.only_in_first)?;
        write_unmatched(&mut html, metadata.second_label(), &result.only_in_second)?;

        write_tail(&mut html)?;
        Ok(html)
    }

    fn generate_rates(&self, input: &RatesInput<'_>) -> Result<String, ReportError> {
        let mut html = String::new();
        let title = input
            .config
            .title
            .clone()
            .unwrap_or_else(|| "Algorithm Match Rates".to_string());
        self.write_head(&mut html, &title)?;

        writeln!(
            html,
            "<p>{} items vs {} items, threshold {:.1}%, {}</p>",
            input.first_len,
            input.second_len,
            input.threshold,
            if input.ignore_case {
                "ignoring case"
            } else {
                "case-sensitive"
            }
        )?;

        writeln!(html, "<table>")?;
        writeln!(
            html,
            "<thead><tr><th>Algorithm</th><th>Matches</th><th>Rate</th></tr></thead>"
        )?;
        writeln!(html, "<tbody>")?;
        for rate in input.rates {
            writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{:.1}%</td></tr>",
                escape_html(rate.algorithm.display_name()),
                rate.matches,
                rate.rate
            )?;
        }
        writeln!(html, "</tbody>")?;
        writeln!(html, "</table>")?;

        write_tail(&mut html)?;
        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}
