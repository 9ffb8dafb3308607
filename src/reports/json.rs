//! JSON report generator.

use super::{RatesInput, ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportInput};
use crate::alignment::{render_html, render_marked};
use crate::matching::{Algorithm, MatchOptions};
use crate::reconcile::{AlgorithmRate, MatchPair, ReconciliationSummary, UnmatchedItem};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_json<T: Serialize>(&self, report: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }?;
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, input: &ReportInput<'_>) -> Result<String, ReportError> {
        let result = input.result;
        let report = JsonComparisonReport {
            metadata: JsonReportMetadata::new(input.config),
            options: input.options,
            summary: result.summary(),
            matches: result
                .matches
                .iter()
                .map(|pair| JsonMatch::new(pair, input.config.show_alignment))
                .collect(),
            only_in_first: &result.only_in_first,
            only_in_second: &result.only_in_second,
        };

        self.to_json(&report)
    }

    fn generate_rates(&self, input: &RatesInput<'_>) -> Result<String, ReportError> {
        let report = JsonRatesReport {
            metadata: JsonReportMetadata::new(input.config),
            first_len: input.first_len,
            second_len: input.second_len,
            ignore_case: input.ignore_case,
            threshold: input.threshold,
            rates: input.rates,
        };

        self.to_json(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonComparisonReport<'a> {
    metadata: JsonReportMetadata,
    options: &'a MatchOptions,
    summary: ReconciliationSummary,
    matches: Vec<JsonMatch<'a>>,
    only_in_first: &'a [UnmatchedItem],
    only_in_second: &'a [UnmatchedItem],
}

#[derive(Serialize)]
struct JsonRatesReport<'a> {
    metadata: JsonReportMetadata,
    first_len: usize,
    second_len: usize,
    ignore_case: bool,
    threshold: f64,
    rates: &'a [AlgorithmRate],
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    second_source: Option<String>,
}

impl JsonReportMetadata {
    fn new(config: &ReportConfig) -> Self {
        Self {
            tool: ToolInfo {
                name: "list-comparer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: Utc::now().to_rfc3339(),
            first_source: config.metadata.first_source.clone(),
            second_source: config.metadata.second_source.clone(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonMatch<'a> {
    index1: usize,
    item1: &'a str,
    index2: usize,
    item2: &'a str,
    algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    similarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alignment: Option<JsonAlignment>,
}

/// Both sides of an alignment, pre-rendered for consumers without a
/// renderer of their own.
#[derive(Serialize)]
struct JsonAlignment {
    marked1: String,
    marked2: String,
    html1: String,
    html2: String,
}

impl<'a> JsonMatch<'a> {
    fn new(pair: &'a MatchPair, show_alignment: bool) -> Self {
        let alignment = pair
            .alignment
            .as_ref()
            .filter(|_| show_alignment)
            .map(|alignment| {
                let first = alignment.segments_first();
                let second = alignment.segments_second();
                JsonAlignment {
                    marked1: render_marked(&first),
                    marked2: render_marked(&second),
                    html1: render_html(&first),
                    html2: render_html(&second),
                }
            });

        Self {
            index1: pair.index1,
            item1: &pair.item1,
            index2: pair.index2,
            item2: &pair.item2,
            algorithm: pair.algorithm,
            similarity: pair.similarity,
            alignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::compare_all;
    use crate::reports::test_support::sample;

    fn generate(config: &ReportConfig) -> serde_json::Value {
        let (result, options) = sample();
        let json = JsonReporter::new()
            .generate(&ReportInput {
                result: &result,
                options: &options,
                config,
            })
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_report_structure() {
        let config = ReportConfig::default().with_sources("a.txt", "b.xlsx");
        let value = generate(&config);

        assert_eq!(value["metadata"]["tool"]["name"], "list-comparer");
        assert_eq!(value["metadata"]["first_source"], "a.txt");
        assert_eq!(value["options"]["algorithm"], "levenshtein");
        assert_eq!(value["summary"]["first_len"], 3);
        assert_eq!(value["summary"]["only_in_second"], 1);

        let first = &value["matches"][0];
        assert_eq!(first["item1"], "Jonathan Smith");
        assert_eq!(first["index2"], 0);
        assert_eq!(first["alignment"]["marked1"], "Jonath[a]n Smith");
        assert_eq!(
            first["alignment"]["html2"],
            "Jonath<span class=\"diff-highlight\">o</span>n Smith"
        );

        assert_eq!(value["only_in_first"][0]["value"], "<b>Bold</b>");
        assert_eq!(value["only_in_second"][0]["index"], 1);
    }

    #[test]
    fn test_alignment_can_be_omitted() {
        let value = generate(&ReportConfig::default().with_alignment(false));
        assert!(value["matches"][0].get("alignment").is_none());
        assert!(value["metadata"].get("first_source").is_none());
    }

    #[test]
    fn test_compact_output() {
        let (result, options) = sample();
        let config = ReportConfig::default();
        let json = JsonReporter::new()
            .pretty(false)
            .generate(&ReportInput {
                result: &result,
                options: &options,
                config: &config,
            })
            .unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_rates_report() {
        let rates = compare_all(&["Robert", "colour"], &["Rupert", "color"], true, 80.0).unwrap();
        let config = ReportConfig::default();
        let json = JsonReporter::new()
            .generate_rates(&RatesInput {
                rates: &rates,
                first_len: 2,
                second_len: 2,
                ignore_case: true,
                threshold: 80.0,
                config: &config,
            })
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["rates"].as_array().map(Vec::len), Some(Algorithm::ALL.len()));
        assert_eq!(value["rates"][0]["algorithm"], "exact");
        assert_eq!(value["rates"][1]["algorithm"], "soundex");
        assert_eq!(value["rates"][1]["matches"], 2);
    }
}
