//! CSV report generator.
//!
//! One row per match and per unmatched item, suitable for spreadsheet
//! import. Fields are quoted per RFC 4180 only where needed.

use super::escape::escape_csv;
use super::{RatesInput, ReportError, ReportFormat, ReportGenerator, ReportInput};
use crate::reconcile::UnmatchedItem;
use std::fmt::Write;

const HEADER: &str = "kind,index1,item1,index2,item2,algorithm,similarity";

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_unmatched(
    content: &mut String,
    kind: &str,
    items: &[UnmatchedItem],
    first_side: bool,
) -> Result<(), ReportError> {
    for item in items {
        // Positions are written 1-based, the side without an item stays empty
        let (index1, item1, index2, item2) = if first_side {
            ((item.index + 1).to_string(), escape_csv(&item.value), String::new(), String::new())
        } else {
            (String::new(), String::new(), (item.index + 1).to_string(), escape_csv(&item.value))
        };
        writeln!(content, "{kind},{index1},{item1},{index2},{item2},,")?;
    }
    Ok(())
}

impl ReportGenerator for CsvReporter {
    fn generate(&self, input: &ReportInput<'_>) -> Result<String, ReportError> {
        let result = input.result;
        let mut content = String::new();
        writeln!(content, "{HEADER}")?;

        for pair in &result.matches {
            writeln!(
                content,
                "match,{},{},{},{},{},{}",
                pair.index1 + 1,
                escape_csv(&pair.item1),
                pair.index2 + 1,
                escape_csv(&pair.item2),
                pair.algorithm.tag(),
                pair.similarity.map(|s| format!("{s:.2}")).unwrap_or_default()
            )?;
        }

        write_unmatched(&mut content, "only_in_first", &result.only_in_first, true)?;
        write_unmatched(&mut content, "only_in_second", &result.only_in_second, false)?;

        Ok(content)
    }

    fn generate_rates(&self, input: &RatesInput<'_>) -> Result<String, ReportError> {
        let mut content = String::new();
        writeln!(content, "algorithm,matches,rate")?;
        for rate in input.rates {
            writeln!(
                content,
                "{},{},{:.2}",
                rate.algorithm.tag(),
                rate.matches,
                rate.rate
            )?;
        }
        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::compare_all;
    use crate::reports::test_support::sample;
    use crate::reports::ReportConfig;

    #[test]
    fn test_comparison_csv() {
        let (result, options) = sample();
        let config = ReportConfig::default();
        let csv = CsvReporter::new()
            .generate(&ReportInput {
                result: &result,
                options: &options,
                config: &config,
            })
            .unwrap();

        insta::assert_snapshot!(csv.trim_end(), @r#"
        kind,index1,item1,index2,item2,algorithm,similarity
        match,1,Jonathan Smith,1,Jonathon Smith,levenshtein,92.86
        match,2,"Acme, Inc.",3,"Acme, Inc",levenshtein,90.00
        only_in_first,3,<b>Bold</b>,,,,
        only_in_second,,,2,Globex,,
        "#);
    }

    #[test]
    fn test_rates_csv() {
        let rates = compare_all(&["Robert"], &["Rupert"], true, 80.0).unwrap();
        let config = ReportConfig::default();
        let csv = CsvReporter::new()
            .generate_rates(&RatesInput {
                rates: &rates,
                first_len: 1,
                second_len: 1,
                ignore_case: true,
                threshold: 80.0,
                config: &config,
            })
            .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "algorithm,matches,rate");
        assert_eq!(lines[1], "exact,0,0.00");
        assert_eq!(lines[2], "soundex,1,100.00");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_empty_result_has_header_only() {
        let result = crate::reconcile::ReconciliationResult::default();
        let options = crate::matching::MatchOptions::default();
        let config = ReportConfig::default();
        let csv = CsvReporter::new()
            .generate(&ReportInput {
                result: &result,
                options: &options,
                config: &config,
            })
            .unwrap();
        assert_eq!(csv, format!("{HEADER}\n"));
    }
}
