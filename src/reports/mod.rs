//! Report generation for reconciliation results.
//!
//! Output formats:
//! - Summary: colored terminal output with highlighted alignments
//! - JSON: structured data for programmatic integration
//! - CSV: one row per match or unmatched item, for spreadsheets
//! - HTML: self-contained page for sharing
//!
//! Every reporter also renders the per-algorithm match rates produced by
//! [`crate::reconcile::compare_all`].
//!
//! # Security
//!
//! Items come from user documents. The [`escape`] module must be used for
//! anything embedded in HTML or CSV.

mod csv;
pub mod escape;
mod html;
mod json;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::error::{ListCompareError, ReportErrorKind};
use crate::matching::MatchOptions;
use crate::reconcile::{AlgorithmRate, ReconciliationResult};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<ReportError> for ListCompareError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::IoError(e) => e.into(),
            ReportError::SerializationError(message) => Self::report(
                "rendering report",
                ReportErrorKind::JsonSerializationError(message),
            ),
            ReportError::FormatError(e) => {
                Self::report("rendering report", ReportErrorKind::Formatting(e.to_string()))
            }
        }
    }
}

/// Everything a reporter needs for one reconciliation report.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub result: &'a ReconciliationResult,
    pub options: &'a MatchOptions,
    pub config: &'a ReportConfig,
}

/// Everything a reporter needs for a match-rate comparison.
#[derive(Debug, Clone, Copy)]
pub struct RatesInput<'a> {
    pub rates: &'a [AlgorithmRate],
    pub first_len: usize,
    pub second_len: usize,
    pub ignore_case: bool,
    pub threshold: f64,
    pub config: &'a ReportConfig,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a reconciliation result.
    fn generate(&self, input: &ReportInput<'_>) -> Result<String, ReportError>;

    /// Render per-algorithm match rates.
    fn generate_rates(&self, input: &RatesInput<'_>) -> Result<String, ReportError>;

    /// Write a reconciliation report to a writer.
    fn write_report(&self, input: &ReportInput<'_>, writer: &mut dyn Write) -> Result<(), ReportError> {
        let report = self.generate(input)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}

/// Similarity formatted to one decimal, or `-` for binary matches.
pub(crate) fn format_similarity(similarity: Option<f64>) -> String {
    similarity.map_or_else(|| "-".to_string(), |s| format!("{s:.1}%"))
}
