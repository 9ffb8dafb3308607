//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
    /// Self-contained HTML page
    Html,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Render the character alignment of each match
    pub show_alignment: bool,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            show_alignment: true,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Set the report title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Toggle alignment rendering.
    #[must_use]
    pub const fn with_alignment(mut self, show: bool) -> Self {
        self.show_alignment = show;
        self
    }

    /// Record where the two lists came from.
    #[must_use]
    pub fn with_sources(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.metadata.first_source = Some(first.into());
        self.metadata.second_source = Some(second.into());
        self
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Where the first list came from (usually a file path)
    pub first_source: Option<String>,
    /// Where the second list came from
    pub second_source: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// Label for the first list in headings.
    #[must_use]
    pub fn first_label(&self) -> &str {
        self.first_source.as_deref().unwrap_or("List 1")
    }

    /// Label for the second list in headings.
    #[must_use]
    pub fn second_label(&self) -> &str {
        self.second_source.as_deref().unwrap_or("List 2")
    }
}
