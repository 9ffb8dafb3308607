//! Configuration types for list-comparer operations.
//!
//! Provides structured configuration for the compare and rates commands.

use crate::extract::ExtractOptions;
use crate::matching::{Algorithm, MatchOptions};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all configuration
/// options. It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Matching configuration (algorithm, case handling, threshold)
    pub matching: MatchingConfig,
    /// Input extraction options
    pub input: InputConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the matching algorithm.
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.matching.algorithm = algorithm;
        self
    }

    /// Set the threshold preset.
    pub fn preset(mut self, preset: impl Into<String>) -> Self {
        self.config.matching.preset = preset.into();
        self
    }

    /// Set the matching threshold.
    pub const fn threshold(mut self, threshold: f64) -> Self {
        self.config.matching.threshold = Some(threshold);
        self
    }

    /// Toggle case-insensitive comparison.
    pub const fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.config.matching.ignore_case = ignore_case;
        self
    }

    /// De-duplicate extracted items.
    pub const fn dedupe(mut self, dedupe: bool) -> Self {
        self.config.input.dedupe = dedupe;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Toggle alignment rendering in reports.
    pub const fn show_alignment(mut self, show: bool) -> Self {
        self.config.output.show_alignment = show;
        self
    }

    /// Exit with code 1 when anything is left unmatched.
    pub const fn fail_on_unmatched(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_unmatched = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Paths of the two lists to reconcile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparePaths {
    /// First list
    pub first: PathBuf,
    /// Second list
    pub second: PathBuf,
}

/// Configuration for the compare command
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Paths to compare
    pub paths: ComparePaths,
    /// Matching configuration
    pub matching: MatchingConfig,
    /// Input extraction options
    pub input: InputConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl CompareConfig {
    /// Combine resolved application settings with the paths to compare.
    #[must_use]
    pub fn from_app(app: AppConfig, paths: ComparePaths) -> Self {
        Self {
            paths,
            matching: app.matching,
            input: app.input,
            output: app.output,
            behavior: app.behavior,
        }
    }
}

/// Configuration for the rates command
#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// Paths to compare
    pub paths: ComparePaths,
    /// Matching configuration (the algorithm is ignored, all are tried)
    pub matching: MatchingConfig,
    /// Input extraction options
    pub input: InputConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl RatesConfig {
    /// Combine resolved application settings with the paths to compare.
    #[must_use]
    pub fn from_app(app: AppConfig, paths: ComparePaths) -> Self {
        Self {
            paths,
            matching: app.matching,
            input: app.input,
            output: app.output,
            behavior: app.behavior,
        }
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Matching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Matching algorithm
    pub algorithm: Algorithm,
    /// Compare items case-insensitively
    pub ignore_case: bool,
    /// Custom similarity threshold in percent (overrides preset)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 100.0))]
    pub threshold: Option<f64>,
    /// Threshold preset name: strict, balanced or permissive
    pub preset: String,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            ignore_case: true,
            threshold: None,
            preset: "balanced".to_string(),
        }
    }
}

impl MatchingConfig {
    /// Resolve into the options the reconciler runs with.
    #[must_use]
    pub fn to_match_options(&self) -> MatchOptions {
        let mut options =
            MatchOptions::from_preset(&self.preset, self.algorithm).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown threshold preset '{}', using 'balanced'. Valid: strict, balanced, permissive",
                    self.preset
                );
                MatchOptions::balanced(self.algorithm)
            });

        if let Some(threshold) = self.threshold {
            options = options.with_threshold(threshold);
        }

        options.with_ignore_case(self.ignore_case)
    }
}

/// Input extraction configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputConfig {
    /// Remove repeated items (first occurrence wins) for every document kind
    pub dedupe: bool,
}

impl InputConfig {
    #[must_use]
    pub const fn to_extract_options(&self) -> ExtractOptions {
        ExtractOptions { dedupe: self.dedupe }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Render the character alignment of each match
    pub show_alignment: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            no_color: false,
            show_alignment: true,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 if any item is left unmatched
    pub fail_on_unmatched: bool,
}
