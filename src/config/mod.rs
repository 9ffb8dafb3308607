//! Configuration module for list-comparer.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument overrides
//!
//! # Quick Start
//!
//! ```
//! use list_comparer::config::{AppConfig, ConfigPreset};
//! use list_comparer::matching::Algorithm;
//!
//! // Use defaults
//! let config = AppConfig::default();
//! assert_eq!(config.matching.algorithm, Algorithm::Exact);
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Strict);
//! assert_eq!(config.matching.to_match_options().threshold, 90.0);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .algorithm(Algorithm::JaroWinkler)
//!     .threshold(88.0)
//!     .fail_on_unmatched(true)
//!     .build();
//! assert!(config.behavior.fail_on_unmatched);
//! ```
//!
//! # Configuration File
//!
//! Place a `.list-comparer.yaml` file in your working directory or
//! `~/.config/list-comparer/`:
//!
//! ```yaml
//! matching:
//!   algorithm: damerau-levenshtein
//!   threshold: 85
//!   ignore_case: true
//! output:
//!   format: html
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{ConfigPreset, DEFAULT_MATCHING_THRESHOLD};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, ComparePaths, InputConfig,
    MatchingConfig, OutputConfig, RatesConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, ConfigOverrides,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.list-comparer.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
