//! Default configurations and presets for list-comparer.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, InputConfig, MatchingConfig, OutputConfig};
use crate::matching::Algorithm;
use crate::reports::ReportFormat;

/// Threshold (percent) used when neither a preset nor an explicit value says otherwise.
pub const DEFAULT_MATCHING_THRESHOLD: f64 = crate::matching::DEFAULT_THRESHOLD;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Exact matching, case-insensitive, terminal summary
    Default,
    /// Damerau-Levenshtein at a high threshold
    Strict,
    /// Token-sort matching at a low threshold for messy lists
    Permissive,
    /// Machine-readable output and a failing exit code on leftovers
    Ci,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Permissive => "permissive",
            Self::Ci => "ci",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "permissive" | "loose" => Some(Self::Permissive),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Exact, case-insensitive matching with a terminal summary",
            Self::Strict => "Damerau-Levenshtein matching that only accepts near-identical items",
            Self::Permissive => "Token-sort matching that tolerates reordered words and typos",
            Self::Ci => "JSON output, no colors, exit code 1 when anything is unmatched",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Permissive, Self::Ci]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Permissive => Self::permissive_preset(),
            ConfigPreset::Ci => Self::ci_preset(),
        }
    }

    /// Strict preset.
    ///
    /// - Damerau-Levenshtein so transposed letters still pair up
    /// - 90% threshold
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            matching: MatchingConfig {
                algorithm: Algorithm::DamerauLevenshtein,
                preset: "strict".to_string(),
                ..MatchingConfig::default()
            },
            ..Self::default()
        }
    }

    /// Permissive preset for messy lists.
    ///
    /// - Token sort ignores word order
    /// - 65% threshold
    /// - Repeated items are dropped before matching
    #[must_use]
    pub fn permissive_preset() -> Self {
        Self {
            matching: MatchingConfig {
                algorithm: Algorithm::TokenSort,
                preset: "permissive".to_string(),
                ..MatchingConfig::default()
            },
            input: InputConfig { dedupe: true },
            ..Self::default()
        }
    }

    /// CI pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail when anything is unmatched
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_preset() -> Self {
        Self {
            matching: MatchingConfig::default(),
            input: InputConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                quiet: true,
                fail_on_unmatched: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(ConfigPreset::Default.name(), "default");
        assert_eq!(ConfigPreset::Ci.to_string(), "ci");
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(ConfigPreset::from_name("STRICT"), Some(ConfigPreset::Strict));
        assert_eq!(ConfigPreset::from_name("balanced"), Some(ConfigPreset::Default));
        assert_eq!(ConfigPreset::from_name("pipeline"), Some(ConfigPreset::Ci));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_strict_preset() {
        let options = AppConfig::strict_preset().matching.to_match_options();
        assert_eq!(options.algorithm, Algorithm::DamerauLevenshtein);
        assert_eq!(options.threshold, 90.0);
    }

    #[test]
    fn test_permissive_preset() {
        let config = AppConfig::permissive_preset();
        assert_eq!(config.matching.to_match_options().threshold, 65.0);
        assert!(config.input.dedupe);
    }

    #[test]
    fn test_ci_preset() {
        let config = AppConfig::ci_preset();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert!(config.behavior.fail_on_unmatched);
    }

    #[test]
    fn test_all_presets_round_trip_by_name() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
            assert!(!preset.description().is_empty());
        }
        assert_eq!(
            AppConfig::from_preset(ConfigPreset::Default).matching.to_match_options().threshold,
            DEFAULT_MATCHING_THRESHOLD
        );
    }
}
