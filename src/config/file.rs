//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::matching::Algorithm;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".list-comparer.yaml",
    ".list-comparer.yml",
    "list-comparer.yaml",
    "list-comparer.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/list-comparer/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // An explicit path is returned even when missing so loading reports it
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("list-comparer")) {
            return Some(path);
        }
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
pub fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file deserializes to unit, not to an empty mapping
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Values given explicitly on the command line.
///
/// `None` (or `false` for switches) means "not given" and leaves the file
/// value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub algorithm: Option<Algorithm>,
    pub threshold: Option<f64>,
    pub preset: Option<String>,
    pub case_sensitive: bool,
    pub dedupe: bool,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
    pub no_alignment: bool,
    pub quiet: bool,
    pub fail_on_unmatched: bool,
}

impl AppConfig {
    /// Apply command-line values on top of this config.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(algorithm) = overrides.algorithm {
            self.matching.algorithm = algorithm;
        }
        if let Some(ref preset) = overrides.preset {
            self.matching.preset.clone_from(preset);
            // A preset on the command line beats a threshold from the file
            self.matching.threshold = None;
        }
        if overrides.threshold.is_some() {
            self.matching.threshold = overrides.threshold;
        }
        if overrides.case_sensitive {
            self.matching.ignore_case = false;
        }

        if overrides.dedupe {
            self.input.dedupe = true;
        }

        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if overrides.no_color {
            self.output.no_color = true;
        }
        if overrides.no_alignment {
            self.output.show_alignment = false;
        }

        if overrides.quiet {
            self.behavior.quiet = true;
        }
        if overrides.fail_on_unmatched {
            self.behavior.fail_on_unmatched = true;
        }
    }

    /// Load from the discovered (or explicit) file and apply CLI overrides.
    ///
    /// Without a config file the defaults are used. A file that exists but
    /// cannot be read or parsed is an error, as is a missing explicit path.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = match discover_config_file(config_path) {
            Some(path) => {
                let config = load_config_file(&path)?;
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            None => (Self::default(), None),
        };
        config.apply_overrides(overrides);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# list-comparer configuration
# Place this file at .list-comparer.yaml in your working directory or ~/.config/list-comparer/
#
# matching.algorithm: exact, soundex, levenshtein, damerau-levenshtein, jaro-winkler, token-sort
# matching.preset: strict (90), balanced (80), permissive (65); matching.threshold overrides it
# output.format: summary, json, csv, html

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(find_config_in_dir(tmp.path()).is_none());

        std::fs::write(tmp.path().join("list-comparer.yml"), "").unwrap();
        std::fs::write(tmp.path().join(".list-comparer.yaml"), "").unwrap();
        let found = find_config_in_dir(tmp.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), ".list-comparer.yaml");
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(
            &path,
            "matching:\n  algorithm: jaro-winkler\n  threshold: 92\noutput:\n  format: csv\n",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.matching.algorithm, Algorithm::JaroWinkler);
        assert_eq!(config.matching.threshold, Some(92.0));
        assert_eq!(config.output.format, ReportFormat::Csv);
    }

    #[test]
    fn test_load_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.yaml");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(load_config_file(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.yaml");
        assert!(matches!(
            load_config_file(&missing),
            Err(ConfigFileError::NotFound(_))
        ));

        let invalid = tmp.path().join("invalid.yaml");
        std::fs::write(&invalid, "matching:\n  algorithm: telepathy\n").unwrap();
        assert!(matches!(
            load_config_file(&invalid),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let tmp = TempDir::new().unwrap();
        let invalid = tmp.path().join("invalid.yaml");
        std::fs::write(&invalid, "output: [not, a, mapping]\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&invalid));
        assert_eq!(config, AppConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_misspelled_algorithm_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "matching:\n  algorithm: levenstein\n  threshold: 70\n").unwrap();

        let err = AppConfig::from_file_with_overrides(Some(&path), &ConfigOverrides::default())
            .unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse(_)));
        assert!(err.to_string().contains("levenstein"), "{err}");
    }

    #[test]
    fn test_missing_explicit_config_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.yaml");
        assert!(matches!(
            AppConfig::from_file_with_overrides(Some(&missing), &ConfigOverrides::default()),
            Err(ConfigFileError::NotFound(_))
        ));
    }

    #[test]
    fn test_file_values_survive_empty_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "matching:\n  algorithm: levenshtein\n  threshold: 70\n").unwrap();

        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&path), &ConfigOverrides::default()).unwrap();
        assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
        assert_eq!(config.matching.algorithm, Algorithm::Levenshtein);
        assert_eq!(config.matching.threshold, Some(70.0));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = AppConfig::builder()
            .algorithm(Algorithm::Levenshtein)
            .threshold(70.0)
            .output_format(ReportFormat::Html)
            .build();

        config.apply_overrides(&ConfigOverrides {
            preset: Some("strict".to_string()),
            case_sensitive: true,
            no_alignment: true,
            ..Default::default()
        });

        assert_eq!(config.matching.algorithm, Algorithm::Levenshtein);
        assert_eq!(config.matching.threshold, None);
        assert_eq!(config.matching.to_match_options().threshold, 90.0);
        assert!(!config.matching.ignore_case);
        assert_eq!(config.output.format, ReportFormat::Html);
        assert!(!config.output.show_alignment);
    }

    #[test]
    fn test_explicit_threshold_beats_preset() {
        let mut config = AppConfig::default();
        config.apply_overrides(&ConfigOverrides {
            preset: Some("permissive".to_string()),
            threshold: Some(50.0),
            ..Default::default()
        });
        assert_eq!(config.matching.to_match_options().threshold, 50.0);
    }

    #[test]
    fn test_example_config_parses() {
        let example = generate_example_config();
        assert!(example.starts_with("# list-comparer configuration"));
        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
