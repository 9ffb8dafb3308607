//! Compare command handler.
//!
//! Implements the `compare` subcommand for reconciling two lists.

use crate::config::CompareConfig;
use crate::pipeline::{exit_codes, load_list, output_comparison, PipelineError};
use crate::reconcile::{ReconciliationResult, Reconciler};
use anyhow::Result;

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let options = config.matching.to_match_options();
    let reconciler =
        Reconciler::new(options).map_err(|source| PipelineError::ReconcileFailed { source })?;

    let extract_options = config.input.to_extract_options();
    let first = load_list(&config.paths.first, &extract_options, quiet)?;
    let second = load_list(&config.paths.second, &extract_options, quiet)?;

    let result = reconciler.reconcile(&first.items, &second.items);

    if !quiet {
        let summary = result.summary();
        tracing::info!(
            "{} matched ({:.1}%), {} only in first, {} only in second",
            summary.matched,
            summary.match_rate,
            summary.only_in_first,
            summary.only_in_second
        );
    }

    output_comparison(
        &config.output,
        quiet,
        &result,
        reconciler.options(),
        &first,
        &second,
    )?;

    Ok(determine_exit_code(&config, &result))
}

/// Determine the appropriate exit code based on the result and config flags.
fn determine_exit_code(config: &CompareConfig, result: &ReconciliationResult) -> i32 {
    if config.behavior.fail_on_unmatched && result.has_unmatched() {
        exit_codes::UNMATCHED
    } else {
        exit_codes::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ComparePaths};
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn setup(first: &str, second: &str) -> (TempDir, ComparePaths) {
        let tmp = TempDir::new().unwrap();
        let paths = ComparePaths {
            first: tmp.path().join("first.txt"),
            second: tmp.path().join("second.txt"),
        };
        std::fs::write(&paths.first, first).unwrap();
        std::fs::write(&paths.second, second).unwrap();
        (tmp, paths)
    }

    fn config(tmp: &TempDir, paths: ComparePaths, fail_on_unmatched: bool) -> CompareConfig {
        let app = AppConfig::builder()
            .quiet(true)
            .output_format(ReportFormat::Json)
            .output_file(Some(tmp.path().join("out.json")))
            .fail_on_unmatched(fail_on_unmatched)
            .build();
        CompareConfig::from_app(app, paths)
    }

    #[test]
    fn test_run_compare_success() {
        let (tmp, paths) = setup("Apple\nBanana\n", "banana\napple\n");
        let code = run_compare(config(&tmp, paths, true)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(tmp.path().join("out.json").exists());
    }

    #[test]
    fn test_run_compare_fail_on_unmatched() {
        let (tmp, paths) = setup("Apple\nCherry\n", "apple\n");
        let code = run_compare(config(&tmp, paths.clone(), true)).unwrap();
        assert_eq!(code, exit_codes::UNMATCHED);

        let code = run_compare(config(&tmp, paths, false)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_run_compare_invalid_threshold() {
        let (tmp, paths) = setup("a\n", "a\n");
        let mut config = config(&tmp, paths, false);
        config.matching.threshold = Some(120.0);
        assert!(run_compare(config).is_err());
    }
}
