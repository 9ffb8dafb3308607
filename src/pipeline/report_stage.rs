//! Report output stage.
//!
//! Renders reconciliation results and match rates with the configured
//! reporter and writes them to the configured destination.

use super::{should_use_color, write_output, LoadedList, OutputTarget, PipelineError};
use crate::config::OutputConfig;
use crate::matching::MatchOptions;
use crate::reconcile::{AlgorithmRate, ReconciliationResult};
use crate::reports::{create_reporter, RatesInput, ReportConfig, ReportInput};
use anyhow::Result;

fn report_config(output: &OutputConfig, first: &LoadedList, second: &LoadedList) -> ReportConfig {
    ReportConfig::default()
        .with_alignment(output.show_alignment)
        .with_sources(first.label(), second.label())
}

fn report_failed(source: impl Into<anyhow::Error>) -> PipelineError {
    PipelineError::ReportFailed {
        source: source.into(),
    }
}

/// Output a reconciliation report to the configured destination.
pub fn output_comparison(
    output: &OutputConfig,
    quiet: bool,
    result: &ReconciliationResult,
    options: &MatchOptions,
    first: &LoadedList,
    second: &LoadedList,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let reporter = create_reporter(output.format, should_use_color(output.no_color, &target));
    let config = report_config(output, first, second);

    let report = reporter
        .generate(&ReportInput {
            result,
            options,
            config: &config,
        })
        .map_err(report_failed)?;

    write_output(&report, &target, quiet).map_err(report_failed)?;
    Ok(())
}

/// Output a match-rate table to the configured destination.
pub fn output_rates(
    output: &OutputConfig,
    quiet: bool,
    rates: &[AlgorithmRate],
    options: &MatchOptions,
    first: &LoadedList,
    second: &LoadedList,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let reporter = create_reporter(output.format, should_use_color(output.no_color, &target));
    let config = report_config(output, first, second);

    let report = reporter
        .generate_rates(&RatesInput {
            rates,
            first_len: first.len(),
            second_len: second.len(),
            ignore_case: options.ignore_case,
            threshold: options.threshold,
            config: &config,
        })
        .map_err(report_failed)?;

    write_output(&report, &target, quiet).map_err(report_failed)?;
    Ok(())
}
