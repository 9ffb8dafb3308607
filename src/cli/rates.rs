//! Rates command handler.
//!
//! Implements the `rates` subcommand: how many pairs each algorithm finds
//! over the same two lists.

use crate::config::RatesConfig;
use crate::pipeline::{exit_codes, load_list, output_rates, PipelineError};
use crate::reconcile::compare_all;
use anyhow::Result;

/// Run the rates command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_rates(config: RatesConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let options = config.matching.to_match_options();

    let extract_options = config.input.to_extract_options();
    let first = load_list(&config.paths.first, &extract_options, quiet)?;
    let second = load_list(&config.paths.second, &extract_options, quiet)?;

    let rates = compare_all(
        &first.items,
        &second.items,
        options.ignore_case,
        options.threshold,
    )
    .map_err(|source| PipelineError::ReconcileFailed { source })?;

    if !quiet {
        if let Some(best) = rates
            .iter()
            .max_by(|a, b| a.rate.total_cmp(&b.rate))
        {
            tracing::info!(
                "Highest match rate: {} ({:.1}%)",
                best.algorithm.display_name(),
                best.rate
            );
        }
    }

    output_rates(&config.output, quiet, &rates, &options, &first, &second)?;
    Ok(exit_codes::SUCCESS)
}
