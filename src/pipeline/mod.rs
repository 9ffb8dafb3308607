//! Pipeline orchestration for list comparisons.
//!
//! This module provides shared orchestration logic for the
//! load → reconcile → report workflow, reducing duplication across CLI
//! command handlers.

mod input;
mod output;
mod report_stage;

pub use input::{load_list, LoadedList};
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::{output_comparison, output_rates};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or extract a list
    #[error("Failed to load {path}: {source}")]
    LoadFailed {
        path: String,
        #[source]
        source: crate::error::ListCompareError,
    },

    /// Match options were rejected before reconciliation started
    #[error("Cannot reconcile: {source}")]
    ReconcileFailed {
        #[source]
        source: crate::error::ListCompareError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI integration
pub mod exit_codes {
    /// Success (or nothing unmatched with `--fail-on-unmatched`)
    pub const SUCCESS: i32 = 0;
    /// Items were left unmatched and `--fail-on-unmatched` was given
    pub const UNMATCHED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
