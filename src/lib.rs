//! **Reconcile two lists of short strings.**
//!
//! `list-comparer` pairs items across two lists (names, product codes,
//! addresses, anything short) using exact, phonetic or fuzzy matching and
//! reports what matched, how similar each pair is, and what is left over on
//! either side. It powers both a command-line tool and this library.
//!
//! ## Core Concepts & Modules
//!
//! - **[`matching`]**: the similarity library. Soundex, Levenshtein,
//!   Damerau-Levenshtein, Jaro-Winkler and token sort, plus the closed
//!   [`Algorithm`] set and the [`MatchOptions`] a reconciliation runs with.
//! - **[`reconcile`]**: the greedy, one-to-one [`Reconciler`] producing a
//!   [`ReconciliationResult`], and [`reconcile::compare_all`] for the match
//!   rate of every algorithm at once.
//! - **[`alignment`]**: character-level alignment of a matched pair, used to
//!   highlight where two items differ.
//! - **[`extract`]**: turns text files, spreadsheets and Word documents into
//!   item lists.
//! - **[`reports`]**: summary, JSON, CSV and HTML renderings.
//!
//! ## Getting Started
//!
//! ```
//! use list_comparer::{reconcile, Algorithm, MatchOptions};
//!
//! let options = MatchOptions::new(Algorithm::JaroWinkler).with_threshold(80.0);
//! let result = reconcile(
//!     &["MARTHA", "Dixon", "Unrelated"],
//!     &["Dickson", "Marhta"],
//!     &options,
//! )?;
//!
//! assert_eq!(result.matches.len(), 2);
//! assert_eq!(result.matches[0].item2, "Marhta");
//! assert_eq!(result.only_in_first[0].value, "Unrelated");
//! # Ok::<(), list_comparer::ListCompareError>(())
//! ```
//!
//! ### Highlighting differences
//!
//! Every pair carries an [`alignment::Alignment`] of the original strings:
//!
//! ```
//! use list_comparer::alignment::{align, render_marked};
//!
//! let alignment = align("Jonathan", "Jonathon");
//! assert_eq!(render_marked(&alignment.segments_first()), "Jonath[a]n");
//! assert_eq!(render_marked(&alignment.segments_second()), "Jonath[o]n");
//! ```
//!
//! ### Reading documents
//!
//! ```no_run
//! use std::path::Path;
//! use list_comparer::extract::{extract_file, ExtractOptions};
//!
//! let items = extract_file(Path::new("customers.xlsx"), &ExtractOptions::default())?;
//! println!("{} distinct cells", items.len());
//! # Ok::<(), list_comparer::ListCompareError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `documents` (default): spreadsheet (`calamine`) and Word document
//!   (`zip` + `quick-xml`) extraction. Without it only plain text is read.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Lengths and counts become percentages
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::unused_self,
    // `a`/`b`, `len1`/`len2` are clear in context
    clippy::similar_names,
    clippy::many_single_char_names
)]

pub mod alignment;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod matching;
pub mod pipeline;
pub mod reconcile;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, InputConfig, MatchingConfig, OutputConfig};
pub use config::{CompareConfig, RatesConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, ListCompareError, OptionContext, Result};
pub use extract::{extract_file, DocumentKind, ExtractOptions};
pub use matching::{Algorithm, MatchOptions, ScoreKind, SimilarityScorer};
pub use reconcile::{
    compare_all, reconcile, AlgorithmRate, MatchPair, ReconciliationResult, ReconciliationSummary,
    Reconciler, UnmatchedItem,
};
pub use reports::{create_reporter, ReportFormat, ReportGenerator};
