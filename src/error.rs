//! Unified error types for list-comparer.
//!
//! Reconciliation itself is total over its input; the errors here come from
//! the edges of the system: invalid match options, unreadable or unsupported
//! documents, and report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for list-comparer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ListCompareError {
    /// Errors while extracting items from a document
    #[error("Failed to extract items: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid match options or configuration values
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific document extraction error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidEncoding(String),

    #[error("Failed to parse Excel file: {0}")]
    CorruptWorkbook(String),

    #[error("Failed to parse Word document: {0}")]
    CorruptDocument(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Failed to format report: {0}")]
    Formatting(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for list-comparer operations
pub type Result<T> = std::result::Result<T, ListCompareError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ListCompareError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for an unsupported file extension
    pub fn unsupported_extension(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self::parse(
            format!("unsupported extension '{extension}'"),
            ParseErrorKind::UnsupportedExtension(extension),
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ListCompareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ListCompareError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outward, so an error that passed through two
/// layers reads `"outer: inner: original"`.
///
/// # Example
///
/// ```ignore
/// use list_comparer::error::ErrorContext;
///
/// let bytes = std::fs::read(path).context("reading first list")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ListCompareError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ListCompareError, new_ctx: &str) -> ListCompareError {
    match err {
        ListCompareError::Parse {
            context: existing,
            source,
        } => ListCompareError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ListCompareError::Report {
            context: existing,
            source,
        } => ListCompareError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ListCompareError::Io {
            path,
            message,
            source,
        } => ListCompareError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ListCompareError::Config(msg) => ListCompareError::Config(chain_context(new_ctx, &msg)),
        ListCompareError::Validation(msg) => {
            ListCompareError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| ListCompareError::Validation(context.into()))
    }
}
