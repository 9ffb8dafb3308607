//! Item extraction from documents.
//!
//! Turns a file into an ordered list of trimmed, non-empty items:
//!
//! - plain text: one item per line
//! - spreadsheets: one item per non-empty cell, every sheet, de-duplicated
//! - word-processor documents: one item per line of paragraph text
//!
//! Spreadsheet and word-processor support requires the `documents` feature.
//!
//! ```no_run
//! use list_comparer::extract::{extract_file, ExtractOptions};
//! use std::path::Path;
//!
//! let items = extract_file(Path::new("customers.xlsx"), &ExtractOptions::default())?;
//! println!("{} items", items.len());
//! # Ok::<(), list_comparer::ListCompareError>(())
//! ```

#[cfg(feature = "documents")]
mod document;
#[cfg(feature = "documents")]
mod spreadsheet;
mod text;

use crate::error::{ErrorContext, ListCompareError, OptionContext, Result};
use indexmap::IndexSet;
use std::path::Path;

/// Largest input file accepted (64 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Kind of document an item list is extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    PlainText,
    Spreadsheet,
    WordProcessor,
}

impl DocumentKind {
    /// Classify a lower- or mixed-case file extension.
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_lowercase().as_str() {
            "txt" | "text" | "csv" | "lst" => Ok(Self::PlainText),
            "xlsx" | "xls" | "xlsm" | "ods" => Ok(Self::Spreadsheet),
            "docx" => Ok(Self::WordProcessor),
            other => Err(ListCompareError::unsupported_extension(other)),
        }
    }

    /// Classify a path by its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .context_none(format!("{} has no file extension", path.display()))?;
        Self::from_extension(extension)
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PlainText => "Text File",
            Self::Spreadsheet => "Excel Spreadsheet",
            Self::WordProcessor => "Word Document",
        }
    }

    /// Whether this build can read the kind.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        match self {
            Self::PlainText => true,
            Self::Spreadsheet | Self::WordProcessor => cfg!(feature = "documents"),
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Whether a file name has an extension this build can read.
#[must_use]
pub fn is_supported(filename: &str) -> bool {
    DocumentKind::from_path(Path::new(filename)).is_ok_and(|kind| kind.is_available())
}

/// Extraction settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Drop repeated items, keeping the first occurrence.
    /// Spreadsheets are always de-duplicated.
    pub dedupe: bool,
}

/// Extract items from a file on disk.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Vec<String>> {
    let kind = DocumentKind::from_path(path)?;

    let metadata = std::fs::metadata(path).map_err(|e| ListCompareError::io(path, e))?;
    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(ListCompareError::validation(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_INPUT_FILE_SIZE / (1024 * 1024),
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| ListCompareError::io(path, e))?;
    let items = extract_bytes(&bytes, kind, options)
        .with_context(|| path.display().to_string())?;

    tracing::debug!(
        path = %path.display(),
        kind = %kind,
        items = items.len(),
        "extracted items"
    );
    Ok(items)
}

/// Extract items from in-memory document bytes.
pub fn extract_bytes(bytes: &[u8], kind: DocumentKind, options: &ExtractOptions) -> Result<Vec<String>> {
    let items = match kind {
        DocumentKind::PlainText => text::parse_text(bytes)?,
        #[cfg(feature = "documents")]
        DocumentKind::Spreadsheet => spreadsheet::parse_workbook(bytes)?,
        #[cfg(feature = "documents")]
        DocumentKind::WordProcessor => document::parse_docx(bytes)?,
        #[cfg(not(feature = "documents"))]
        DocumentKind::Spreadsheet | DocumentKind::WordProcessor => {
            return Err(ListCompareError::unsupported_extension(kind.description()));
        }
    };

    Ok(if options.dedupe { dedupe(items) } else { items })
}

/// Split text into trimmed, non-empty lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remove repeated items, keeping the first occurrence of each.
#[must_use]
pub fn dedupe(items: Vec<String>) -> Vec<String> {
    items.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}
