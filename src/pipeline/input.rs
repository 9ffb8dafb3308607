//! Loading the two input lists.

use super::PipelineError;
use crate::extract::{extract_file, DocumentKind, ExtractOptions};
use std::path::{Path, PathBuf};

/// Items extracted from one input document
#[derive(Debug, Clone)]
pub struct LoadedList {
    /// Where the items came from
    pub path: PathBuf,
    /// Kind of document the items were read from
    pub kind: DocumentKind,
    /// Items in document order
    pub items: Vec<String>,
}

impl LoadedList {
    /// Path rendered for report headings.
    #[must_use]
    pub fn label(&self) -> String {
        self.path.display().to_string()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Extract the items of one document, with the path in any error.
pub fn load_list(
    path: &Path,
    options: &ExtractOptions,
    quiet: bool,
) -> Result<LoadedList, PipelineError> {
    let load_failed = |source| PipelineError::LoadFailed {
        path: path.display().to_string(),
        source,
    };

    let kind = DocumentKind::from_path(path).map_err(load_failed)?;
    if !quiet {
        tracing::info!("Reading {}: {}", kind.description(), path.display());
    }

    let items = extract_file(path, options).map_err(load_failed)?;
    if !quiet {
        tracing::info!("Extracted {} items from {}", items.len(), path.display());
    }
    if items.is_empty() {
        tracing::warn!("No items found in {}", path.display());
    }

    Ok(LoadedList {
        path: path.to_path_buf(),
        kind,
        items,
    })
}
