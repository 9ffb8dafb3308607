//! Spreadsheets: every non-empty cell of every sheet.

use super::dedupe;
use crate::error::{ListCompareError, ParseErrorKind, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

fn corrupt(message: impl std::fmt::Display) -> ListCompareError {
    ListCompareError::parse(
        "reading spreadsheet",
        ParseErrorKind::CorruptWorkbook(message.to_string()),
    )
}

/// Cells are read sheet by sheet in workbook order, row-major within a sheet.
pub(super) fn parse_workbook(bytes: &[u8]) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(corrupt)?;
    let sheet_names = workbook.sheet_names();

    if sheet_names.is_empty() {
        tracing::warn!("Workbook contains no sheets");
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for name in &sheet_names {
        let range = workbook.worksheet_range(name).map_err(corrupt)?;
        let before = items.len();

        for row in range.rows() {
            for cell in row {
                if matches!(cell, Data::Empty) {
                    continue;
                }
                let value = cell.to_string();
                let value = value.trim();
                if !value.is_empty() {
                    items.push(value.to_string());
                }
            }
        }

        tracing::debug!(sheet = %name, cells = items.len() - before, "read sheet");
    }

    Ok(dedupe(items))
}
