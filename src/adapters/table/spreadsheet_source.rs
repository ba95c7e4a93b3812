//! Spreadsheet table source backed by `calamine`.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::domain::foundation::TopsisError;
use crate::domain::topsis::{RawCell, RawTable};
use crate::ports::{ensure_file_exists, TableSource};

/// Reads the first worksheet of an Excel or OpenDocument workbook.
///
/// The first row of the used range is the header row. Numeric cells become
/// numbers, blank cells become empty, and everything else (text, booleans,
/// dates, cell errors) is passed through as text.
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetTableSource;

impl SpreadsheetTableSource {
    pub fn new() -> Self {
        Self
    }

    fn cell(data: &Data) -> RawCell {
        match data {
            Data::Int(value) => RawCell::Number(*value as f64),
            Data::Float(value) => RawCell::Number(*value),
            Data::String(text) if text.trim().is_empty() => RawCell::Empty,
            Data::String(text) => RawCell::Text(text.clone()),
            Data::Empty => RawCell::Empty,
            other => RawCell::Text(other.to_string()),
        }
    }

    fn header(index: usize, data: &Data) -> String {
        match Self::cell(data) {
            RawCell::Empty => format!("Unnamed: {}", index),
            cell => cell.render(),
        }
    }
}

impl TableSource for SpreadsheetTableSource {
    fn load(&self, path: &Path) -> Result<RawTable, TopsisError> {
        ensure_file_exists(path)?;

        let mut workbook = open_workbook_auto(path).map_err(|e| TopsisError::read(path, e))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| TopsisError::read(path, "workbook has no worksheets"))?
            .map_err(|e| TopsisError::read(path, e))?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|header| {
                header
                    .iter()
                    .enumerate()
                    .map(|(index, data)| Self::header(index, data))
                    .collect()
            })
            .unwrap_or_default();

        let rows: Vec<Vec<RawCell>> = rows
            .map(|row| row.iter().map(Self::cell).collect())
            .collect();

        debug!(
            path = %path.display(),
            columns = headers.len(),
            rows = rows.len(),
            "Loaded spreadsheet table"
        );

        Ok(RawTable::new(headers, rows))
    }
}
