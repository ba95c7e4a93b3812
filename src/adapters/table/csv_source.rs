//! CSV table source.

use std::path::Path;

use tracing::debug;

use crate::domain::foundation::TopsisError;
use crate::domain::topsis::{RawCell, RawTable};
use crate::ports::{ensure_file_exists, TableSource};

/// Reads comma-separated text with a header row.
///
/// Every field is passed through as text; blank fields become empty cells.
/// Rows may be shorter than the header but never longer.
#[derive(Debug, Clone, Default)]
pub struct CsvTableSource;

impl CsvTableSource {
    pub fn new() -> Self {
        Self
    }

    fn cell(field: &str) -> RawCell {
        if field.trim().is_empty() {
            RawCell::Empty
        } else {
            RawCell::Text(field.to_string())
        }
    }
}

impl TableSource for CsvTableSource {
    fn load(&self, path: &Path) -> Result<RawTable, TopsisError> {
        ensure_file_exists(path)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| TopsisError::read(path, e))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| TopsisError::read(path, e))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| TopsisError::read(path, e))?;
            if record.len() > headers.len() {
                return Err(TopsisError::read(
                    path,
                    format!(
                        "row {} has {} fields but the header has {}",
                        index + 1,
                        record.len(),
                        headers.len()
                    ),
                ));
            }
            rows.push(record.iter().map(Self::cell).collect());
        }

        debug!(
            path = %path.display(),
            columns = headers.len(),
            rows = rows.len(),
            "Loaded CSV table"
        );

        Ok(RawTable::new(headers, rows))
    }
}
