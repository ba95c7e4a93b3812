//! Table sources for CSV and spreadsheet input files.

mod csv_source;
mod spreadsheet_source;

pub use csv_source::CsvTableSource;
pub use spreadsheet_source::SpreadsheetTableSource;

use std::path::Path;

use crate::domain::foundation::TopsisError;
use crate::domain::topsis::RawTable;
use crate::ports::{ensure_file_exists, TableSource};

/// Input file format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Spreadsheet,
}

impl TableFormat {
    /// Extensions read through the spreadsheet source.
    pub const SPREADSHEET_EXTENSIONS: [&'static str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

    /// Detects the format from the extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, TopsisError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(TableFormat::Csv),
            ext if Self::SPREADSHEET_EXTENSIONS.contains(&ext) => Ok(TableFormat::Spreadsheet),
            "" => Err(TopsisError::read(path, "cannot detect input format without a file extension")),
            other => Err(TopsisError::read(
                path,
                format!("unsupported input format '.{}'", other),
            )),
        }
    }
}

/// Dispatches to the CSV or spreadsheet source based on the file extension.
#[derive(Debug, Clone, Default)]
pub struct FileTableSource {
    csv: CsvTableSource,
    spreadsheet: SpreadsheetTableSource,
}

impl FileTableSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableSource for FileTableSource {
    fn load(&self, path: &Path) -> Result<RawTable, TopsisError> {
        ensure_file_exists(path)?;

        match TableFormat::from_path(path)? {
            TableFormat::Csv => self.csv.load(path),
            TableFormat::Spreadsheet => self.spreadsheet.load(path),
        }
    }
}
