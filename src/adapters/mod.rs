//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the filesystem:
//! - `table` - Input table sources (CSV, spreadsheets)
//! - `report` - Result sinks (CSV, JSON)

pub mod report;
pub mod table;

pub use report::{sink_for, CsvResultSink, JsonResultSink};
pub use table::{CsvTableSource, FileTableSource, SpreadsheetTableSource, TableFormat};
