//! CSV result sink.

use std::path::Path;

use tracing::debug;

use super::write_atomically;
use crate::domain::foundation::TopsisError;
use crate::domain::topsis::{format_number, ResultTable};
use crate::ports::ResultSink;

/// Writes the result table as comma-separated text with a header row.
///
/// Columns: label, criteria, score, rank. Rows stay in input order.
#[derive(Debug, Clone)]
pub struct CsvResultSink {
    score_column: String,
    rank_column: String,
}

impl CsvResultSink {
    pub fn new(score_column: impl Into<String>, rank_column: impl Into<String>) -> Self {
        Self {
            score_column: score_column.into(),
            rank_column: rank_column.into(),
        }
    }

    /// Renders the table to CSV bytes.
    pub fn render(&self, table: &ResultTable) -> Result<Vec<u8>, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(table.headers(&self.score_column, &self.rank_column))?;

        for alt in table.alternatives() {
            let mut record = Vec::with_capacity(alt.values.len() + 3);
            record.push(alt.label.clone());
            record.extend(alt.values.iter().map(|v| format_number(*v)));
            record.push(alt.score_display());
            record.push(alt.rank_display());
            writer.write_record(&record)?;
        }

        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}

impl Default for CsvResultSink {
    fn default() -> Self {
        Self::new("Score", "Rank")
    }
}

impl ResultSink for CsvResultSink {
    fn write(&self, table: &ResultTable, path: &Path) -> Result<(), TopsisError> {
        let bytes = self.render(table).map_err(|e| TopsisError::write(path, e))?;
        write_atomically(path, &bytes)?;

        debug!(path = %path.display(), rows = table.len(), "Wrote CSV result");
        Ok(())
    }
}
