//! JSON result sink.

use std::path::Path;

use tracing::debug;

use super::write_atomically;
use crate::domain::foundation::TopsisError;
use crate::domain::topsis::ResultTable;
use crate::ports::ResultSink;

/// Writes the result table as pretty-printed JSON.
///
/// Undefined scores and ranks (NaN) are written as `null`.
#[derive(Debug, Clone, Default)]
pub struct JsonResultSink;

impl JsonResultSink {
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for JsonResultSink {
    fn write(&self, table: &ResultTable, path: &Path) -> Result<(), TopsisError> {
        let bytes = serde_json::to_vec_pretty(table).map_err(|e| TopsisError::write(path, e))?;
        write_atomically(path, &bytes)?;

        debug!(path = %path.display(), rows = table.len(), "Wrote JSON result");
        Ok(())
    }
}
