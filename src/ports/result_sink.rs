//! Result Sink Port - Interface for writing ranked tables.

use std::path::Path;

use crate::domain::foundation::TopsisError;
use crate::domain::topsis::ResultTable;

/// Port for persisting a result table.
///
/// # Contract
///
/// Implementations must either write the complete table or leave no file at
/// `path`; a failed run never produces partial output. Failures are reported
/// as `TopsisError::Write`.
pub trait ResultSink: Send + Sync {
    /// Writes `table` to `path`, replacing any existing file.
    fn write(&self, table: &ResultTable, path: &Path) -> Result<(), TopsisError>;
}
