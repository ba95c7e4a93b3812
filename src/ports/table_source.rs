//! Table Source Port - Interface for loading decision tables.
//!
//! The domain works on an in-memory [`RawTable`]; adapters decide how a file
//! on disk becomes one.

use std::path::Path;

use crate::domain::foundation::TopsisError;
use crate::domain::topsis::RawTable;

/// Port for reading an input file into a raw table.
///
/// # Contract
///
/// Implementations must:
/// - Return `TopsisError::FileNotFound` when the path does not resolve to a file
/// - Return `TopsisError::Read` when the file exists but cannot be decoded
/// - Use the first row as the header row
/// - Leave type checking to the domain; cells are passed through untyped
pub trait TableSource: Send + Sync {
    /// Loads the table stored at `path`.
    fn load(&self, path: &Path) -> Result<RawTable, TopsisError>;
}

/// Fails with `FileNotFound` unless `path` is an existing file.
pub fn ensure_file_exists(path: &Path) -> Result<(), TopsisError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(TopsisError::file_not_found(path))
    }
}
