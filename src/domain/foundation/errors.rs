//! Error types for the domain layer.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    FileNotFound,
    ReadFailed,

    // Validation errors
    ShapeError,
    TypeError,
    CountMismatch,
    FormatError,

    // Output errors
    WriteFailed,

    // Setup errors
    ConfigInvalid,
}

impl ErrorCode {
    /// Process exit status reported for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::FileNotFound => 3,
            ErrorCode::ReadFailed => 4,
            ErrorCode::ShapeError => 5,
            ErrorCode::TypeError => 6,
            ErrorCode::CountMismatch => 7,
            ErrorCode::FormatError => 8,
            ErrorCode::WriteFailed => 9,
            ErrorCode::ConfigInvalid => 10,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::ReadFailed => "READ_FAILED",
            ErrorCode::ShapeError => "SHAPE_ERROR",
            ErrorCode::TypeError => "TYPE_ERROR",
            ErrorCode::CountMismatch => "COUNT_MISMATCH",
            ErrorCode::FormatError => "FORMAT_ERROR",
            ErrorCode::WriteFailed => "WRITE_FAILED",
            ErrorCode::ConfigInvalid => "CONFIG_INVALID",
        };
        write!(f, "{}", s)
    }
}

/// Errors that abort a ranking run.
///
/// Every variant is fatal: no partial result table is produced once one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Input must contain three or more columns, found {columns}")]
    Shape { columns: usize },

    #[error(
        "Columns from 2nd to last must contain numeric values only: column '{column}' row {row} holds '{value}'"
    )]
    Type {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Number of {field} ({actual}) must match the number of criterion columns ({expected})")]
    CountMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {field}: {reason}")]
    Format { field: String, reason: String },

    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

impl TopsisError {
    /// Creates a file not found error.
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        TopsisError::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a read error for a file that exists but could not be decoded.
    pub fn read(path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
        TopsisError::Read {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Creates a shape error for a table with too few columns.
    pub fn shape(columns: usize) -> Self {
        TopsisError::Shape { columns }
    }

    /// Creates a type error for a non-numeric criterion cell.
    ///
    /// `row` is 1-based and counts data rows only (the header is not a row).
    pub fn non_numeric(column: impl Into<String>, row: usize, value: impl Into<String>) -> Self {
        TopsisError::Type {
            column: column.into(),
            row,
            value: value.into(),
        }
    }

    /// Creates a count mismatch error.
    pub fn count_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        TopsisError::CountMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates a format error.
    pub fn format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TopsisError::Format {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a write error.
    pub fn write(path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
        TopsisError::Write {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Returns the category code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::FileNotFound { .. } => ErrorCode::FileNotFound,
            TopsisError::Read { .. } => ErrorCode::ReadFailed,
            TopsisError::Shape { .. } => ErrorCode::ShapeError,
            TopsisError::Type { .. } => ErrorCode::TypeError,
            TopsisError::CountMismatch { .. } => ErrorCode::CountMismatch,
            TopsisError::Format { .. } => ErrorCode::FormatError,
            TopsisError::Write { .. } => ErrorCode::WriteFailed,
        }
    }
}
