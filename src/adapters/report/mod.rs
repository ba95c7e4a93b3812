//! Result sinks for CSV and JSON output files.

mod csv_sink;
mod json_sink;

pub use csv_sink::CsvResultSink;
pub use json_sink::JsonResultSink;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{OutputConfig, OutputFormat};
use crate::domain::foundation::TopsisError;
use crate::ports::ResultSink;

/// Builds the sink selected by the output configuration.
pub fn sink_for(config: &OutputConfig) -> Arc<dyn ResultSink> {
    match config.format {
        OutputFormat::Csv => Arc::new(CsvResultSink::new(
            config.score_column.clone(),
            config.rank_column.clone(),
        )),
        OutputFormat::Json => Arc::new(JsonResultSink::new()),
    }
}

/// Sibling path used while writing: `out.csv` -> `out.csv.tmp`.
fn temp_path(path: &Path) -> Result<PathBuf, TopsisError> {
    let mut name = path
        .file_name()
        .ok_or_else(|| TopsisError::write(path, "output path has no file name"))?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}

/// Writes `contents` to a temporary file, then renames it over `path`.
fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), TopsisError> {
    write_via_temp(path, |temp| fs::write(temp, contents))
}

/// Runs `write` against the temporary sibling of `path` and renames it into
/// place. The temporary file is removed on any failure.
fn write_via_temp(
    path: &Path,
    write: impl FnOnce(&Path) -> io::Result<()>,
) -> Result<(), TopsisError> {
    let temp = temp_path(path)?;

    if let Err(e) = write(&temp) {
        let _ = fs::remove_file(&temp);
        return Err(TopsisError::write(
            path,
            format!("Failed to write temporary file: {}", e),
        ));
    }

    fs::rename(&temp, path).map_err(|e| {
        let _ = fs::remove_file(&temp);
        TopsisError::write(path, format!("Failed to rename file: {}", e))
    })
}
