//! Output configuration

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// File format of the result table
    #[serde(default)]
    pub format: OutputFormat,

    /// Header of the score column (CSV only)
    #[serde(default = "default_score_column")]
    pub score_column: String,

    /// Header of the rank column (CSV only)
    #[serde(default = "default_rank_column")]
    pub rank_column: String,
}

/// Result file format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected 'csv' or 'json'", other)),
        }
    }
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.score_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName("score_column"));
        }
        if self.rank_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName("rank_column"));
        }
        if self.score_column == self.rank_column {
            return Err(ValidationError::DuplicateColumnName);
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            score_column: default_score_column(),
            rank_column: default_rank_column(),
        }
    }
}

fn default_score_column() -> String {
    "Score".to_string()
}

fn default_rank_column() -> String {
    "Rank".to_string()
}
