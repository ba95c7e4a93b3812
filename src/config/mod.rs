//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from an optional configuration file and
//! from environment variables with the `TOPSIS` prefix; nested values use
//! double underscores as separators. Command-line flags override both.
//!
//! # Example
//!
//! ```no_run
//! use topsis::config::AppConfig;
//!
//! let config = AppConfig::load(None).expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ideal rule: {}", config.scoring.ideal_rule);
//! ```

mod error;
mod logging;
mod output;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::{OutputConfig, OutputFormat};
pub use scoring::ScoringConfig;

use serde::Deserialize;
use std::path::Path;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring configuration (ideal-point rule)
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Output configuration (format, column names)
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads `config_file` when given (format chosen by extension)
    /// 3. Reads environment variables with `TOPSIS` prefix, which win over the file
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS__SCORING__IDEAL_RULE=first-criterion` -> `scoring.ideal_rule`
    /// - `TOPSIS__OUTPUT__FORMAT=json` -> `output.format`
    /// - `TOPSIS__LOGGING__LEVEL=debug` -> `logging.level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or a value cannot be
    /// parsed into its expected type.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::IdealRule;
    use std::env;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("TOPSIS__SCORING__IDEAL_RULE");
        env::remove_var("TOPSIS__OUTPUT__FORMAT");
        env::remove_var("TOPSIS__OUTPUT__SCORE_COLUMN");
        env::remove_var("TOPSIS__LOGGING__LEVEL");
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load(None);

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.scoring.ideal_rule, IdealRule::PerCriterion);
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.output.score_column, "Score");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__SCORING__IDEAL_RULE", "first-criterion");
        env::set_var("TOPSIS__OUTPUT__FORMAT", "json");
        env::set_var("TOPSIS__LOGGING__LEVEL", "debug");
        let result = AppConfig::load(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.ideal_rule, IdealRule::FirstCriterion);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_ideal_rule_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__SCORING__IDEAL_RULE", "sideways");
        let result = AppConfig::load(None);
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("topsis.toml");
        fs::write(
            &path,
            "[scoring]\nideal_rule = \"first-criterion\"\n\n[output]\nscore_column = \"Topsis Score\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.scoring.ideal_rule, IdealRule::FirstCriterion);
        assert_eq!(config.output.score_column, "Topsis Score");
        assert_eq!(config.output.rank_column, "Rank");
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("topsis.toml");
        fs::write(&path, "[output]\nscore_column = \"From File\"\n").unwrap();
        env::set_var("TOPSIS__OUTPUT__SCORE_COLUMN", "From Env");
        let result = AppConfig::load(Some(&path));
        clear_env();

        assert_eq!(result.unwrap().output.score_column, "From Env");
    }

    #[test]
    fn test_missing_config_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
