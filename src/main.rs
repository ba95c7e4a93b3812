use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, error};

use topsis::adapters::{sink_for, FileTableSource};
use topsis::application::{RankAlternativesCommand, RankAlternativesHandler};
use topsis::config::{AppConfig, ConfigError, LogFormat, LoggingConfig, OutputFormat};
use topsis::domain::foundation::ErrorCode;
use topsis::domain::topsis::IdealRule;

/// Rank alternatives with TOPSIS
#[derive(Parser, Debug)]
#[command(name = "topsis", version)]
#[command(about = "Rank alternatives by closeness to the ideal solution", long_about = None)]
struct Args {
    /// Input table (.csv, .xlsx, .xlsm, .xlsb, .xls, .ods)
    input: PathBuf,

    /// Comma-separated criterion weights, e.g. "1,1,1,2"
    #[arg(allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated impacts, "+" (benefit) or "-" (cost), e.g. "+,+,-,+"
    #[arg(allow_hyphen_values = true)]
    impacts: String,

    /// Output file for the ranked table
    output: PathBuf,

    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ideal-point rule: per-criterion or first-criterion
    #[arg(long)]
    ideal_rule: Option<IdealRule>,

    /// Output format: csv or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Log filter directive, e.g. "debug" or "topsis=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(ErrorCode::ConfigInvalid.exit_code());
        }
    };

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(ErrorCode::ConfigInvalid.exit_code());
    }

    debug!(
        ideal_rule = %config.scoring.ideal_rule,
        format = %config.output.format,
        "Configuration loaded"
    );

    let handler = RankAlternativesHandler::new(
        Arc::new(FileTableSource::new()),
        sink_for(&config.output),
        config.scoring.ideal_rule,
    );

    let cmd = RankAlternativesCommand {
        input: args.input,
        weights: args.weights,
        impacts: args.impacts,
        output: args.output,
    };

    match handler.handle(cmd) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), "Ranking failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.code().exit_code())
        }
    }
}

/// Loads configuration and applies command-line overrides on top.
fn load_config(args: &Args) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::load(args.config.as_deref())?;

    if let Some(rule) = args.ideal_rule {
        config.scoring.ideal_rule = rule;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
}
