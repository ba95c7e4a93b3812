//! RankAlternativesHandler - Command handler for a single ranking run.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::TopsisError;
use crate::domain::topsis::{IdealRule, InputValidator, ResultTable, TopsisAnalyzer};
use crate::ports::{ResultSink, TableSource};

/// Command to rank the alternatives stored in a file.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub input: PathBuf,
    /// Comma-separated weights, e.g. `"1,1,2"`.
    pub weights: String,
    /// Comma-separated impacts, e.g. `"+,-,+"`.
    pub impacts: String,
    pub output: PathBuf,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub table: ResultTable,
}

/// Handler for ranking runs.
pub struct RankAlternativesHandler {
    source: Arc<dyn TableSource>,
    sink: Arc<dyn ResultSink>,
    ideal_rule: IdealRule,
}

impl RankAlternativesHandler {
    pub fn new(
        source: Arc<dyn TableSource>,
        sink: Arc<dyn ResultSink>,
        ideal_rule: IdealRule,
    ) -> Self {
        Self {
            source,
            sink,
            ideal_rule,
        }
    }

    pub fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, TopsisError> {
        // 1. Load input
        let raw = self.source.load(&cmd.input)?;

        // 2. Validate before any computation
        let problem = InputValidator::validate(&raw, &cmd.weights, &cmd.impacts)?;

        // 3. Score and rank
        let table = TopsisAnalyzer::rank(&problem, self.ideal_rule);

        // 4. Persist
        self.sink.write(&table, &cmd.output)?;

        let top: Vec<&str> = table
            .top_ranked()
            .iter()
            .map(|alt| alt.label.as_str())
            .collect();
        info!(
            input = %cmd.input.display(),
            output = %cmd.output.display(),
            alternatives = table.len(),
            top_ranked = %top.join(", "),
            "Ranked alternatives"
        );

        Ok(RankAlternativesResult { table })
    }
}
