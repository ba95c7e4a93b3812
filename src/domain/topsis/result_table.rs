//! Result Table - Decision table augmented with score and rank.

use serde::{Deserialize, Serialize};

use super::{format_number, DecisionTable};

/// One alternative with its computed score and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAlternative {
    pub label: String,
    pub values: Vec<f64>,
    /// Closeness score in [0, 1]; NaN for degenerate input.
    pub score: f64,
    /// 1 is best; tied scores share an averaged rank; NaN when the score is NaN.
    pub rank: f64,
}

impl ScoredAlternative {
    /// Returns the rank formatted for output (`1`, `2.5`, `NaN`).
    pub fn rank_display(&self) -> String {
        format_number(self.rank)
    }

    /// Returns the score formatted for output.
    pub fn score_display(&self) -> String {
        format_number(self.score)
    }
}

/// The ranked table. Built once by the analyzer and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    label_header: String,
    criteria: Vec<String>,
    alternatives: Vec<ScoredAlternative>,
}

impl ResultTable {
    /// Combines a decision table with one score and one rank per alternative.
    pub(crate) fn new(table: &DecisionTable, scores: &[f64], ranks: &[f64]) -> Self {
        let alternatives = table
            .alternatives()
            .iter()
            .zip(scores.iter().zip(ranks))
            .map(|(alt, (score, rank))| ScoredAlternative {
                label: alt.label.clone(),
                values: alt.values.clone(),
                score: *score,
                rank: *rank,
            })
            .collect();

        Self {
            label_header: table.label_header().to_string(),
            criteria: table.criteria().to_vec(),
            alternatives,
        }
    }

    pub fn label_header(&self) -> &str {
        &self.label_header
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Alternatives in input order (not rank order).
    pub fn alternatives(&self) -> &[ScoredAlternative] {
        &self.alternatives
    }

    /// Output header row: label, criteria, then the two derived columns.
    pub fn headers(&self, score_column: &str, rank_column: &str) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.criteria.len() + 3);
        headers.push(self.label_header.clone());
        headers.extend(self.criteria.iter().cloned());
        headers.push(score_column.to_string());
        headers.push(rank_column.to_string());
        headers
    }

    /// Alternatives holding the best (lowest) rank. More than one on a tie.
    pub fn top_ranked(&self) -> Vec<&ScoredAlternative> {
        let best = self
            .alternatives
            .iter()
            .map(|alt| alt.rank)
            .filter(|rank| !rank.is_nan())
            .fold(f64::INFINITY, f64::min);

        self.alternatives
            .iter()
            .filter(|alt| alt.rank == best)
            .collect()
    }

    /// Returns the number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if the table has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}
