//! Decision Table - Alternatives scored across numeric criteria.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TopsisError;

/// One row of the decision table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Opaque identifier from the first column.
    pub label: String,
    /// Criterion values in column order.
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// The decision table mapping alternatives x criteria to numeric values.
///
/// Always holds at least two criteria, and every alternative has exactly one
/// value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTable {
    label_header: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionTable {
    /// Creates a builder for constructing a decision table.
    pub fn builder() -> DecisionTableBuilder {
        DecisionTableBuilder::new()
    }

    /// Name of the label column.
    pub fn label_header(&self) -> &str {
        &self.label_header
    }

    /// Criterion column names in order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Alternatives in input order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if the table has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Iterates over the values of one criterion column.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.alternatives
            .iter()
            .filter_map(move |alt| alt.values.get(criterion).copied())
    }
}

/// Builder for constructing DecisionTable instances.
#[derive(Debug, Default)]
pub struct DecisionTableBuilder {
    label_header: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label column name.
    pub fn label_header(mut self, header: impl Into<String>) -> Self {
        self.label_header = header.into();
        self
    }

    /// Sets the criterion column names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds an alternative.
    pub fn alternative(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push(Alternative::new(label, values));
        self
    }

    /// Builds the decision table.
    ///
    /// Fails with a shape error when fewer than two criteria are declared and
    /// with a count mismatch when a row has the wrong number of values.
    pub fn build(self) -> Result<DecisionTable, TopsisError> {
        if self.criteria.len() < 2 {
            return Err(TopsisError::shape(self.criteria.len() + 1));
        }

        for alt in &self.alternatives {
            if alt.values.len() != self.criteria.len() {
                return Err(TopsisError::count_mismatch(
                    format!("values for '{}'", alt.label),
                    self.criteria.len(),
                    alt.values.len(),
                ));
            }
        }

        Ok(DecisionTable {
            label_header: self.label_header,
            criteria: self.criteria,
            alternatives: self.alternatives,
        })
    }
}
