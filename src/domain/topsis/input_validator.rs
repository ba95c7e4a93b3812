//! Input Validator - Shape, type, count, and format checks on raw input.

use tracing::debug;

use super::{DecisionTable, RawTable};
use crate::domain::foundation::{Impact, TopsisError, Weight};

/// A table together with one weight and one impact per criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionProblem {
    table: DecisionTable,
    weights: Vec<Weight>,
    impacts: Vec<Impact>,
}

impl DecisionProblem {
    /// Creates a decision problem, checking weight and impact counts.
    pub fn new(
        table: DecisionTable,
        weights: Vec<Weight>,
        impacts: Vec<Impact>,
    ) -> Result<Self, TopsisError> {
        let expected = table.criterion_count();
        if weights.len() != expected {
            return Err(TopsisError::count_mismatch("weights", expected, weights.len()));
        }
        if impacts.len() != expected {
            return Err(TopsisError::count_mismatch("impacts", expected, impacts.len()));
        }
        Ok(Self {
            table,
            weights,
            impacts,
        })
    }

    pub fn table(&self) -> &DecisionTable {
        &self.table
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn impacts(&self) -> &[Impact] {
        &self.impacts
    }
}

/// Guard logic that turns raw input into a [`DecisionProblem`].
pub struct InputValidator;

impl InputValidator {
    /// Validates a raw table against comma-separated weights and impacts.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. Shape: at least three columns
    /// 2. Type: every criterion cell numeric
    /// 3. Weight format
    /// 4. Impact format
    /// 5. Weight and impact counts
    pub fn validate(
        raw: &RawTable,
        weights: &str,
        impacts: &str,
    ) -> Result<DecisionProblem, TopsisError> {
        let table = Self::check_table(raw)?;
        let weights = Self::parse_weights(weights)?;
        let impacts = Self::parse_impacts(impacts)?;

        debug!(
            alternatives = table.alternative_count(),
            criteria = table.criterion_count(),
            weights = weights.len(),
            impacts = impacts.len(),
            "Validated decision input"
        );

        DecisionProblem::new(table, weights, impacts)
    }

    /// Checks shape and cell types, producing the numeric table.
    pub fn check_table(raw: &RawTable) -> Result<DecisionTable, TopsisError> {
        if raw.column_count() < 3 {
            return Err(TopsisError::shape(raw.column_count()));
        }

        let headers = raw.headers();
        let mut builder = DecisionTable::builder()
            .label_header(headers[0].clone())
            .criteria(headers[1..].to_vec());

        for row_index in 0..raw.row_count() {
            let mut values = Vec::with_capacity(raw.column_count() - 1);
            for (column_index, header) in headers.iter().enumerate().skip(1) {
                let cell = raw.cell(row_index, column_index);
                let value = cell.as_number().ok_or_else(|| {
                    TopsisError::non_numeric(header.clone(), row_index + 1, cell.render())
                })?;
                values.push(value);
            }
            builder = builder.alternative(raw.cell(row_index, 0).render(), values);
        }

        builder.build()
    }

    /// Splits and parses comma-separated weights such as `"1,1,2"`.
    pub fn parse_weights(text: &str) -> Result<Vec<Weight>, TopsisError> {
        text.split(',').map(Weight::parse).collect()
    }

    /// Splits and parses comma-separated impacts such as `"+,-,+"`.
    pub fn parse_impacts(text: &str) -> Result<Vec<Impact>, TopsisError> {
        text.split(',').map(Impact::try_from_symbol).collect()
    }
}
