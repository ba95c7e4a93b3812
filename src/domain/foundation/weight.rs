//! Weight value object (positive, finite).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TopsisError;

/// Relative importance of one criterion.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Creates a Weight, returning error unless the value is finite and positive.
    pub fn try_new(value: f64) -> Result<Self, TopsisError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(TopsisError::format(
                "weights",
                format!("weights must be positive numbers, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Parses a single weight token such as `"1.5"`.
    ///
    /// Surrounding whitespace is ignored; an empty token is rejected.
    pub fn parse(token: &str) -> Result<Self, TopsisError> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(TopsisError::format("weights", "empty weight token"));
        }
        let value: f64 = trimmed.parse().map_err(|_| {
            TopsisError::format("weights", format!("'{}' is not a number", trimmed))
        })?;
        Self::try_new(value)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
