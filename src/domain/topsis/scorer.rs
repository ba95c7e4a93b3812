//! Scorer - Weighting, ideal points, separation distances, and closeness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Matrix;
use crate::domain::foundation::{Impact, Weight};

/// Which impact decides max-vs-min when building ideal points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdealRule {
    /// Every criterion uses its own impact.
    #[default]
    PerCriterion,
    /// Every criterion uses the impact of the first criterion.
    ///
    /// Reproduces the reference `topsis` tool, which decides max or min for
    /// every column from the first criterion's impact. Scores differ from
    /// the per-criterion rule only when impacts are mixed.
    FirstCriterion,
}

impl IdealRule {
    /// Returns the impact that governs `criterion`.
    pub fn direction(&self, impacts: &[Impact], criterion: usize) -> Option<Impact> {
        match self {
            IdealRule::PerCriterion => impacts.get(criterion).copied(),
            IdealRule::FirstCriterion => impacts.first().copied(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdealRule::PerCriterion => "per-criterion",
            IdealRule::FirstCriterion => "first-criterion",
        }
    }
}

impl fmt::Display for IdealRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IdealRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-criterion" => Ok(IdealRule::PerCriterion),
            "first-criterion" => Ok(IdealRule::FirstCriterion),
            other => Err(format!(
                "unknown ideal rule '{}', expected 'per-criterion' or 'first-criterion'",
                other
            )),
        }
    }
}

/// Ideal-best and ideal-worst weighted value for each criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Distance-based scoring functions.
pub struct Scorer;

impl Scorer {
    /// Multiplies each normalized column by its weight.
    pub fn weigh(normalized: &Matrix, weights: &[Weight]) -> Matrix {
        normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights)
                    .map(|(value, weight)| value * weight.value())
                    .collect()
            })
            .collect()
    }

    /// Builds the ideal-best and ideal-worst vectors.
    ///
    /// Benefit criteria take the column maximum as best and minimum as worst;
    /// cost criteria the reverse. A NaN anywhere in a column makes both ideal
    /// values for that column NaN.
    pub fn ideal_points(weighted: &Matrix, impacts: &[Impact], rule: IdealRule) -> IdealPoints {
        let criteria = impacts.len();
        let mut best = Vec::with_capacity(criteria);
        let mut worst = Vec::with_capacity(criteria);

        for j in 0..criteria {
            let column = weighted.iter().filter_map(|row| row.get(j).copied());
            let (min, max) = Self::extremes(column);

            match rule.direction(impacts, j) {
                Some(Impact::Cost) => {
                    best.push(min);
                    worst.push(max);
                }
                _ => {
                    best.push(max);
                    worst.push(min);
                }
            }
        }

        IdealPoints { best, worst }
    }

    /// Euclidean distance of every row from an ideal vector.
    pub fn distances(weighted: &Matrix, ideal: &[f64]) -> Vec<f64> {
        weighted
            .iter()
            .map(|row| {
                row.iter()
                    .zip(ideal)
                    .map(|(value, target)| (value - target).powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }

    /// score = distBest / (distBest + distWorst)
    ///
    /// Both distances zero gives NaN, which is returned as-is.
    pub fn closeness(dist_best: &[f64], dist_worst: &[f64]) -> Vec<f64> {
        dist_best
            .iter()
            .zip(dist_worst)
            .map(|(best, worst)| best / (best + worst))
            .collect()
    }

    /// Runs weighting, ideal points, distances, and closeness in sequence.
    pub fn score(
        normalized: &Matrix,
        weights: &[Weight],
        impacts: &[Impact],
        rule: IdealRule,
    ) -> Vec<f64> {
        let weighted = Self::weigh(normalized, weights);
        let ideal = Self::ideal_points(&weighted, impacts, rule);
        let dist_best = Self::distances(&weighted, &ideal.best);
        let dist_worst = Self::distances(&weighted, &ideal.worst);
        Self::closeness(&dist_best, &dist_worst)
    }

    /// NaN-propagating (min, max). An empty column yields (NaN, NaN).
    fn extremes(values: impl Iterator<Item = f64>) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;

        for value in values {
            if value.is_nan() {
                return (f64::NAN, f64::NAN);
            }
            min = min.min(value);
            max = max.max(value);
            seen = true;
        }

        if seen {
            (min, max)
        } else {
            (f64::NAN, f64::NAN)
        }
    }
}
