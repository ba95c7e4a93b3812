//! TOPSIS Module - Pure domain services for multi-criteria ranking.
//!
//! # Components
//!
//! - `RawTable` - Untyped cells as loaded from a file
//! - `InputValidator` - Shape, type, format, and count checks
//! - `Normalizer` - Column-wise vector normalization
//! - `Scorer` - Weighting, ideal points, distances, closeness
//! - `rank_descending` - Averaged-tie ranking of scores
//! - `TopsisAnalyzer` - Runs the above in a single forward pass
//!
//! All functions are pure and stateless. Validation failures abort the run
//! before any normalization happens.

mod decision_table;
mod input_validator;
mod normalizer;
mod ranking;
mod raw_table;
mod result_table;
mod scorer;

pub use decision_table::{Alternative, DecisionTable, DecisionTableBuilder};
pub use input_validator::{DecisionProblem, InputValidator};
pub use normalizer::{Matrix, Normalizer};
pub use ranking::rank_descending;
pub use raw_table::{format_number, RawCell, RawTable};
pub use result_table::{ResultTable, ScoredAlternative};
pub use scorer::{IdealPoints, IdealRule, Scorer};

use tracing::debug;

use crate::domain::foundation::TopsisError;

/// TOPSIS ranking over a validated decision problem.
pub struct TopsisAnalyzer;

impl TopsisAnalyzer {
    /// Normalizes, scores, and ranks every alternative.
    pub fn rank(problem: &DecisionProblem, rule: IdealRule) -> ResultTable {
        let table = problem.table();
        let normalized = Normalizer::normalize(table);
        let scores = Scorer::score(&normalized, problem.weights(), problem.impacts(), rule);
        let ranks = rank_descending(&scores);

        debug!(
            alternatives = table.alternative_count(),
            criteria = table.criterion_count(),
            ideal_rule = %rule,
            undefined_scores = scores.iter().filter(|s| s.is_nan()).count(),
            "Computed TOPSIS scores"
        );

        ResultTable::new(table, &scores, &ranks)
    }
}

/// Validates raw input and ranks it.
///
/// `weights` and `impacts` are comma-separated text, e.g. `"1,1,2"` and
/// `"+,-,+"`.
pub fn compute_topsis(
    raw: &RawTable,
    weights: &str,
    impacts: &str,
    rule: IdealRule,
) -> Result<ResultTable, TopsisError> {
    let problem = InputValidator::validate(raw, weights, impacts)?;
    Ok(TopsisAnalyzer::rank(&problem, rule))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn fund_table() -> RawTable {
        let row = |label: &str, values: [f64; 4]| {
            let mut cells = vec![RawCell::Text(label.to_string())];
            cells.extend(values.iter().map(|v| RawCell::Number(*v)));
            cells
        };
        RawTable::new(
            vec!["Fund".into(), "P1".into(), "P2".into(), "P3".into(), "P4".into()],
            vec![
                row("A", [1.0, 7.0, 9.0, 1.0]),
                row("B", [4.0, 3.0, 8.0, 2.0]),
                row("C", [3.0, 4.0, 6.0, 4.0]),
                row("D", [5.0, 2.0, 7.0, 3.0]),
            ],
        )
    }

    fn scores(result: &ResultTable) -> Vec<f64> {
        result.alternatives().iter().map(|a| a.score).collect()
    }

    fn ranks(result: &ResultTable) -> Vec<f64> {
        result.alternatives().iter().map(|a| a.rank).collect()
    }

    #[test]
    fn per_criterion_scores_mixed_impacts() {
        let result =
            compute_topsis(&fund_table(), "1,1,1,1", "+,+,-,+", IdealRule::PerCriterion).unwrap();

        let expected = [
            0.5880032698601524,
            0.5625857743303787,
            0.3913406608107307,
            0.4675731398227812,
        ];
        for (actual, expected) in scores(&result).iter().zip(expected) {
            assert!((actual - expected).abs() < EPS, "{} != {}", actual, expected);
        }
        assert_eq!(ranks(&result), vec![1.0, 2.0, 4.0, 3.0]);
    }

    #[test]
    fn first_criterion_rule_reproduces_reference_scores() {
        let result =
            compute_topsis(&fund_table(), "1,1,1,1", "+,+,-,+", IdealRule::FirstCriterion)
                .unwrap();

        let expected = [
            0.5664096979572213,
            0.5513299723344828,
            0.4240535301920859,
            0.4755786118110876,
        ];
        for (actual, expected) in scores(&result).iter().zip(expected) {
            assert!((actual - expected).abs() < EPS, "{} != {}", actual, expected);
        }
    }

    #[test]
    fn rules_diverge_on_leading_cost_impact() {
        let per = compute_topsis(&fund_table(), "1,1,1,1", "-,+,+,-", IdealRule::PerCriterion)
            .unwrap();
        let first = compute_topsis(&fund_table(), "1,1,1,1", "-,+,+,-", IdealRule::FirstCriterion)
            .unwrap();

        // A sits on the ideal-best point under per-criterion impacts.
        assert_eq!(per.alternatives()[0].score, 0.0);
        assert_eq!(ranks(&per), vec![4.0, 3.0, 2.0, 1.0]);

        assert!((first.alternatives()[0].score - 0.4335903020427788).abs() < EPS);
        assert_eq!(ranks(&first), vec![4.0, 3.0, 1.0, 2.0]);
    }

    #[test]
    fn rerun_is_identical() {
        let a = compute_topsis(&fund_table(), "1,1,1,1", "+,+,-,+", IdealRule::PerCriterion)
            .unwrap();
        let b = compute_topsis(&fund_table(), "1,1,1,1", "+,+,-,+", IdealRule::PerCriterion)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn all_zero_column_yields_nan_scores() {
        let raw = RawTable::new(
            vec!["Name".into(), "C1".into(), "C2".into()],
            vec![
                vec![RawCell::Text("A".into()), RawCell::Number(0.0), RawCell::Number(1.0)],
                vec![RawCell::Text("B".into()), RawCell::Number(0.0), RawCell::Number(2.0)],
            ],
        );
        let result = compute_topsis(&raw, "1,1", "+,+", IdealRule::PerCriterion).unwrap();

        assert!(result.alternatives().iter().all(|a| a.score.is_nan()));
        assert!(result.alternatives().iter().all(|a| a.rank.is_nan()));
    }

    #[test]
    fn single_row_scores_nan() {
        let raw = RawTable::new(
            vec!["Name".into(), "C1".into(), "C2".into()],
            vec![vec![RawCell::Text("A".into()), RawCell::Number(3.0), RawCell::Number(1.0)]],
        );
        let result = compute_topsis(&raw, "1,1", "+,-", IdealRule::PerCriterion).unwrap();
        assert!(result.alternatives()[0].score.is_nan());
    }

    #[test]
    fn validation_failure_aborts() {
        let err = compute_topsis(&fund_table(), "1,1,1", "+,+,-,+", IdealRule::PerCriterion)
            .unwrap_err();
        assert_eq!(err, TopsisError::count_mismatch("weights", 4, 3));
    }
}
