//! Normalizer - Vector normalization of criterion columns.

use tracing::warn;

use super::DecisionTable;

/// Row-major matrix of criterion values (alternatives x criteria).
pub type Matrix = Vec<Vec<f64>>;

/// Column-wise vector normalization.
pub struct Normalizer;

impl Normalizer {
    /// Divides every value by the Euclidean norm of its column.
    ///
    /// # Algorithm
    /// normalized[i][j] = raw[i][j] / sqrt(Σ_i raw[i][j]²)
    ///
    /// # Edge Cases
    /// - All-zero column: norm is zero, every value in the column becomes NaN
    /// - Empty table: returns an empty matrix
    pub fn normalize(table: &DecisionTable) -> Matrix {
        let norms = Self::column_norms(table);

        for (criterion, norm) in table.criteria().iter().zip(&norms) {
            if *norm == 0.0 && !table.is_empty() {
                warn!(
                    criterion = %criterion,
                    "Criterion column is all zeros; its normalized values are undefined"
                );
            }
        }

        table
            .alternatives()
            .iter()
            .map(|alt| {
                alt.values
                    .iter()
                    .zip(&norms)
                    .map(|(value, norm)| value / norm)
                    .collect()
            })
            .collect()
    }

    /// Euclidean norm of each criterion column.
    pub fn column_norms(table: &DecisionTable) -> Vec<f64> {
        (0..table.criterion_count())
            .map(|j| table.column(j).map(|v| v * v).sum::<f64>().sqrt())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn table(rows: &[(&str, [f64; 2])]) -> DecisionTable {
        rows.iter()
            .fold(
                DecisionTable::builder().criteria(vec!["C1", "C2"]),
                |builder, (label, values)| builder.alternative(*label, values.to_vec()),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn normalizes_each_column_to_unit_length() {
        let t = table(&[("A", [3.0, 1.0]), ("B", [4.0, 1.0])]);
        let normalized = Normalizer::normalize(&t);

        assert!((normalized[0][0] - 0.6).abs() < EPS);
        assert!((normalized[1][0] - 0.8).abs() < EPS);

        for j in 0..2 {
            let length: f64 = normalized.iter().map(|row| row[j] * row[j]).sum();
            assert!((length - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn column_norms_are_euclidean() {
        let t = table(&[("A", [3.0, 0.0]), ("B", [4.0, 2.0])]);
        assert_eq!(Normalizer::column_norms(&t), vec![5.0, 2.0]);
    }

    #[test]
    fn scaling_a_column_leaves_it_unchanged() {
        let base = table(&[("A", [1.0, 7.0]), ("B", [4.0, 3.0]), ("C", [3.0, 4.0])]);
        let scaled = table(&[("A", [10.0, 7.0]), ("B", [40.0, 3.0]), ("C", [30.0, 4.0])]);

        let a = Normalizer::normalize(&base);
        let b = Normalizer::normalize(&scaled);
        for (row_a, row_b) in a.iter().zip(&b) {
            assert!((row_a[0] - row_b[0]).abs() < EPS);
            assert!((row_a[1] - row_b[1]).abs() < EPS);
        }
    }

    #[test]
    fn all_zero_column_propagates_nan() {
        let t = table(&[("A", [0.0, 1.0]), ("B", [0.0, 2.0])]);
        let normalized = Normalizer::normalize(&t);

        assert!(normalized[0][0].is_nan());
        assert!(normalized[1][0].is_nan());
        assert!(normalized[0][1].is_finite());
    }

    #[test]
    fn empty_table_normalizes_to_empty_matrix() {
        let t = table(&[]);
        assert!(Normalizer::normalize(&t).is_empty());
    }
}
