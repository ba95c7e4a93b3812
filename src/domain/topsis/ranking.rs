//! Ranking - Descending rank with averaged ties.

use std::cmp::Ordering;

/// Ranks scores in descending order. Rank 1 goes to the highest score.
///
/// # Algorithm
/// Stable descending sort of the non-NaN scores, then every run of equal
/// scores receives the mean of the 1-based positions it occupies.
///
/// # Edge Cases
/// - Ties: `[0.9, 0.5, 0.5]` ranks as `[1.0, 2.5, 2.5]`
/// - NaN score: rank is NaN and the row occupies no position
/// - Empty input: returns an empty Vec
pub fn rank_descending(scores: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..scores.len()).filter(|&i| !scores[i].is_nan()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![f64::NAN; scores.len()];
    let mut start = 0;

    while start < order.len() {
        let value = scores[order[start]];
        let end = start
            + order[start..]
                .iter()
                .take_while(|&&i| scores[i] == value)
                .count();

        // Positions start+1 ..= end share their mean.
        let rank = (start + 1 + end) as f64 / 2.0;
        for &i in &order[start..end] {
            ranks[i] = rank;
        }
        start = end;
    }

    ranks
}
