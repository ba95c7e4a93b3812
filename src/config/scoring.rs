//! Scoring configuration

use serde::Deserialize;

use crate::domain::topsis::IdealRule;

/// Scoring configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Which impact decides max-vs-min for the ideal points
    #[serde(default)]
    pub ideal_rule: IdealRule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_defaults_to_per_criterion() {
        assert_eq!(ScoringConfig::default().ideal_rule, IdealRule::PerCriterion);
    }
}
