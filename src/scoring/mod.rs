//! Score aggregation: six category scores into one overall score.

use crate::config::CategoryWeights;
use crate::core::{Category, ScoreBreakdown};

/// Weighted mean of the six category scores, rounded and re-clamped to
/// [0, 100] to guard against rounding overshoot. The weight table is
/// validated elsewhere; no category can be silently dropped because the
/// iteration is over the closed [`Category::ALL`] set.
pub fn aggregate(breakdown: &ScoreBreakdown, weights: &CategoryWeights) -> u32 {
    let weighted: f64 = Category::ALL
        .iter()
        .map(|&category| weights.weight(category) * breakdown.get(category) as f64)
        .sum();
    weighted.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_policy;

    fn uniform(score: u32) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();
        for category in Category::ALL {
            breakdown.set(category, score);
        }
        breakdown
    }

    #[test]
    fn equal_inputs_are_invariant_to_the_weights() {
        // Weighted average of equal inputs must equal the input exactly.
        let weights = &default_policy().weights;
        assert_eq!(aggregate(&uniform(70), weights), 70);
        assert_eq!(aggregate(&uniform(0), weights), 0);
        assert_eq!(aggregate(&uniform(100), weights), 100);
    }

    #[test]
    fn overall_tracks_the_heaviest_category() {
        let weights = &default_policy().weights;
        let mut impact_only = ScoreBreakdown::default();
        impact_only.set(Category::ProjectImpact, 100);
        let mut depth_only = ScoreBreakdown::default();
        depth_only.set(Category::TechnicalDepth, 100);
        assert!(aggregate(&impact_only, weights) > aggregate(&depth_only, weights));
    }

    #[test]
    fn overall_stays_in_range_for_max_inputs() {
        let weights = &default_policy().weights;
        assert!(aggregate(&uniform(100), weights) <= 100);
    }
}
