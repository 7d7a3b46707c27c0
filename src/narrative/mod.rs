//! Narrative generation: strengths, weaknesses, and the prioritized action
//! plan, derived from category scores and extractor evidence.
//!
//! The thresholds are strictly separated, so no category can ever appear on
//! both sides. Recommendations come only from weaknesses, worst score first,
//! with the weight-table priority order as the deterministic tie-break.

pub mod templates;

use crate::config::NarrativeThresholds;
use crate::core::{best_fact, Category, Polarity, ScoreBreakdown};
use crate::extractors::CategorySignals;

pub use templates::FIRST_REPOSITORY_RECOMMENDATION;

/// Qualitative sections of an assessment, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Narrative {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Categories scoring at or above the strength threshold, best first.
pub fn strength_categories(
    breakdown: &ScoreBreakdown,
    thresholds: &NarrativeThresholds,
) -> Vec<Category> {
    let mut qualifying: Vec<(Category, u32)> = breakdown
        .scores()
        .into_iter()
        .filter(|(_, score)| *score >= thresholds.strength)
        .collect();
    qualifying.sort_by_key(|(category, score)| (std::cmp::Reverse(*score), category.priority_rank()));
    qualifying.into_iter().map(|(category, _)| category).collect()
}

/// Categories scoring below the weakness threshold, worst first.
pub fn weakness_categories(
    breakdown: &ScoreBreakdown,
    thresholds: &NarrativeThresholds,
) -> Vec<Category> {
    let mut qualifying: Vec<(Category, u32)> = breakdown
        .scores()
        .into_iter()
        .filter(|(_, score)| *score < thresholds.weakness)
        .collect();
    qualifying.sort_by_key(|(category, score)| (*score, category.priority_rank()));
    qualifying.into_iter().map(|(category, _)| category).collect()
}

/// Build the narrative sections. `has_repositories` gates the fallback
/// recommendation for completely empty profiles.
pub fn generate(
    breakdown: &ScoreBreakdown,
    signals: &CategorySignals,
    has_repositories: bool,
    thresholds: &NarrativeThresholds,
) -> Narrative {
    let strengths = strength_categories(breakdown, thresholds)
        .into_iter()
        .map(|category| {
            let fact = best_fact(&signals.get(category).evidence, Polarity::Positive);
            templates::strength(category, fact)
        })
        .collect();

    let weak = weakness_categories(breakdown, thresholds);
    let weaknesses = weak
        .iter()
        .map(|&category| {
            let fact = best_fact(&signals.get(category).evidence, Polarity::Negative);
            templates::weakness(category, fact)
        })
        .collect();

    let mut recommendations: Vec<String> =
        weak.iter().map(|&category| templates::recommendation(category)).collect();
    if !has_repositories {
        recommendations.insert(0, FIRST_REPOSITORY_RECOMMENDATION.to_string());
    }

    Narrative {
        strengths,
        weaknesses,
        recommendations,
    }
}
