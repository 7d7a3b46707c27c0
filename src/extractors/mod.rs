//! Signal extractors: one pure function per evaluation category.
//!
//! Each extractor maps the normalized profile to a bounded score plus the
//! evidence behind it. Extractors are independent and deterministic - no
//! wall clock, no randomness, no I/O - so they run in parallel purely as a
//! throughput optimization; ordering never affects the result.

pub mod activity;
pub mod code_structure;
pub mod depth;
pub mod documentation;
pub mod impact;
pub mod organization;

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::config::ScoringPolicy;
use crate::core::{Category, ProfileRecord, ScoreBreakdown, Signal};

/// The six signals keyed by category, all present by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySignals {
    pub documentation: Signal,
    pub code_structure: Signal,
    pub activity_consistency: Signal,
    pub repository_organization: Signal,
    pub project_impact: Signal,
    pub technical_depth: Signal,
}

impl CategorySignals {
    pub fn get(&self, category: Category) -> &Signal {
        match category {
            Category::Documentation => &self.documentation,
            Category::CodeStructure => &self.code_structure,
            Category::ActivityConsistency => &self.activity_consistency,
            Category::RepositoryOrganization => &self.repository_organization,
            Category::ProjectImpact => &self.project_impact,
            Category::TechnicalDepth => &self.technical_depth,
        }
    }

    fn set(&mut self, category: Category, signal: Signal) {
        match category {
            Category::Documentation => self.documentation = signal,
            Category::CodeStructure => self.code_structure = signal,
            Category::ActivityConsistency => self.activity_consistency = signal,
            Category::RepositoryOrganization => self.repository_organization = signal,
            Category::ProjectImpact => self.project_impact = signal,
            Category::TechnicalDepth => self.technical_depth = signal,
        }
    }

    /// Project just the scores, for aggregation and output.
    pub fn breakdown(&self) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();
        for category in Category::ALL {
            breakdown.set(category, self.get(category).score);
        }
        breakdown
    }
}

/// Run one extractor. Exhaustive dispatch: a new category cannot compile
/// without an extractor.
pub fn extract(
    category: Category,
    profile: &ProfileRecord,
    analysis_time: DateTime<Utc>,
    policy: &ScoringPolicy,
) -> Signal {
    match category {
        Category::Documentation => documentation::extract(profile, policy),
        Category::CodeStructure => code_structure::extract(profile, policy),
        Category::ActivityConsistency => activity::extract(profile, analysis_time, policy),
        Category::RepositoryOrganization => organization::extract(profile, policy),
        Category::ProjectImpact => impact::extract(profile, policy),
        Category::TechnicalDepth => depth::extract(profile, policy),
    }
}

/// Run all six extractors in parallel over the same record.
pub fn extract_all(
    profile: &ProfileRecord,
    analysis_time: DateTime<Utc>,
    policy: &ScoringPolicy,
) -> CategorySignals {
    let pairs: Vec<(Category, Signal)> = Category::ALL
        .par_iter()
        .map(|&category| (category, extract(category, profile, analysis_time, policy)))
        .collect();

    let mut signals = CategorySignals::default();
    for (category, signal) in pairs {
        signals.set(category, signal);
    }
    signals
}

/// Round a [0, 1] fraction onto the 0-100 score scale, clamped against
/// rounding overshoot.
pub(crate) fn ratio_score(fraction: f64) -> u32 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u32
}
