//! Scoring policy: the single source of truth for weights, thresholds, and
//! transform constants.
//!
//! Everything tunable lives here so a rebalancing is a one-place change and
//! the invariants (weights sum to 1.0, thresholds do not overlap) stay
//! testable. Exact values are policy choices; the shapes are contract:
//! weights non-negative and summing to 1, weakness threshold strictly below
//! strength threshold, saturation constants positive.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::errors::{GitworthError, Result};

/// Tolerance when auditing the weight-table sum.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Complete scoring policy consumed by extractors, aggregator, and the
/// narrative generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPolicy {
    #[serde(default)]
    pub weights: CategoryWeights,
    #[serde(default)]
    pub thresholds: NarrativeThresholds,
    #[serde(default)]
    pub activity: ActivityPolicy,
    #[serde(default)]
    pub impact: ImpactPolicy,
    #[serde(default)]
    pub depth: DepthPolicy,
    #[serde(default)]
    pub organization: OrganizationPolicy,
    /// Cap on negative facts recorded per category, bounding narrative length.
    #[serde(default = "default_max_facts_per_category")]
    pub max_facts_per_category: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: CategoryWeights::default(),
            thresholds: NarrativeThresholds::default(),
            activity: ActivityPolicy::default(),
            impact: ImpactPolicy::default(),
            depth: DepthPolicy::default(),
            organization: OrganizationPolicy::default(),
            max_facts_per_category: default_max_facts_per_category(),
        }
    }
}

impl ScoringPolicy {
    /// Validate every sub-policy. A failure here is a configuration error,
    /// fatal at startup, never a per-request condition.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.thresholds.validate()?;
        self.activity.validate()?;
        self.impact.validate()?;
        self.depth.validate()?;
        self.organization.validate()?;
        if self.max_facts_per_category == 0 {
            return Err(GitworthError::configuration(
                "max_facts_per_category must be at least 1",
            ));
        }
        Ok(())
    }
}

/// The process-wide default policy. Its validity is enforced by tests, so
/// callers of [`crate::assess`] never see a configuration error from it.
pub fn default_policy() -> &'static ScoringPolicy {
    static POLICY: Lazy<ScoringPolicy> = Lazy::new(ScoringPolicy::default);
    &POLICY
}

/// Fixed weight per category, summing to 1.0.
///
/// Rationale is recruiter relevance: visible impact and sustained activity
/// weigh most, engineering hygiene next, organization and breadth least.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWeights {
    #[serde(default = "default_project_impact_weight")]
    pub project_impact: f64,
    #[serde(default = "default_activity_consistency_weight")]
    pub activity_consistency: f64,
    #[serde(default = "default_code_structure_weight")]
    pub code_structure: f64,
    #[serde(default = "default_documentation_weight")]
    pub documentation: f64,
    #[serde(default = "default_repository_organization_weight")]
    pub repository_organization: f64,
    #[serde(default = "default_technical_depth_weight")]
    pub technical_depth: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            project_impact: default_project_impact_weight(),
            activity_consistency: default_activity_consistency_weight(),
            code_structure: default_code_structure_weight(),
            documentation: default_documentation_weight(),
            repository_organization: default_repository_organization_weight(),
            technical_depth: default_technical_depth_weight(),
        }
    }
}

impl CategoryWeights {
    /// Weight for one category. Exhaustive match: a new category cannot be
    /// added without deciding its weight.
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Documentation => self.documentation,
            Category::CodeStructure => self.code_structure,
            Category::ActivityConsistency => self.activity_consistency,
            Category::RepositoryOrganization => self.repository_organization,
            Category::ProjectImpact => self.project_impact,
            Category::TechnicalDepth => self.technical_depth,
        }
    }

    pub fn sum(&self) -> f64 {
        Category::ALL.iter().map(|&c| self.weight(c)).sum()
    }

    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            let w = self.weight(category);
            if !(0.0..=1.0).contains(&w) {
                return Err(GitworthError::configuration(format!(
                    "{category} weight {w} must be between 0.0 and 1.0"
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(GitworthError::configuration(format!(
                "category weights must sum to 1.0, but sum to {sum:.6}"
            )));
        }
        Ok(())
    }
}

pub fn default_project_impact_weight() -> f64 {
    0.25 // visible adoption is what recruiters check first
}
pub fn default_activity_consistency_weight() -> f64 {
    0.20 // sustained recent work matters more than volume
}
pub fn default_code_structure_weight() -> f64 {
    0.18 // tests and licenses as engineering hygiene proxy
}
pub fn default_documentation_weight() -> f64 {
    0.15
}
pub fn default_repository_organization_weight() -> f64 {
    0.12
}
pub fn default_technical_depth_weight() -> f64 {
    0.10 // breadth rewarded least; depth shows up in the other factors
}

/// Score thresholds gating narrative sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeThresholds {
    /// A category at or above this score contributes a strength.
    #[serde(default = "default_strength_threshold")]
    pub strength: u32,
    /// A category strictly below this score contributes a weakness.
    #[serde(default = "default_weakness_threshold")]
    pub weakness: u32,
}

impl Default for NarrativeThresholds {
    fn default() -> Self {
        Self {
            strength: default_strength_threshold(),
            weakness: default_weakness_threshold(),
        }
    }
}

impl NarrativeThresholds {
    /// Strict separation guarantees no category is ever both a strength and
    /// a weakness.
    pub fn validate(&self) -> Result<()> {
        if self.weakness >= self.strength {
            return Err(GitworthError::configuration(format!(
                "weakness threshold {} must be strictly below strength threshold {}",
                self.weakness, self.strength
            )));
        }
        if self.strength > 100 {
            return Err(GitworthError::configuration(format!(
                "strength threshold {} must be at most 100",
                self.strength
            )));
        }
        Ok(())
    }
}

pub fn default_strength_threshold() -> u32 {
    75
}
pub fn default_weakness_threshold() -> u32 {
    50
}

/// Recency buckets for activity scoring. A repository contributes the weight
/// of the bucket its last commit falls into, relative to analysis time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPolicy {
    #[serde(default = "default_fresh_days")]
    pub fresh_days: i64,
    #[serde(default = "default_recent_days")]
    pub recent_days: i64,
    #[serde(default = "default_stale_days")]
    pub stale_days: i64,
    #[serde(default = "default_fresh_weight")]
    pub fresh_weight: f64,
    #[serde(default = "default_recent_weight")]
    pub recent_weight: f64,
    #[serde(default = "default_stale_weight")]
    pub stale_weight: f64,
}

impl Default for ActivityPolicy {
    fn default() -> Self {
        Self {
            fresh_days: default_fresh_days(),
            recent_days: default_recent_days(),
            stale_days: default_stale_days(),
            fresh_weight: default_fresh_weight(),
            recent_weight: default_recent_weight(),
            stale_weight: default_stale_weight(),
        }
    }
}

impl ActivityPolicy {
    /// Decayed contribution for a commit `days_ago` old. Total on the most
    /// recent bucket, zero beyond the stale horizon.
    pub fn recency_weight(&self, days_ago: i64) -> f64 {
        if days_ago <= self.fresh_days {
            self.fresh_weight
        } else if days_ago <= self.recent_days {
            self.recent_weight
        } else if days_ago <= self.stale_days {
            self.stale_weight
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0 < self.fresh_days && self.fresh_days < self.recent_days
            && self.recent_days < self.stale_days)
        {
            return Err(GitworthError::configuration(
                "activity buckets must satisfy 0 < fresh < recent < stale",
            ));
        }
        let weights = [self.fresh_weight, self.recent_weight, self.stale_weight];
        if weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(GitworthError::configuration(
                "activity weights must be between 0.0 and 1.0",
            ));
        }
        if !(self.fresh_weight >= self.recent_weight && self.recent_weight >= self.stale_weight) {
            return Err(GitworthError::configuration(
                "activity weights must decay with age",
            ));
        }
        Ok(())
    }
}

pub fn default_fresh_days() -> i64 {
    30
}
pub fn default_recent_days() -> i64 {
    90
}
pub fn default_stale_days() -> i64 {
    365
}
pub fn default_fresh_weight() -> f64 {
    1.0
}
pub fn default_recent_weight() -> f64 {
    0.6
}
pub fn default_stale_weight() -> f64 {
    0.3
}

/// Constants for the saturating project-impact transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactPolicy {
    /// Forks count this many times a star when computing engagement.
    #[serde(default = "default_fork_multiplier")]
    pub fork_multiplier: f64,
    /// Offset in log10 space; larger values push saturation further out.
    #[serde(default = "default_saturation_offset")]
    pub saturation_offset: f64,
}

impl Default for ImpactPolicy {
    fn default() -> Self {
        Self {
            fork_multiplier: default_fork_multiplier(),
            saturation_offset: default_saturation_offset(),
        }
    }
}

impl ImpactPolicy {
    pub fn validate(&self) -> Result<()> {
        if self.fork_multiplier <= 0.0 || self.saturation_offset <= 0.0 {
            return Err(GitworthError::configuration(
                "impact constants must be positive",
            ));
        }
        Ok(())
    }
}

pub fn default_fork_multiplier() -> f64 {
    2.0 // a fork implies someone built on the work, worth more than a star
}
pub fn default_saturation_offset() -> f64 {
    1.5
}

/// Constants for the technical-depth extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthPolicy {
    /// Minimum share of total usage weight before a language counts.
    /// Filters one-line-per-language noise.
    #[serde(default = "default_significance_share")]
    pub significance_share: f64,
    /// Language count at which the breadth component saturates.
    #[serde(default = "default_count_saturation")]
    pub count_saturation: usize,
    #[serde(default = "default_count_weight")]
    pub count_weight: f64,
    #[serde(default = "default_entropy_weight")]
    pub entropy_weight: f64,
}

impl Default for DepthPolicy {
    fn default() -> Self {
        Self {
            significance_share: default_significance_share(),
            count_saturation: default_count_saturation(),
            count_weight: default_count_weight(),
            entropy_weight: default_entropy_weight(),
        }
    }
}

impl DepthPolicy {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.significance_share) {
            return Err(GitworthError::configuration(
                "significance_share must be in [0.0, 1.0)",
            ));
        }
        if self.count_saturation == 0 {
            return Err(GitworthError::configuration(
                "count_saturation must be at least 1",
            ));
        }
        if (self.count_weight + self.entropy_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(GitworthError::configuration(
                "depth component weights must sum to 1.0",
            ));
        }
        Ok(())
    }
}

pub fn default_significance_share() -> f64 {
    0.05
}
pub fn default_count_saturation() -> usize {
    6
}
pub fn default_count_weight() -> f64 {
    0.6
}
pub fn default_entropy_weight() -> f64 {
    0.4
}

/// Component blend for repository organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationPolicy {
    #[serde(default = "default_described_weight")]
    pub described_weight: f64,
    #[serde(default = "default_named_weight")]
    pub named_weight: f64,
    #[serde(default = "default_original_weight")]
    pub original_weight: f64,
}

impl Default for OrganizationPolicy {
    fn default() -> Self {
        Self {
            described_weight: default_described_weight(),
            named_weight: default_named_weight(),
            original_weight: default_original_weight(),
        }
    }
}

impl OrganizationPolicy {
    pub fn validate(&self) -> Result<()> {
        let sum = self.described_weight + self.named_weight + self.original_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(GitworthError::configuration(format!(
                "organization component weights must sum to 1.0, but sum to {sum:.6}"
            )));
        }
        Ok(())
    }
}

pub fn default_described_weight() -> f64 {
    0.4
}
pub fn default_named_weight() -> f64 {
    0.3
}
pub fn default_original_weight() -> f64 {
    0.3
}

pub fn default_max_facts_per_category() -> usize {
    5
}
