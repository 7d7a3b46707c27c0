//! The closed set of evaluation categories.
//!
//! Every profile is scored on exactly these six dimensions. The set is a
//! compatibility contract with downstream consumers: adding, renaming, or
//! reordering a category is a breaking schema change, which is why this is
//! an enum and not an open string key.

use serde::{Deserialize, Serialize};

/// One of the six fixed evaluation dimensions.
///
/// Variant order matches the wire contract of `ScoreBreakdown`; narrative
/// tie-breaks use [`Category::priority_rank`] instead, which follows the
/// weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Documentation,
    CodeStructure,
    ActivityConsistency,
    RepositoryOrganization,
    ProjectImpact,
    TechnicalDepth,
}

impl Category {
    /// All six categories in wire-contract order.
    pub const ALL: [Category; 6] = [
        Category::Documentation,
        Category::CodeStructure,
        Category::ActivityConsistency,
        Category::RepositoryOrganization,
        Category::ProjectImpact,
        Category::TechnicalDepth,
    ];

    /// Rank in weight-table order; lower ranks win deterministic tie-breaks
    /// when two categories carry the same score.
    pub fn priority_rank(self) -> usize {
        match self {
            Category::ProjectImpact => 0,
            Category::ActivityConsistency => 1,
            Category::CodeStructure => 2,
            Category::Documentation => 3,
            Category::RepositoryOrganization => 4,
            Category::TechnicalDepth => 5,
        }
    }

    /// Human-readable label used in narrative statements.
    pub fn label(self) -> &'static str {
        match self {
            Category::Documentation => "Documentation",
            Category::CodeStructure => "Code structure",
            Category::ActivityConsistency => "Activity consistency",
            Category::RepositoryOrganization => "Repository organization",
            Category::ProjectImpact => "Project impact",
            Category::TechnicalDepth => "Technical depth",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category scores on the 0-100 scale.
///
/// A struct with one field per category makes "all six present exactly once"
/// a type-level invariant rather than a runtime check. Field names are the
/// serialized contract (`score_breakdown` in the output JSON).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub documentation: u32,
    pub code_structure: u32,
    pub activity_consistency: u32,
    pub repository_organization: u32,
    pub project_impact: u32,
    pub technical_depth: u32,
}

impl ScoreBreakdown {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Documentation => self.documentation,
            Category::CodeStructure => self.code_structure,
            Category::ActivityConsistency => self.activity_consistency,
            Category::RepositoryOrganization => self.repository_organization,
            Category::ProjectImpact => self.project_impact,
            Category::TechnicalDepth => self.technical_depth,
        }
    }

    pub fn set(&mut self, category: Category, score: u32) {
        match category {
            Category::Documentation => self.documentation = score,
            Category::CodeStructure => self.code_structure = score,
            Category::ActivityConsistency => self.activity_consistency = score,
            Category::RepositoryOrganization => self.repository_organization = score,
            Category::ProjectImpact => self.project_impact = score,
            Category::TechnicalDepth => self.technical_depth = score,
        }
    }

    /// All (category, score) pairs in wire-contract order.
    pub fn scores(&self) -> [(Category, u32); 6] {
        Category::ALL.map(|c| (c, self.get(c)))
    }

    /// True when every category sits on the [0, 100] scale.
    pub fn in_range(&self) -> bool {
        self.scores().iter().all(|(_, s)| *s <= 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_each_variant_once() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            assert!(seen.insert(category), "{category} listed twice");
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn priority_ranks_are_a_permutation() {
        let mut ranks: Vec<usize> = Category::ALL.iter().map(|c| c.priority_rank()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn breakdown_get_set_round_trip() {
        let mut breakdown = ScoreBreakdown::default();
        for (i, category) in Category::ALL.into_iter().enumerate() {
            breakdown.set(category, i as u32 * 10);
        }
        for (i, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(breakdown.get(category), i as u32 * 10);
        }
    }

    #[test]
    fn breakdown_serializes_contract_field_names() {
        let json = serde_json::to_value(ScoreBreakdown::default()).unwrap();
        for field in [
            "documentation",
            "code_structure",
            "activity_consistency",
            "repository_organization",
            "project_impact",
            "technical_depth",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
