//! Per-category statement templates.
//!
//! Each category has a fixed strength phrasing, weakness phrasing, and an
//! imperative recommendation. Exhaustive matches keep a new category from
//! shipping without narrative coverage.

use crate::core::{Category, Evidence};

/// Fallback recommendation for profiles with no repositories at all.
pub const FIRST_REPOSITORY_RECOMMENDATION: &str =
    "Create and publish your first public repository to start building a visible track record";

fn with_fact(base: &str, fact: Option<&Evidence>) -> String {
    match fact {
        Some(evidence) => format!("{base} ({})", evidence.fact),
        None => base.to_string(),
    }
}

pub fn strength(category: Category, fact: Option<&Evidence>) -> String {
    let base = match category {
        Category::Documentation => "Repositories are consistently documented",
        Category::CodeStructure => "Projects ship with tests and clear licensing",
        Category::ActivityConsistency => "Profile shows steady, recent activity",
        Category::RepositoryOrganization => "Portfolio is well organized and curated",
        Category::ProjectImpact => "Work has visible community impact",
        Category::TechnicalDepth => "Demonstrates range across multiple technologies",
    };
    with_fact(base, fact)
}

pub fn weakness(category: Category, fact: Option<&Evidence>) -> String {
    let base = match category {
        Category::Documentation => "Many repositories lack a README or description",
        Category::CodeStructure => "Tests and licenses are missing from most repositories",
        Category::ActivityConsistency => "Commit activity has gone quiet",
        Category::RepositoryOrganization => "Portfolio reads as uncurated",
        Category::ProjectImpact => "Projects have little community visibility",
        Category::TechnicalDepth => "Language range looks narrow",
    };
    with_fact(base, fact)
}

pub fn recommendation(category: Category) -> String {
    match category {
        Category::Documentation => {
            "Add a README and a one-line description to every repository you want seen"
        }
        Category::CodeStructure => {
            "Add test suites and licenses to your most visible repositories"
        }
        Category::ActivityConsistency => {
            "Commit regularly so your profile shows activity within the last month"
        }
        Category::RepositoryOrganization => {
            "Rename placeholder repositories and remove or archive unmodified forks"
        }
        Category::ProjectImpact => {
            "Promote your strongest projects to attract stars and forks"
        }
        Category::TechnicalDepth => {
            "Publish substantial work in more than one language to demonstrate range"
        }
    }
    .to_string()
}
