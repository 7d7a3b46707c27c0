//! Normalized input model supplied by a profile data provider.
//!
//! The engine never talks to the GitHub API. A provider resolves the account,
//! pages through repositories, and hands over one `ProfileRecord` with
//! everything already materialized. "User not found" is the provider's
//! problem; an empty-but-valid profile is ours.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{GitworthError, Result};

/// Relative usage weight per language. Weights are non-negative and need not
/// sum to 1; a `BTreeMap` keeps iteration and serialization deterministic.
pub type LanguageUsage = BTreeMap<String, f64>;

/// Snapshot of a developer's public account and repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    /// Stars across owned repositories, as counted by the provider. May cover
    /// more repositories than `repositories` if the provider truncated.
    #[serde(default)]
    pub total_stars: u64,
    #[serde(default)]
    pub total_forks: u64,
    #[serde(default)]
    pub repositories: Vec<RepositorySummary>,
    #[serde(default)]
    pub languages: LanguageUsage,
}

impl ProfileRecord {
    /// Reject structurally invalid records before extraction. Sparse data is
    /// fine; a missing identity is not.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(GitworthError::malformed("username is empty"));
        }
        Ok(())
    }

    /// Display name, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Stars visible to the engine: the provider's total, or the sum over the
    /// repository summaries when the total lags behind them.
    pub fn star_count(&self) -> u64 {
        let from_repos: u64 = self.repositories.iter().map(|r| r.stars).sum();
        self.total_stars.max(from_repos)
    }

    /// Forks visible to the engine, same fallback as [`star_count`].
    ///
    /// [`star_count`]: ProfileRecord::star_count
    pub fn fork_count(&self) -> u64 {
        let from_repos: u64 = self.repositories.iter().map(|r| r.forks).sum();
        self.total_forks.max(from_repos)
    }
}

/// Per-repository metadata within the observation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub forks: u64,
    /// True for unmodified forks of someone else's repository.
    #[serde(default)]
    pub is_fork: bool,
    /// Last observed commit; `None` when the provider had no commit data.
    #[serde(default)]
    pub last_commit: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_readme: bool,
    #[serde(default)]
    pub has_tests: bool,
    #[serde(default)]
    pub has_license: bool,
    /// Commits within the provider's observation window.
    #[serde(default)]
    pub recent_commits: u32,
}

impl RepositorySummary {
    /// Documented means both a README and a non-empty description.
    pub fn is_documented(&self) -> bool {
        self.has_readme && self.has_description()
    }

    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }
}
