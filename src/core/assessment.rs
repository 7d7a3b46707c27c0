//! Final output record handed to the presentation layer.
//!
//! Field names are a compatibility contract; consumers render this JSON
//! directly. The record is constructed once per analysis and never mutated
//! afterwards. The engine keeps no history between runs, so `generated_at`
//! echoes the caller-supplied analysis time and repeated runs over the same
//! input serialize byte-identically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::ScoreBreakdown;
use super::profile::{LanguageUsage, ProfileRecord};

/// Identity and headline counts echoed from the input profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub bio: String,
    pub avatar_url: String,
    pub public_repos: u32,
    pub followers: u32,
    pub total_stars: u64,
    /// Language usage passed through unchanged for display.
    pub languages: LanguageUsage,
}

impl ProfileSummary {
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            name: record.display_name().to_string(),
            bio: record.bio.clone().unwrap_or_default(),
            avatar_url: record.avatar_url.clone().unwrap_or_default(),
            public_repos: record.public_repos,
            followers: record.followers,
            total_stars: record.star_count(),
            languages: record.languages.clone(),
        }
    }
}

/// Complete multi-factor assessment of one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub username: String,
    /// Weighted combination of the six category scores, in [0, 100].
    pub overall_score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Priority order: the most impactful fix leads the list.
    pub recommendations: Vec<String>,
    pub profile_data: ProfileSummary,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_echoes_identity_with_empty_fallbacks() {
        let record: ProfileRecord = serde_json::from_str(
            r#"{"username": "octocat", "followers": 7, "public_repos": 2}"#,
        )
        .unwrap();
        let summary = ProfileSummary::from_record(&record);
        assert_eq!(summary.name, "octocat");
        assert_eq!(summary.bio, "");
        assert_eq!(summary.avatar_url, "");
        assert_eq!(summary.followers, 7);
        assert_eq!(summary.public_repos, 2);
    }
}
