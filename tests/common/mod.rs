//! Shared fixtures for integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use gitworth::{LanguageUsage, ProfileRecord, RepositorySummary};

/// Fixed analysis time so assessments are reproducible across test runs.
pub fn analysis_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

pub fn empty_profile(username: &str) -> ProfileRecord {
    ProfileRecord {
        username: username.into(),
        name: None,
        bio: None,
        avatar_url: None,
        public_repos: 0,
        followers: 0,
        total_stars: 0,
        total_forks: 0,
        repositories: Vec::new(),
        languages: LanguageUsage::new(),
    }
}

pub fn repo(name: &str) -> RepositorySummary {
    RepositorySummary {
        name: name.into(),
        description: Some(format!("{name} description")),
        language: Some("Rust".into()),
        stars: 0,
        forks: 0,
        is_fork: false,
        last_commit: Some(analysis_time() - Duration::days(10)),
        has_readme: true,
        has_tests: true,
        has_license: true,
        recent_commits: 12,
    }
}

/// A realistic mid-sized profile used by several tests.
pub fn healthy_profile() -> ProfileRecord {
    let mut profile = empty_profile("octocat");
    profile.name = Some("The Octocat".into());
    profile.bio = Some("Builds things".into());
    profile.public_repos = 3;
    profile.followers = 120;
    profile.repositories = vec![
        RepositorySummary {
            stars: 340,
            forks: 25,
            ..repo("rate-limiter")
        },
        RepositorySummary {
            stars: 15,
            last_commit: Some(analysis_time() - Duration::days(70)),
            ..repo("json-path")
        },
        repo("dotfiles"),
    ];
    profile.total_stars = 355;
    profile.total_forks = 25;
    profile.languages =
        [("Rust".to_string(), 70.0), ("Python".to_string(), 30.0)].into_iter().collect();
    profile
}
