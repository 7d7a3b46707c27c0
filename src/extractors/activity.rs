//! Activity consistency: recency of work across repositories.
//!
//! Each repository with a known last commit contributes the weight of the
//! recency bucket it falls in (relative to the supplied analysis time, never
//! the wall clock). Repositories without commit data are excluded from the
//! denominator rather than penalized as stale.

use chrono::{DateTime, Utc};

use crate::config::ScoringPolicy;
use crate::core::{Evidence, ProfileRecord, RepositorySummary, Signal};

use super::ratio_score;

pub fn extract(
    profile: &ProfileRecord,
    analysis_time: DateTime<Utc>,
    policy: &ScoringPolicy,
) -> Signal {
    let dated: Vec<(&RepositorySummary, i64)> = profile
        .repositories
        .iter()
        .filter_map(|repo| {
            repo.last_commit
                .map(|at| (repo, (analysis_time - at).num_days().max(0)))
        })
        .collect();

    if dated.is_empty() {
        return Signal::insufficient_data("no commit activity data available");
    }

    let weighted: f64 = dated
        .iter()
        .map(|(_, days)| policy.activity.recency_weight(*days))
        .sum();
    let score = ratio_score(weighted / dated.len() as f64);

    let fresh = dated
        .iter()
        .filter(|(_, days)| *days <= policy.activity.fresh_days)
        .count();
    let window_commits: u64 = dated.iter().map(|(r, _)| u64::from(r.recent_commits)).sum();

    let mut evidence = Vec::new();
    if fresh > 0 {
        evidence.push(Evidence::positive(
            format!(
                "{fresh} repositories updated within the last {} days",
                policy.activity.fresh_days
            ),
            fresh as f64,
        ));
    }
    if window_commits > 0 {
        evidence.push(Evidence::positive(
            format!("{window_commits} commits in the observation window"),
            window_commits as f64 * 0.1,
        ));
    }
    let mut stale: Vec<_> = dated
        .iter()
        .filter(|(_, days)| *days > policy.activity.stale_days)
        .collect();
    stale.sort_by_key(|(repo, days)| (std::cmp::Reverse(*days), repo.name.clone()));
    for (repo, days) in stale.into_iter().take(policy.max_facts_per_category) {
        evidence.push(Evidence::negative(
            format!("{} has seen no commits in over a year", repo.name),
            *days as f64,
        ));
    }

    Signal::new(score, evidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_policy;
    use chrono::{Duration, TimeZone};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    fn repo(name: &str, days_ago: Option<i64>) -> RepositorySummary {
        RepositorySummary {
            name: name.into(),
            description: None,
            language: None,
            stars: 0,
            forks: 0,
            is_fork: false,
            last_commit: days_ago.map(|d| at() - Duration::days(d)),
            has_readme: false,
            has_tests: false,
            has_license: false,
            recent_commits: 0,
        }
    }

    fn profile(repos: Vec<RepositorySummary>) -> ProfileRecord {
        let mut p: ProfileRecord = serde_json::from_str(r#"{"username": "octocat"}"#).unwrap();
        p.repositories = repos;
        p
    }

    #[test]
    fn all_fresh_scores_100() {
        let repos = vec![repo("a", Some(1)), repo("b", Some(29))];
        assert_eq!(extract(&profile(repos), at(), default_policy()).score, 100);
    }

    #[test]
    fn buckets_decay_with_age() {
        // fresh (1.0) + recent (0.6) + stale-year (0.3) + dead (0.0) over 4
        let repos = vec![
            repo("a", Some(10)),
            repo("b", Some(60)),
            repo("c", Some(200)),
            repo("d", Some(800)),
        ];
        let signal = extract(&profile(repos), at(), default_policy());
        assert_eq!(signal.score, 48); // 1.9 / 4 = 0.475 -> 48
    }

    #[test]
    fn undated_repos_do_not_drag_the_denominator() {
        let repos = vec![repo("a", Some(5)), repo("b", None), repo("c", None)];
        assert_eq!(extract(&profile(repos), at(), default_policy()).score, 100);
    }

    #[test]
    fn no_commit_data_at_all_floors_with_neutral_evidence() {
        let repos = vec![repo("a", None)];
        let signal = extract(&profile(repos), at(), default_policy());
        assert_eq!(signal.score, 0);
        assert!(!signal.evidence.is_empty());
    }

    #[test]
    fn future_timestamps_clamp_to_fresh() {
        // Providers must not send future commits; clamping keeps the score
        // in range even if one slips through.
        let repos = vec![repo("a", Some(-3))];
        assert_eq!(extract(&profile(repos), at(), default_policy()).score, 100);
    }
}
