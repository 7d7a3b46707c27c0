//! Documentation: fraction of repositories with both a README and a
//! non-empty description.

use crate::config::ScoringPolicy;
use crate::core::{Evidence, ProfileRecord, Signal};

use super::ratio_score;

pub fn extract(profile: &ProfileRecord, policy: &ScoringPolicy) -> Signal {
    let repos = &profile.repositories;
    if repos.is_empty() {
        return Signal::insufficient_data("no public repositories to document");
    }

    let documented = repos.iter().filter(|r| r.is_documented()).count();
    let score = ratio_score(documented as f64 / repos.len() as f64);

    let mut evidence = Vec::new();
    if documented > 0 {
        evidence.push(Evidence::positive(
            format!(
                "{documented} of {} repositories have a README and description",
                repos.len()
            ),
            documented as f64,
        ));
    }
    // Missing READMEs hurt more on repositories people actually look at,
    // so weight the fact by stars.
    for repo in repos
        .iter()
        .filter(|r| !r.has_readme)
        .take(policy.max_facts_per_category)
    {
        evidence.push(Evidence::negative(
            format!("{} has no README", repo.name),
            (repo.stars + 1) as f64,
        ));
    }
    for repo in repos
        .iter()
        .filter(|r| r.has_readme && !r.has_description())
        .take(policy.max_facts_per_category)
    {
        evidence.push(Evidence::negative(
            format!("{} has no description", repo.name),
            repo.stars as f64,
        ));
    }

    Signal::new(score, evidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_policy;
    use crate::core::{Polarity, RepositorySummary};

    fn repo(name: &str, has_readme: bool, description: Option<&str>) -> RepositorySummary {
        RepositorySummary {
            name: name.into(),
            description: description.map(String::from),
            language: None,
            stars: 0,
            forks: 0,
            is_fork: false,
            last_commit: None,
            has_readme,
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
    fn zero_repos_scores_zero_without_error() {
        let signal = extract(&profile(vec![]), default_policy());
        assert_eq!(signal.score, 0);
    }

    #[test]
    fn fully_documented_profile_scores_100() {
        let repos = vec![
            repo("a", true, Some("first")),
            repo("b", true, Some("second")),
        ];
        let signal = extract(&profile(repos), default_policy());
        assert_eq!(signal.score, 100);
    }

    #[test]
    fn readme_without_description_does_not_count() {
        let repos = vec![repo("a", true, None), repo("b", true, Some("ok"))];
        let signal = extract(&profile(repos), default_policy());
        assert_eq!(signal.score, 50);
    }

    #[test]
    fn rounding_follows_documented_fraction() {
        let repos = vec![
            repo("a", true, Some("x")),
            repo("b", false, None),
            repo("c", false, None),
        ];
        // 1/3 -> 33
        let signal = extract(&profile(repos), default_policy());
        assert_eq!(signal.score, 33);
    }

    #[test]
    fn missing_readme_facts_are_capped() {
        let repos: Vec<_> = (0..12).map(|i| repo(&format!("r{i}"), false, None)).collect();
        let signal = extract(&profile(repos), default_policy());
        let negatives = signal
            .evidence
            .iter()
            .filter(|e| e.polarity == Polarity::Negative)
            .count();
        assert_eq!(negatives, default_policy().max_facts_per_category);
    }
}
