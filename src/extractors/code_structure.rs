//! Code structure: tests and licenses as a proxy for engineering hygiene.
//!
//! Each repository contributes the mean of its has-tests and has-license
//! indicators; the score is the mean over all repositories.

use crate::config::ScoringPolicy;
use crate::core::{Evidence, ProfileRecord, Signal};

use super::ratio_score;

pub fn extract(profile: &ProfileRecord, policy: &ScoringPolicy) -> Signal {
    let repos = &profile.repositories;
    if repos.is_empty() {
        return Signal::insufficient_data("no public repositories to inspect");
    }

    let total: f64 = repos
        .iter()
        .map(|r| (u32::from(r.has_tests) + u32::from(r.has_license)) as f64 / 2.0)
        .sum();
    let score = ratio_score(total / repos.len() as f64);

    let tested = repos.iter().filter(|r| r.has_tests).count();
    let licensed = repos.iter().filter(|r| r.has_license).count();

    let mut evidence = Vec::new();
    if tested > 0 {
        evidence.push(Evidence::positive(
            format!("{tested} of {} repositories ship a test suite", repos.len()),
            tested as f64,
        ));
    }
    if licensed > 0 {
        evidence.push(Evidence::positive(
            format!("{licensed} of {} repositories carry a license", repos.len()),
            licensed as f64 * 0.5, // tests are the stronger signal of the two
        ));
    }
    for repo in repos
        .iter()
        .filter(|r| !r.has_tests)
        .take(policy.max_facts_per_category)
    {
        evidence.push(Evidence::negative(
            format!("{} has no visible tests", repo.name),
            (repo.stars + 1) as f64,
        ));
    }
    for repo in repos
        .iter()
        .filter(|r| !r.has_license)
        .take(policy.max_facts_per_category)
    {
        evidence.push(Evidence::negative(
            format!("{} has no license", repo.name),
            repo.stars as f64 * 0.5,
        ));
    }

    Signal::new(score, evidence)
}
