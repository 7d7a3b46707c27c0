//! Repository organization: naming quality, description coverage, and the
//! original-vs-fork ratio. Profiles full of unmodified forks and
//! placeholder-named repositories score low.

use crate::config::ScoringPolicy;
use crate::core::{Evidence, ProfileRecord, Signal};

use super::ratio_score;

/// Names that read as scratch work rather than a curated portfolio.
const PLACEHOLDER_NAMES: &[&str] = &[
    "test", "testing", "demo", "sample", "temp", "tmp", "untitled", "new-repo",
    "new-project", "my-project", "my-repo", "hello-world", "playground", "scratch",
];

fn is_placeholder_name(name: &str) -> bool {
    let lowered = name.to_lowercase();
    PLACEHOLDER_NAMES.contains(&lowered.as_str())
        || lowered.starts_with("untitled")
        || lowered.starts_with("test-")
        || lowered.ends_with("-test")
}

fn is_well_named(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(' ') && !is_placeholder_name(name)
}

pub fn extract(profile: &ProfileRecord, policy: &ScoringPolicy) -> Signal {
    let repos = &profile.repositories;
    if repos.is_empty() {
        return Signal::insufficient_data("no public repositories to organize");
    }

    let count = repos.len() as f64;
    let described = repos.iter().filter(|r| r.has_description()).count();
    let named = repos.iter().filter(|r| is_well_named(&r.name)).count();
    let original = repos.iter().filter(|r| !r.is_fork).count();

    let org = &policy.organization;
    let blended = org.described_weight * (described as f64 / count)
        + org.named_weight * (named as f64 / count)
        + org.original_weight * (original as f64 / count);
    let score = ratio_score(blended);

    let mut evidence = Vec::new();
    let original_fraction = original as f64 / count;
    if original_fraction >= 0.8 {
        evidence.push(Evidence::positive(
            format!("{original} of {} repositories are original work", repos.len()),
            original_fraction,
        ));
    }
    if described as f64 / count >= 0.8 {
        evidence.push(Evidence::positive(
            format!("{described} of {} repositories are described", repos.len()),
            described as f64 / count * 0.9,
        ));
    }
    let forks = repos.len() - original;
    if forks * 2 > repos.len() {
        evidence.push(Evidence::negative(
            format!("{forks} of {} repositories are unmodified forks", repos.len()),
            forks as f64,
        ));
    }
    for repo in repos
        .iter()
        .filter(|r| is_placeholder_name(&r.name))
        .take(policy.max_facts_per_category)
    {
        evidence.push(Evidence::negative(
            format!("{} looks like a placeholder name", repo.name),
            1.0,
        ));
    }

    Signal::new(score, evidence)
}
