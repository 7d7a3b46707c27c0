//! Project impact: community engagement under a saturating transform.
//!
//! Stars and forks are compressed in log space so a single viral repository
//! cannot saturate the score and unbounded inputs stay inside [0, 100].

use crate::config::{ImpactPolicy, ScoringPolicy};
use crate::core::{Evidence, ProfileRecord, Signal};

/// Saturating score: 100 * log10(1+e) / (log10(1+e) + offset).
///
/// Monotonic in engagement, zero at zero, approaches but never reaches 100.
pub fn saturating_score(engagement: f64, policy: &ImpactPolicy) -> u32 {
    if engagement <= 0.0 {
        return 0;
    }
    let compressed = (1.0 + engagement).log10();
    let score = 100.0 * compressed / (compressed + policy.saturation_offset);
    score.round().clamp(0.0, 100.0) as u32
}

pub fn extract(profile: &ProfileRecord, policy: &ScoringPolicy) -> Signal {
    let stars = profile.star_count();
    let forks = profile.fork_count();
    let engagement = stars as f64 + policy.impact.fork_multiplier * forks as f64;
    let score = saturating_score(engagement, &policy.impact);

    let mut evidence = Vec::new();
    if stars > 0 {
        evidence.push(Evidence::positive(
            format!("{stars} stars across public repositories"),
            stars as f64,
        ));
    }
    if forks > 0 {
        evidence.push(Evidence::positive(
            format!("{forks} forks by other developers"),
            forks as f64 * policy.impact.fork_multiplier,
        ));
    }
    if let Some(top) = profile
        .repositories
        .iter()
        .filter(|r| r.stars > 0)
        .max_by_key(|r| (r.stars, std::cmp::Reverse(r.name.clone())))
    {
        evidence.push(Evidence::positive(
            format!("{} leads with {} stars", top.name, top.stars),
            top.stars as f64 * 0.5,
        ));
    }
    if engagement <= 0.0 {
        evidence.push(Evidence::negative(
            "repositories have not attracted stars or forks yet".to_string(),
            1.0,
        ));
    }

    Signal::new(score, evidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_policy;

    fn profile_with_stars(stars: u64) -> ProfileRecord {
        let mut p: ProfileRecord = serde_json::from_str(r#"{"username": "octocat"}"#).unwrap();
        p.total_stars = stars;
        p
    }

    #[test]
    fn zero_engagement_is_floor() {
        let signal = extract(&profile_with_stars(0), default_policy());
        assert_eq!(signal.score, 0);
    }

    #[test]
    fn transform_is_monotonic() {
        let policy = default_policy();
        let mut last = 0;
        for stars in [0u64, 1, 10, 100, 10_000, 10_000_000, 1_000_000_000] {
            let score = extract(&profile_with_stars(stars), policy).score;
            assert!(score >= last, "score regressed at {stars} stars");
            last = score;
        }
    }

    #[test]
    fn extreme_star_counts_never_leave_range() {
        for stars in [10u64, 10_000, 10_000_000, u64::MAX / 2] {
            let score = extract(&profile_with_stars(stars), default_policy()).score;
            assert!(score <= 100, "{stars} stars escaped the scale");
        }
    }

    #[test]
    fn diminishing_returns_bound_the_viral_delta() {
        let policy = default_policy();
        let modest = extract(&profile_with_stars(10), policy).score;
        let viral = extract(&profile_with_stars(10_000_000), policy).score;
        assert!(viral > modest);
        assert!(
            viral - modest < 45,
            "six orders of magnitude produced a {}-point gap",
            viral - modest
        );
    }

    #[test]
    fn forks_count_double() {
        let mut starred = profile_with_stars(100);
        starred.total_forks = 0;
        let mut forked: ProfileRecord =
            serde_json::from_str(r#"{"username": "octocat"}"#).unwrap();
        forked.total_forks = 50;
        let policy = default_policy();
        assert_eq!(
            extract(&starred, policy).score,
            extract(&forked, policy).score
        );
    }
}
