//! Assessment entry point and assembly.
//!
//! One call = one synchronous, side-effect-free computation over one
//! profile record. The engine holds no state between calls; identical input
//! (profile plus analysis time) produces an identical assessment.

use chrono::{DateTime, Utc};
use log::debug;

use crate::config::{default_policy, ScoringPolicy};
use crate::core::{Assessment, ProfileRecord, ProfileSummary};
use crate::errors::Result;
use crate::extractors;
use crate::narrative;
use crate::scoring;

/// Assess a profile under the built-in scoring policy.
///
/// Fails only with [`crate::GitworthError::MalformedProfile`] when identity
/// fields are absent; sparse or empty repository data never fails.
pub fn assess(profile: &ProfileRecord, analysis_time: DateTime<Utc>) -> Result<Assessment> {
    assess_with_policy(profile, analysis_time, default_policy())
}

/// Assess a profile under a caller-supplied policy. The policy is validated
/// first, so an invalid table surfaces as a configuration error before any
/// scoring happens.
pub fn assess_with_policy(
    profile: &ProfileRecord,
    analysis_time: DateTime<Utc>,
    policy: &ScoringPolicy,
) -> Result<Assessment> {
    policy.validate()?;
    profile.validate()?;

    let signals = extractors::extract_all(profile, analysis_time, policy);
    let breakdown = signals.breakdown();
    let overall_score = scoring::aggregate(&breakdown, &policy.weights);
    let narrative = narrative::generate(
        &breakdown,
        &signals,
        !profile.repositories.is_empty(),
        &policy.thresholds,
    );

    debug!(
        "assessed {}: overall {} over {} repositories",
        profile.username,
        overall_score,
        profile.repositories.len()
    );

    // Engine invariants, not user-input conditions: a violation here is a
    // bug upstream and should fail loudly in development.
    debug_assert!(breakdown.in_range());
    debug_assert!(overall_score <= 100);
    debug_assert!(
        !profile.repositories.is_empty() || !narrative.recommendations.is_empty(),
        "empty profile produced no recommendations"
    );

    Ok(Assessment {
        username: profile.username.clone(),
        overall_score,
        score_breakdown: breakdown,
        strengths: narrative.strengths,
        weaknesses: narrative.weaknesses,
        recommendations: narrative.recommendations,
        profile_data: ProfileSummary::from_record(profile),
        generated_at: analysis_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use crate::errors::GitworthError;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn blank_username_is_rejected() {
        let profile: ProfileRecord = serde_json::from_str(r#"{"username": ""}"#).unwrap();
        let err = assess(&profile, at()).unwrap_err();
        assert!(matches!(err, GitworthError::MalformedProfile { .. }));
    }

    #[test]
    fn invalid_policy_is_a_configuration_error() {
        let profile: ProfileRecord = serde_json::from_str(r#"{"username": "octocat"}"#).unwrap();
        let mut policy = ScoringPolicy::default();
        policy.weights.project_impact = 0.9;
        let err = assess_with_policy(&profile, at(), &policy).unwrap_err();
        assert!(matches!(err, GitworthError::Configuration { .. }));
    }

    #[test]
    fn empty_profile_scores_zero_overall() {
        let profile: ProfileRecord = serde_json::from_str(r#"{"username": "octocat"}"#).unwrap();
        let assessment = assess(&profile, at()).unwrap();
        assert_eq!(assessment.overall_score, 0);
        for category in Category::ALL {
            assert_eq!(assessment.score_breakdown.get(category), 0);
        }
        assert!(!assessment.recommendations.is_empty());
    }

    #[test]
    fn generated_at_echoes_analysis_time() {
        let profile: ProfileRecord = serde_json::from_str(r#"{"username": "octocat"}"#).unwrap();
        let assessment = assess(&profile, at()).unwrap();
        assert_eq!(assessment.generated_at, at());
    }
}
