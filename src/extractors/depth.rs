//! Technical depth: breadth and spread of language usage.
//!
//! Languages below a minimum share of total usage weight are noise and do
//! not count. The score blends how many significant languages remain with
//! the Shannon entropy of their shares, so ten one-line languages score no
//! better than one real one.

use crate::config::{DepthPolicy, ScoringPolicy};
use crate::core::{Evidence, ProfileRecord, Signal};

use super::ratio_score;

/// Normalized shares of languages clearing the significance threshold,
/// sorted by descending share (ties by name) for deterministic evidence.
fn significant_shares(profile: &ProfileRecord, policy: &DepthPolicy) -> Vec<(String, f64)> {
    let total: f64 = profile.languages.values().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut shares: Vec<(String, f64)> = profile
        .languages
        .iter()
        .filter(|(_, w)| **w > 0.0)
        .map(|(name, w)| (name.clone(), w / total))
        .filter(|(_, share)| *share >= policy.significance_share)
        .collect();
    shares.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    shares
}

/// Shannon entropy of the shares, renormalized among themselves and scaled
/// to [0, 1] by the maximum entropy for that language count.
fn evenness(shares: &[(String, f64)]) -> f64 {
    if shares.len() < 2 {
        return 0.0;
    }
    let total: f64 = shares.iter().map(|(_, s)| s).sum();
    let entropy: f64 = shares
        .iter()
        .map(|(_, s)| {
            let p = s / total;
            -p * p.ln()
        })
        .sum();
    entropy / (shares.len() as f64).ln()
}

pub fn extract(profile: &ProfileRecord, policy: &ScoringPolicy) -> Signal {
    let shares = significant_shares(profile, &policy.depth);
    if shares.is_empty() {
        return Signal::insufficient_data("no meaningful language usage data");
    }

    let depth = &policy.depth;
    let count_component = (shares.len() as f64 / depth.count_saturation as f64).min(1.0);
    let score = ratio_score(
        depth.count_weight * count_component + depth.entropy_weight * evenness(&shares),
    );

    let mut evidence = Vec::new();
    if shares.len() > 1 {
        evidence.push(Evidence::positive(
            format!("meaningful work across {} languages", shares.len()),
            shares.len() as f64,
        ));
    }
    if let Some((top_name, top_share)) = shares.first() {
        evidence.push(Evidence::positive(
            format!("{top_name} accounts for {:.0}% of language usage", top_share * 100.0),
            *top_share,
        ));
        if shares.len() == 1 {
            evidence.push(Evidence::negative(
                format!("profile is concentrated in a single language ({top_name})"),
                1.0,
            ));
        }
    }

    Signal::new(score, evidence)
}
