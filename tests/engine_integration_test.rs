//! End-to-end engine behavior over a realistic profile.

mod common;

use gitworth::{assess, Category};

use common::{analysis_time, healthy_profile};

#[test]
fn healthy_profile_scores_well_everywhere() {
    let assessment = assess(&healthy_profile(), analysis_time()).unwrap();

    // Fully documented, tested, licensed, recently active, starred.
    assert_eq!(assessment.score_breakdown.documentation, 100);
    assert_eq!(assessment.score_breakdown.code_structure, 100);
    assert!(assessment.score_breakdown.activity_consistency >= 80);
    assert!(assessment.score_breakdown.project_impact >= 40);
    assert!(assessment.overall_score >= 60);
    assert!(!assessment.strengths.is_empty());
}

#[test]
fn output_json_honors_the_field_contract() {
    let assessment = assess(&healthy_profile(), analysis_time()).unwrap();
    let json = serde_json::to_value(&assessment).unwrap();

    for field in [
        "username",
        "overall_score",
        "score_breakdown",
        "strengths",
        "weaknesses",
        "recommendations",
        "profile_data",
        "generated_at",
    ] {
        assert!(json.get(field).is_some(), "missing top-level field {field}");
    }
    let breakdown = &json["score_breakdown"];
    for field in [
        "documentation",
        "code_structure",
        "activity_consistency",
        "repository_organization",
        "project_impact",
        "technical_depth",
    ] {
        assert!(breakdown.get(field).is_some(), "missing breakdown field {field}");
    }
    let profile_data = &json["profile_data"];
    for field in [
        "name",
        "bio",
        "avatar_url",
        "public_repos",
        "followers",
        "total_stars",
        "languages",
    ] {
        assert!(profile_data.get(field).is_some(), "missing profile field {field}");
    }
}

#[test]
fn language_usage_passes_through_unchanged() {
    let profile = healthy_profile();
    let assessment = assess(&profile, analysis_time()).unwrap();
    assert_eq!(assessment.profile_data.languages, profile.languages);
}

#[test]
fn concurrent_assessments_are_independent() {
    let profile = healthy_profile();
    let expected = assess(&profile, analysis_time()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let profile = profile.clone();
            std::thread::spawn(move || assess(&profile, analysis_time()).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn no_category_statement_contradicts_itself() {
    let assessment = assess(&healthy_profile(), analysis_time()).unwrap();
    // Each category template appears in at most one of the two sections.
    for category in Category::ALL {
        let score = assessment.score_breakdown.get(category);
        if score >= 75 {
            assert!(assessment
                .weaknesses
                .iter()
                .all(|w| !w.starts_with(&gitworth::narrative::templates::weakness(category, None))));
        }
    }
}
