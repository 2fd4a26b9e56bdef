use super::common::*;
use crate::decision_support::catalog::{SchemeCatalog, SchemeCriteria};
use crate::decision_support::domain::{ClaimType, ContextSignals};
use crate::decision_support::engine::{explain_recommendation, recommend_schemes, scheme_catalog};
use crate::decision_support::RecommendationEngine;

#[test]
fn barwani_claim_ranks_every_standard_scheme() {
    let engine = standard_engine();

    let recommendations = engine.recommend(Some(&barwani_claim()), Some(&panel_context()));

    let scored: Vec<(&str, u32)> = recommendations
        .iter()
        .map(|recommendation| (recommendation.scheme_id.as_str(), recommendation.score))
        .collect();
    assert_eq!(
        scored,
        vec![
            ("sch-infra", 72),
            ("sch-education", 69),
            ("sch-health", 66),
            ("sch-livelihood", 64),
        ]
    );
}

#[test]
fn reasons_append_context_after_criteria() {
    let engine = standard_engine();

    let recommendations = engine.recommend(Some(&barwani_claim()), Some(&panel_context()));
    let education = recommendations
        .iter()
        .find(|recommendation| recommendation.scheme_id.as_str() == "sch-education")
        .expect("education recommended");

    assert_eq!(
        education.reasons,
        vec![
            "Matches claim type",
            "Families ≥ 1",
            "Priority district: Barwani",
            "High priority boost (+15)",
            "Near protected area",
            "Poor last-mile connectivity",
        ]
    );
    assert_eq!(education.name, "Educational Support");
    assert_eq!(education.category, "Human Development");
    assert_eq!(education.icon, "GraduationCap");
    assert_eq!(education.benefits.len(), 3);
}

#[test]
fn missing_claim_fails_closed() {
    let engine = standard_engine();

    assert!(engine.recommend(None, Some(&ContextSignals::all())).is_empty());
    assert!(recommend_schemes(None, None).is_empty());
}

#[test]
fn zero_scores_are_filtered() {
    let engine = standard_engine();

    assert!(engine.recommend(Some(&unmatched_claim()), None).is_empty());
    assert!(engine
        .recommend(Some(&unmatched_claim()), Some(&ContextSignals::default()))
        .is_empty());
}

#[test]
fn context_alone_lifts_every_scheme_to_the_same_score() {
    let engine = standard_engine();

    let recommendations = engine.recommend(Some(&unmatched_claim()), Some(&ContextSignals::all()));

    assert_eq!(recommendations.len(), 4);
    assert!(recommendations
        .iter()
        .all(|recommendation| recommendation.score == 25));
    assert_eq!(
        ids(&recommendations),
        vec!["sch-education", "sch-health", "sch-livelihood", "sch-infra"],
        "ties keep catalog order"
    );
}

#[test]
fn ties_keep_injected_catalog_order() {
    let flat = SchemeCriteria {
        claim_types: vec![ClaimType::IndividualForestRights],
        ..SchemeCriteria::default()
    };
    let catalog = SchemeCatalog::new(vec![
        scheme("sch-c", "Charlie", flat.clone()),
        scheme("sch-a", "Alpha", flat.clone()),
        scheme(
            "sch-top",
            "Top",
            SchemeCriteria {
                min_families: Some(1),
                ..flat.clone()
            },
        ),
        scheme("sch-b", "Bravo", flat),
    ])
    .expect("catalog valid");
    let engine = RecommendationEngine::new(catalog);
    let mut claim = unmatched_claim().with_families(4);
    claim.claim_type = ClaimType::IndividualForestRights;

    let recommendations = engine.recommend(Some(&claim), None);

    assert_eq!(ids(&recommendations), vec!["sch-top", "sch-c", "sch-a", "sch-b"]);
    assert_eq!(recommendations[0].score, 30);
    assert!(recommendations[1..]
        .iter()
        .all(|recommendation| recommendation.score == 20));
}

#[test]
fn oversized_priority_boost_saturates_instead_of_overflowing() {
    let json = r##"[{
        "id": "sch-outlier",
        "name": "Outlier Boost",
        "category": "Test",
        "icon": "Circle",
        "color": "#000000",
        "criteria": {
            "claimTypes": ["Community Forest Rights"],
            "priorityBoost": { "High": 4294967295 }
        }
    }]"##;
    let catalog = SchemeCatalog::from_reader(std::io::Cursor::new(json)).expect("catalog parses");
    let engine = RecommendationEngine::new(catalog);

    let recommendations = engine.recommend(Some(&barwani_claim()), Some(&ContextSignals::all()));

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].score, u32::MAX);
    assert_eq!(
        recommendations[0].reasons[..2],
        ["Matches claim type", "High priority boost (+4294967295)"]
    );
}

#[test]
fn results_are_sorted_by_descending_score() {
    let engine = standard_engine();
    let contexts = [
        ContextSignals::default(),
        panel_context(),
        ContextSignals::all(),
    ];
    let mut claims = vec![barwani_claim(), unmatched_claim()];
    let mut small = barwani_claim();
    small.area = Some(1.5);
    small.families = Some(3);
    small.district = "Dhar".to_string();
    claims.push(small);

    for claim in &claims {
        for context in &contexts {
            let recommendations = engine.recommend(Some(claim), Some(context));
            assert!(recommendations
                .windows(2)
                .all(|pair| pair[0].score >= pair[1].score));
        }
    }
}

#[test]
fn recommending_is_deterministic_and_leaves_inputs_untouched() {
    let engine = standard_engine();
    let claim = barwani_claim();
    let context = panel_context();

    let first = engine.recommend(Some(&claim), Some(&context));
    let second = engine.recommend(Some(&claim), Some(&context));

    assert_eq!(first, second);
    assert_eq!(claim, barwani_claim());
    assert_eq!(context, panel_context());
    assert_eq!(recommend_schemes(Some(&claim), Some(&context)), first);
}

#[test]
fn explain_removes_repeats_in_first_seen_order() {
    let mut recommendation = recommendation("sch-x", "X", 10);
    recommendation.reasons = vec![
        "Near protected area".to_string(),
        "Matches claim type".to_string(),
        "Near protected area".to_string(),
        "Seasonal health risks".to_string(),
        "Matches claim type".to_string(),
    ];

    let explained = explain_recommendation(&recommendation);

    assert_eq!(
        explained,
        vec![
            "Near protected area",
            "Matches claim type",
            "Seasonal health risks",
        ]
    );

    recommendation.reasons = explained.clone();
    assert_eq!(explain_recommendation(&recommendation), explained);
}

#[test]
fn explain_of_engine_output_has_no_duplicates() {
    let engine = standard_engine();

    for recommendation in engine.recommend(Some(&barwani_claim()), Some(&ContextSignals::all())) {
        let explained = recommendation.explain();
        let mut deduped = explained.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), explained.len());
    }
}

#[test]
fn catalog_projection_lists_display_fields() {
    let summaries = scheme_catalog();

    assert_eq!(summaries.len(), 4);
    assert_eq!(summaries[3].name, "Rural Infrastructure");
    assert_eq!(summaries[3].icon, "Building2");
    assert_eq!(summaries[3].category, "Connectivity");
    assert_eq!(standard_engine().schemes(), summaries);
}
