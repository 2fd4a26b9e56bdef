//! End-to-end scenarios for the decision-support core through its public surface: a committee
//! reviewer scores a claim, reads the explanations and draws the selected schemes on the map.

use std::io::Cursor;

use fra_atlas::decision_support::{
    build_scheme_layers, explain_recommendation, recommend_schemes, scheme_catalog, Claim,
    ClaimImporter, ClaimPriority, ClaimType, ContextSignals, RecommendationEngine,
    SchemeCatalog, SchemeCriteria, SchemeDefinition, SchemeId,
};

fn sample_claim() -> Claim {
    Claim::new(
        "FR-DSS-0001",
        ClaimType::CommunityForestRights,
        "Barwani",
        ClaimPriority::High,
    )
    .with_area(12.3)
    .with_families(36)
}

fn review_context() -> ContextSignals {
    ContextSignals {
        near_protected_area: true,
        has_wildlife_corridor: false,
        low_connectivity: true,
        health_risk_season: false,
    }
}

#[test]
fn sample_claim_scores_match_catalog_thresholds() {
    let recommendations = recommend_schemes(Some(&sample_claim()), Some(&review_context()));

    let scored: Vec<(String, u32)> = recommendations
        .iter()
        .map(|recommendation| (recommendation.name.clone(), recommendation.score))
        .collect();

    // Infra: 20 + 10 + 10 + 10 + 8, education: 20 + 10 + 10 + 15, health: 20 + 10 + 10 + 12,
    // livelihood: 20 + 10 + 10 + 10; each plus 6 + 8 context.
    assert_eq!(
        scored,
        vec![
            ("Rural Infrastructure".to_string(), 72),
            ("Educational Support".to_string(), 69),
            ("Healthcare Access".to_string(), 66),
            ("Livelihood Mission".to_string(), 64),
        ]
    );
}

#[test]
fn reviewer_flow_produces_explanations_and_layers() {
    let recommendations = recommend_schemes(Some(&sample_claim()), Some(&review_context()));

    let top = &recommendations[0];
    let explained = explain_recommendation(top);
    assert_eq!(explained.first().map(String::as_str), Some("Matches claim type"));
    assert_eq!(
        explained.last().map(String::as_str),
        Some("Poor last-mile connectivity")
    );

    let layers = build_scheme_layers(&recommendations[..2]);
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].id, "layer_sch-infra");
    assert_eq!(layers[0].color, "#9333ea");
    assert_eq!(layers[1].bounds_percent.top, 21);
}

#[test]
fn substituted_catalog_is_used_without_touching_the_standard_one() {
    let catalog = SchemeCatalog::new(vec![SchemeDefinition {
        id: SchemeId::from("sch-bamboo"),
        name: "Bamboo Mission".to_string(),
        category: "Economic Empowerment".to_string(),
        icon: "Sprout".to_string(),
        color: "#65a30d".to_string(),
        criteria: SchemeCriteria {
            districts_priority: vec!["Barwani".to_string()],
            ..SchemeCriteria::default()
        },
        benefits: vec!["Bamboo nurseries".to_string()],
    }])
    .expect("catalog valid");
    let engine = RecommendationEngine::new(catalog);

    let recommendations = engine.recommend(Some(&sample_claim()), None);

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].score, 10);
    assert_eq!(recommendations[0].reasons, vec!["Priority district: Barwani"]);
    assert_eq!(scheme_catalog().len(), 4);
}

#[test]
fn imported_batch_scores_each_claim() {
    let csv = "id,type,district,priority,area,families\n\
FR-101,Community Forest Rights,Khandwa,Medium,6,12\n\
FR-102,Community Rights,Indore,Low,,\n";

    let claims = ClaimImporter::from_reader(Cursor::new(csv)).expect("batch imports");
    let engine = RecommendationEngine::standard();

    let first = engine.recommend(Some(&claims[0]), None);
    let infra = first
        .iter()
        .find(|recommendation| recommendation.scheme_id.as_str() == "sch-infra")
        .expect("infrastructure recommended");
    assert_eq!(infra.score, 20 + 10 + 10 + 10 + 4);

    assert!(engine.recommend(Some(&claims[1]), None).is_empty());
    assert_eq!(
        engine
            .recommend(Some(&claims[1]), Some(&ContextSignals::all()))
            .iter()
            .map(|recommendation| recommendation.score)
            .collect::<Vec<_>>(),
        vec![25, 25, 25, 25]
    );
}
