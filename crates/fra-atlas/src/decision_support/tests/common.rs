use axum::response::Response;
use serde_json::Value;

use crate::decision_support::catalog::{
    SchemeCatalog, SchemeCriteria, SchemeDefinition, SchemeId,
};
use crate::decision_support::domain::{Claim, ClaimPriority, ClaimType, ContextSignals};
use crate::decision_support::engine::{Recommendation, RecommendationEngine};

/// Sample claim used on the decision-support page.
pub(super) fn barwani_claim() -> Claim {
    Claim::new(
        "FR-DSS-0001",
        ClaimType::CommunityForestRights,
        "Barwani",
        ClaimPriority::High,
    )
    .with_area(12.3)
    .with_families(36)
}

/// Claim that satisfies none of the standard catalog criteria.
pub(super) fn unmatched_claim() -> Claim {
    Claim::new("FR-0000", ClaimType::CommunityRights, "Indore", ClaimPriority::Low)
}

pub(super) fn panel_context() -> ContextSignals {
    ContextSignals {
        near_protected_area: true,
        has_wildlife_corridor: false,
        low_connectivity: true,
        health_risk_season: false,
    }
}

pub(super) fn standard_engine() -> RecommendationEngine {
    RecommendationEngine::new(SchemeCatalog::standard())
}

pub(super) fn scheme(id: &str, name: &str, criteria: SchemeCriteria) -> SchemeDefinition {
    SchemeDefinition {
        id: SchemeId::from(id),
        name: name.to_string(),
        category: "Test".to_string(),
        icon: "Circle".to_string(),
        color: "#000000".to_string(),
        criteria,
        benefits: vec![format!("{name} benefit")],
    }
}

pub(super) fn recommendation(id: &str, name: &str, score: u32) -> Recommendation {
    Recommendation {
        scheme_id: SchemeId::from(id),
        name: name.to_string(),
        category: "Test".to_string(),
        icon: "Circle".to_string(),
        color: "#111111".to_string(),
        benefits: Vec::new(),
        score,
        reasons: Vec::new(),
    }
}

pub(super) fn ids(recommendations: &[Recommendation]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|recommendation| recommendation.scheme_id.as_str())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
