use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::SchemeId;
use super::domain::{Claim, ClaimId, ContextSignals};
use super::engine::RecommendationEngine;
use super::layers::SchemeLayer;
use super::presentation::{
    default_selection, layers_for_selection, RecommendationOrder, RecommendationView,
};

/// Payload sent by the committee review panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub claim: Option<Claim>,
    #[serde(default)]
    pub context: Option<ContextSignals>,
    #[serde(default)]
    pub order: RecommendationOrder,
    /// Schemes to draw on the map. When absent or empty the top recommendations are selected.
    #[serde(default)]
    pub selected_schemes: Option<Vec<SchemeId>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub claim_id: Option<ClaimId>,
    pub order: RecommendationOrder,
    pub recommendations: Vec<RecommendationView>,
    pub selected_schemes: Vec<SchemeId>,
    pub layers: Vec<SchemeLayer>,
}

/// Router builder exposing the scheme catalog and recommendation endpoints.
pub fn dss_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/dss/schemes", get(schemes_handler))
        .route("/api/v1/dss/recommendations", post(recommendations_handler))
        .with_state(engine)
}

pub(crate) async fn schemes_handler(State(engine): State<Arc<RecommendationEngine>>) -> Response {
    (StatusCode::OK, Json(engine.schemes())).into_response()
}

pub(crate) async fn recommendations_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let response = evaluate(&engine, request);
    debug!(
        claim_id = response.claim_id.as_ref().map(|id| id.0.as_str()),
        recommendations = response.recommendations.len(),
        layers = response.layers.len(),
        "scored scheme recommendations"
    );
    (StatusCode::OK, Json(response)).into_response()
}

/// Runs the full panel flow: rank, reorder, select and lay out.
pub fn evaluate(
    engine: &RecommendationEngine,
    request: RecommendationRequest,
) -> RecommendationResponse {
    let RecommendationRequest {
        claim,
        context,
        order,
        selected_schemes,
    } = request;

    let mut recommendations = engine.recommend(claim.as_ref(), context.as_ref());
    order.apply(&mut recommendations);

    let selected_schemes = match selected_schemes {
        Some(selected) if !selected.is_empty() => selected,
        _ => default_selection(&recommendations),
    };
    let layers = layers_for_selection(&recommendations, &selected_schemes);

    RecommendationResponse {
        claim_id: claim.map(|claim| claim.id),
        order,
        recommendations: recommendations.iter().map(RecommendationView::from).collect(),
        selected_schemes,
        layers,
    }
}
