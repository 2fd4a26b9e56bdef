//! Rule-based decision support for Centrally Sponsored Schemes.
//!
//! A claim and a set of map context signals go in; a ranked, explained list of scheme
//! recommendations comes out, along with placeholder overlays for the map. Every scoring
//! function here is pure, so one [`RecommendationEngine`] can be shared across threads.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod import;
pub mod layers;
pub mod presentation;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogError, SchemeCatalog, SchemeCriteria, SchemeDefinition, SchemeId, SchemeSummary,
};
pub use domain::{Claim, ClaimId, ClaimPriority, ClaimType, ContextSignal, ContextSignals};
pub use engine::{
    explain_recommendation, recommend_schemes, scheme_catalog, Recommendation,
    RecommendationEngine,
};
pub use import::{ClaimImportError, ClaimImporter};
pub use layers::{build_scheme_layers, LayerBounds, SchemeLayer, MAX_SCHEME_LAYERS};
pub use presentation::{
    default_selection, layers_for_selection, RecommendationOrder, RecommendationView,
};
pub use router::{dss_router, evaluate, RecommendationRequest, RecommendationResponse};
pub use scoring::{score_context, score_criteria, ScoreBreakdown};
