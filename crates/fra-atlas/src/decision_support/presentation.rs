//! Caller-side shaping of engine output: ordering, default selection and explained views.
//!
//! Nothing here changes scores. The committee review panel applies these after the engine has
//! ranked the catalog.

use serde::{Deserialize, Serialize};

use super::catalog::SchemeId;
use super::engine::Recommendation;
use super::layers::{build_scheme_layers, SchemeLayer};

/// Number of recommendations pre-selected for the map when the reviewer has not chosen any.
pub const DEFAULT_SELECTION_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationOrder {
    /// Engine order: score descending, catalog order among ties.
    #[default]
    Score,
    #[serde(alias = "alpha")]
    Alphabetical,
}

impl RecommendationOrder {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationOrder::Score => "Score (High → Low)",
            RecommendationOrder::Alphabetical => "Alphabetical",
        }
    }

    /// Reorders `recommendations` in place. Both orders are stable.
    ///
    /// Alphabetical order compares lowercased names, standing in for locale-aware collation.
    pub fn apply(&self, recommendations: &mut [Recommendation]) {
        match self {
            RecommendationOrder::Score => {
                recommendations.sort_by(|a, b| b.score.cmp(&a.score));
            }
            RecommendationOrder::Alphabetical => {
                recommendations
                    .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
        }
    }
}

/// Top recommendations to show on the map before the reviewer picks anything.
pub fn default_selection(recommendations: &[Recommendation]) -> Vec<SchemeId> {
    recommendations
        .iter()
        .take(DEFAULT_SELECTION_SIZE)
        .map(|recommendation| recommendation.scheme_id.clone())
        .collect()
}

/// Layers for the selected schemes, following the order of `recommendations` rather than the
/// order of `selected`.
pub fn layers_for_selection(
    recommendations: &[Recommendation],
    selected: &[SchemeId],
) -> Vec<SchemeLayer> {
    let chosen: Vec<Recommendation> = recommendations
        .iter()
        .filter(|recommendation| selected.contains(&recommendation.scheme_id))
        .cloned()
        .collect();
    build_scheme_layers(&chosen)
}

/// Recommendation as rendered on a review card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    pub scheme_id: SchemeId,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub benefits: Vec<String>,
    pub score: u32,
    /// Width of the score bar, capped at 100.
    pub score_percent: u32,
    pub explanation: Vec<String>,
}

impl From<&Recommendation> for RecommendationView {
    fn from(recommendation: &Recommendation) -> Self {
        Self {
            scheme_id: recommendation.scheme_id.clone(),
            name: recommendation.name.clone(),
            category: recommendation.category.clone(),
            icon: recommendation.icon.clone(),
            color: recommendation.color.clone(),
            benefits: recommendation.benefits.clone(),
            score: recommendation.score,
            score_percent: recommendation.score.min(100),
            explanation: recommendation.explain(),
        }
    }
}
