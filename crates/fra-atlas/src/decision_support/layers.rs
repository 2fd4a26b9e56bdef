use serde::{Deserialize, Serialize};

use super::catalog::SchemeId;
use super::engine::Recommendation;

pub const MAX_SCHEME_LAYERS: usize = 4;

const BASE_LEFT: u32 = 10;
const BASE_TOP: u32 = 15;
const BASE_WIDTH: u32 = 22;
const BASE_HEIGHT: u32 = 16;
const LEFT_STEP: u32 = 8;
const TOP_STEP: u32 = 6;

/// Placement of an overlay as percentages of the map canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerBounds {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl LayerBounds {
    /// Staggered placeholder rectangle for the `index`-th layer. Not derived from geography.
    fn staggered(index: usize) -> Self {
        let step = index as u32;
        let even = index % 2 == 0;
        Self {
            left: BASE_LEFT + LEFT_STEP * step,
            top: BASE_TOP + TOP_STEP * step,
            width: if even { BASE_WIDTH + 4 } else { BASE_WIDTH - 2 },
            height: if even { BASE_HEIGHT - 1 } else { BASE_HEIGHT + 3 },
        }
    }
}

/// Map overlay visualising the focus area of a recommended scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeLayer {
    pub id: String,
    pub scheme_id: SchemeId,
    pub name: String,
    pub color: String,
    pub bounds_percent: LayerBounds,
}

/// Builds overlays for the first [`MAX_SCHEME_LAYERS`] recommendations, in input order.
pub fn build_scheme_layers(recommendations: &[Recommendation]) -> Vec<SchemeLayer> {
    recommendations
        .iter()
        .take(MAX_SCHEME_LAYERS)
        .enumerate()
        .map(|(index, recommendation)| SchemeLayer {
            id: format!("layer_{}", recommendation.scheme_id),
            scheme_id: recommendation.scheme_id.clone(),
            name: recommendation.name.clone(),
            color: recommendation.color.clone(),
            bounds_percent: LayerBounds::staggered(index),
        })
        .collect()
}
