mod context;
mod criteria;

pub use context::score_context;
pub use criteria::score_criteria;

use serde::{Deserialize, Serialize};

/// Additive score with the explanation trail that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub reasons: Vec<String>,
}

impl ScoreBreakdown {
    pub(crate) fn award(&mut self, points: u32, reason: impl Into<String>) {
        self.score = self.score.saturating_add(points);
        self.reasons.push(reason.into());
    }
}
