use super::super::domain::ContextSignals;
use super::ScoreBreakdown;

/// Scores the map context around a claim. The result does not depend on the scheme, so the
/// engine computes it once per request.
pub fn score_context(signals: &ContextSignals) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    for signal in signals.active() {
        breakdown.award(signal.weight(), signal.reason());
    }
    breakdown
}
