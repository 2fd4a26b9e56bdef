use super::super::catalog::SchemeDefinition;
use super::super::domain::Claim;
use super::ScoreBreakdown;

const CLAIM_TYPE_POINTS: u32 = 20;
const FAMILIES_POINTS: u32 = 10;
const AREA_POINTS: u32 = 10;
const DISTRICT_POINTS: u32 = 10;

/// Scores how well a claim fits one scheme's targeting rules.
///
/// Checks run in a fixed order so the reasons always read: claim type, families, area,
/// district, priority boost.
pub fn score_criteria(claim: &Claim, scheme: &SchemeDefinition) -> ScoreBreakdown {
    let criteria = &scheme.criteria;
    let mut breakdown = ScoreBreakdown::default();

    if criteria.claim_types.contains(&claim.claim_type) {
        breakdown.award(CLAIM_TYPE_POINTS, "Matches claim type");
    }

    if let (Some(threshold), Some(families)) = (criteria.min_families, claim.families) {
        if families >= threshold {
            breakdown.award(FAMILIES_POINTS, format!("Families ≥ {threshold}"));
        }
    }

    if let (Some(threshold), Some(area)) = (criteria.min_area, claim.area) {
        if area >= threshold {
            breakdown.award(AREA_POINTS, format!("Area ≥ {threshold} ha"));
        }
    }

    if criteria
        .districts_priority
        .iter()
        .any(|district| district == &claim.district)
    {
        breakdown.award(
            DISTRICT_POINTS,
            format!("Priority district: {}", claim.district),
        );
    }

    let boost = criteria
        .priority_boost
        .get(&claim.priority)
        .copied()
        .unwrap_or(0);
    if boost > 0 {
        breakdown.award(
            boost,
            format!("{} priority boost (+{boost})", claim.priority),
        );
    }

    breakdown
}
