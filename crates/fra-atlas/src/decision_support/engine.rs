use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::catalog::{SchemeCatalog, SchemeDefinition, SchemeId, SchemeSummary};
use super::domain::{Claim, ContextSignals};
use super::scoring::{score_context, score_criteria, ScoreBreakdown};

/// A scored, explained association between a claim and a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub scheme_id: SchemeId,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub benefits: Vec<String>,
    pub score: u32,
    /// Criteria reasons followed by context reasons; may repeat.
    pub reasons: Vec<String>,
}

impl Recommendation {
    fn from_scheme(scheme: &SchemeDefinition, score: u32, reasons: Vec<String>) -> Self {
        Self {
            scheme_id: scheme.id.clone(),
            name: scheme.name.clone(),
            category: scheme.category.clone(),
            icon: scheme.icon.clone(),
            color: scheme.color.clone(),
            benefits: scheme.benefits.clone(),
            score,
            reasons,
        }
    }

    /// Reasons with repeats removed, first occurrence wins.
    pub fn explain(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.reasons
            .iter()
            .filter(|reason| seen.insert(reason.as_str()))
            .cloned()
            .collect()
    }
}

/// Stateless ranker over an injected scheme catalog.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    catalog: SchemeCatalog,
}

impl RecommendationEngine {
    pub fn new(catalog: SchemeCatalog) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(SchemeCatalog::standard())
    }

    pub fn schemes(&self) -> Vec<SchemeSummary> {
        self.catalog.summaries()
    }

    /// Ranks every scheme for `claim`, highest score first.
    ///
    /// Schemes scoring zero are dropped. Equal scores keep catalog order because
    /// `sort_by` is stable. A missing claim yields no recommendations; a missing context is
    /// treated as all signals lowered.
    pub fn recommend(
        &self,
        claim: Option<&Claim>,
        context: Option<&ContextSignals>,
    ) -> Vec<Recommendation> {
        let Some(claim) = claim else {
            return Vec::new();
        };
        let context = context.copied().unwrap_or_default();
        let ScoreBreakdown {
            score: context_score,
            reasons: context_reasons,
        } = score_context(&context);

        let mut recommendations: Vec<Recommendation> = self
            .catalog
            .iter()
            .map(|scheme| {
                let ScoreBreakdown { score, mut reasons } = score_criteria(claim, scheme);
                reasons.extend(context_reasons.iter().cloned());
                Recommendation::from_scheme(scheme, score.saturating_add(context_score), reasons)
            })
            .filter(|recommendation| recommendation.score > 0)
            .collect();

        recommendations.sort_by(|a, b| b.score.cmp(&a.score));
        recommendations
    }
}

fn standard_engine() -> &'static RecommendationEngine {
    static ENGINE: OnceLock<RecommendationEngine> = OnceLock::new();
    ENGINE.get_or_init(RecommendationEngine::standard)
}

/// Ranks the built-in catalog for `claim`. See [`RecommendationEngine::recommend`].
pub fn recommend_schemes(
    claim: Option<&Claim>,
    context: Option<&ContextSignals>,
) -> Vec<Recommendation> {
    standard_engine().recommend(claim, context)
}

pub fn explain_recommendation(recommendation: &Recommendation) -> Vec<String> {
    recommendation.explain()
}

/// Picker projection of the built-in catalog.
pub fn scheme_catalog() -> Vec<SchemeSummary> {
    standard_engine().schemes()
}
