use chrono::NaiveDate;
use fra_atlas::config::DecisionSupportConfig;
use fra_atlas::decision_support::{
    ContextSignals, RecommendationEngine, RecommendationOrder, SchemeCatalog,
};
use fra_atlas::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine over the configured catalog, falling back to the built-in schemes.
pub(crate) fn load_engine(config: &DecisionSupportConfig) -> Result<RecommendationEngine, AppError> {
    load_engine_from(config.catalog_path.as_deref())
}

pub(crate) fn load_engine_from(path: Option<&Path>) -> Result<RecommendationEngine, AppError> {
    let catalog = match path {
        Some(path) => {
            let catalog = SchemeCatalog::from_path(path)?;
            info!(path = %path.display(), schemes = catalog.len(), "loaded scheme catalog");
            catalog
        }
        None => SchemeCatalog::standard(),
    };
    Ok(RecommendationEngine::new(catalog))
}

/// Flags shared by the CLI commands that score claims.
#[derive(clap::Args, Debug, Default, Clone, Copy)]
pub(crate) struct ContextFlags {
    /// Claim lies near a protected area
    #[arg(long)]
    pub(crate) near_protected_area: bool,
    /// Claim overlaps a wildlife corridor
    #[arg(long)]
    pub(crate) wildlife_corridor: bool,
    /// Poor last-mile connectivity around the claim
    #[arg(long)]
    pub(crate) low_connectivity: bool,
    /// Seasonal health risks are expected
    #[arg(long)]
    pub(crate) health_risk_season: bool,
}

impl ContextFlags {
    pub(crate) fn signals(&self) -> ContextSignals {
        ContextSignals {
            near_protected_area: self.near_protected_area,
            has_wildlife_corridor: self.wildlife_corridor,
            low_connectivity: self.low_connectivity,
            health_risk_season: self.health_risk_season,
        }
    }
}

pub(crate) fn parse_order(raw: &str) -> Result<RecommendationOrder, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "score" => Ok(RecommendationOrder::Score),
        "alpha" | "alphabetical" => Ok(RecommendationOrder::Alphabetical),
        other => Err(format!(
            "unknown order '{other}' (expected 'score' or 'alphabetical')"
        )),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
