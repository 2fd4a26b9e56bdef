use crate::infra::{load_engine, load_engine_from, parse_date, parse_order, ContextFlags};
use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Args};
use fra_atlas::config::AppConfig;
use fra_atlas::decision_support::{
    evaluate, Claim, ClaimImporter, ClaimPriority, ClaimType, ContextSignals,
    RecommendationEngine, RecommendationOrder, RecommendationRequest, RecommendationResponse,
    SchemeId,
};
use fra_atlas::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SchemesArgs {
    /// Scheme catalog JSON to use instead of the built-in schemes
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["claim", "claims_csv"])))]
pub(crate) struct RecommendArgs {
    /// Claim JSON file in the review panel format
    #[arg(long)]
    pub(crate) claim: Option<PathBuf>,
    /// CSV batch of claims (id,type,district,priority,area,families,...)
    #[arg(long)]
    pub(crate) claims_csv: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) context: ContextFlags,
    /// Result ordering: score or alphabetical
    #[arg(long, default_value = "score", value_parser = parse_order)]
    pub(crate) order: RecommendationOrder,
    /// Scheme ids to draw as map layers (defaults to the top two)
    #[arg(long = "select")]
    pub(crate) selected: Vec<String>,
    /// Include map layer geometry in the output
    #[arg(long)]
    pub(crate) layers: bool,
    /// Scheme catalog JSON to use instead of the built-in schemes
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print responses as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reporting date used for the days-pending figure (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Sort the demo output alphabetically instead of by score
    #[arg(long)]
    pub(crate) alphabetical: bool,
}

/// An explicit `--catalog` wins over `DSS_CATALOG_PATH`.
fn engine_for(catalog: Option<PathBuf>) -> Result<RecommendationEngine, AppError> {
    match catalog {
        Some(path) => load_engine_from(Some(&path)),
        None => load_engine(&AppConfig::load()?.decision_support),
    }
}

pub(crate) fn run_schemes(args: SchemesArgs) -> Result<(), AppError> {
    let engine = engine_for(args.catalog)?;
    let schemes = engine.schemes();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schemes)?);
        return Ok(());
    }

    println!("Scheme catalog ({} schemes)", schemes.len());
    for scheme in &schemes {
        println!(
            "- {} | {} | {} | {}",
            scheme.id, scheme.name, scheme.category, scheme.color
        );
    }
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        claim,
        claims_csv,
        context,
        order,
        selected,
        layers,
        catalog,
        json,
    } = args;

    let engine = engine_for(catalog)?;

    let mut claims = Vec::new();
    if let Some(path) = claim {
        let file = std::fs::File::open(path)?;
        claims.push(serde_json::from_reader::<_, Claim>(std::io::BufReader::new(file))?);
    }
    if let Some(path) = claims_csv {
        claims.extend(ClaimImporter::from_path(path)?);
    }

    let selected_schemes = if selected.is_empty() {
        None
    } else {
        Some(selected.into_iter().map(SchemeId).collect::<Vec<_>>())
    };
    let signals = context.signals();

    let responses: Vec<RecommendationResponse> = claims
        .into_iter()
        .map(|claim| {
            evaluate(
                &engine,
                RecommendationRequest {
                    claim: Some(claim),
                    context: Some(signals),
                    order,
                    selected_schemes: selected_schemes.clone(),
                },
            )
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&responses)?);
        return Ok(());
    }

    for response in &responses {
        render_response(response, layers);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let order = if args.alphabetical {
        RecommendationOrder::Alphabetical
    } else {
        RecommendationOrder::Score
    };

    let claim = sample_claim();
    let context = sample_context();
    let engine = RecommendationEngine::standard();

    println!("Decision support demo");
    println!(
        "Claim {} ({}) in {}, {} priority",
        claim.id, claim.claim_type, claim.district, claim.priority
    );
    if let Some(days) = claim.days_pending(today) {
        println!("Pending for {days} day(s) as of {today}");
    }
    println!("\nContext signals");
    for signal in context.active() {
        println!("- {} (+{})", signal.reason(), signal.weight());
    }

    let response = evaluate(
        &engine,
        RecommendationRequest {
            claim: Some(claim),
            context: Some(context),
            order,
            selected_schemes: None,
        },
    );
    render_response(&response, true);
    Ok(())
}

/// Claim shown on the decision support page.
pub(crate) fn sample_claim() -> Claim {
    let mut claim = Claim::new(
        "FR-DSS-0001",
        ClaimType::CommunityForestRights,
        "Barwani",
        ClaimPriority::High,
    )
    .with_area(12.3)
    .with_families(36);
    claim.village = Some("Khandwa".to_string());
    claim.submitted_on = NaiveDate::from_ymd_opt(2025, 1, 12);
    claim
}

/// Signals the review panel starts with.
pub(crate) fn sample_context() -> ContextSignals {
    ContextSignals {
        near_protected_area: true,
        has_wildlife_corridor: false,
        low_connectivity: true,
        health_risk_season: false,
    }
}

fn render_response(response: &RecommendationResponse, include_layers: bool) {
    let claim_label = response
        .claim_id
        .as_ref()
        .map(|id| id.0.as_str())
        .unwrap_or("(no claim)");
    println!(
        "\nRecommended schemes for {} ({} matches, sorted by {})",
        claim_label,
        response.recommendations.len(),
        response.order.label()
    );

    if response.recommendations.is_empty() {
        println!("- none");
    }
    for view in &response.recommendations {
        println!("- {} [{}] score {}", view.name, view.category, view.score);
        for reason in &view.explanation {
            println!("    * {reason}");
        }
        println!("    benefits: {}", view.benefits.join(" • "));
    }

    if include_layers {
        if response.layers.is_empty() {
            println!("\nMap layers: none");
        } else {
            println!("\nMap layers");
            for layer in &response.layers {
                let bounds = layer.bounds_percent;
                println!(
                    "- {} {} left {}% top {}% width {}% height {}%",
                    layer.id, layer.color, bounds.left, bounds.top, bounds.width, bounds.height
                );
            }
        }
    }
}
