use super::common::*;
use crate::decision_support::catalog::SchemeId;
use crate::decision_support::presentation::{
    default_selection, layers_for_selection, RecommendationOrder, RecommendationView,
};

#[test]
fn alphabetical_order_ignores_case_and_keeps_ties_stable() {
    let mut recommendations = vec![
        recommendation("sch-1", "livelihood Mission", 40),
        recommendation("sch-2", "Educational Support", 30),
        recommendation("sch-3", "Healthcare Access", 90),
        recommendation("sch-4", "educational support", 80),
    ];

    RecommendationOrder::Alphabetical.apply(&mut recommendations);

    assert_eq!(ids(&recommendations), vec!["sch-2", "sch-4", "sch-3", "sch-1"]);

    RecommendationOrder::Score.apply(&mut recommendations);
    assert_eq!(ids(&recommendations), vec!["sch-3", "sch-4", "sch-1", "sch-2"]);
}

#[test]
fn order_accepts_panel_alias() {
    let order: RecommendationOrder = serde_json::from_str("\"alpha\"").expect("alias parses");
    assert_eq!(order, RecommendationOrder::Alphabetical);
    assert_eq!(RecommendationOrder::default(), RecommendationOrder::Score);
}

#[test]
fn default_selection_takes_the_top_two() {
    let engine = standard_engine();
    let recommendations = engine.recommend(Some(&barwani_claim()), Some(&panel_context()));

    assert_eq!(
        default_selection(&recommendations),
        vec![SchemeId::from("sch-infra"), SchemeId::from("sch-education")]
    );
    assert!(default_selection(&[]).is_empty());
}

#[test]
fn selected_layers_follow_recommendation_order() {
    let engine = standard_engine();
    let recommendations = engine.recommend(Some(&barwani_claim()), Some(&panel_context()));
    let selected = vec![SchemeId::from("sch-livelihood"), SchemeId::from("sch-infra")];

    let layers = layers_for_selection(&recommendations, &selected);

    let scheme_ids: Vec<&str> = layers.iter().map(|layer| layer.scheme_id.as_str()).collect();
    assert_eq!(scheme_ids, vec!["sch-infra", "sch-livelihood"]);
    assert_eq!(layers[1].bounds_percent.left, 18);
}

#[test]
fn view_caps_score_bar_and_explains_reasons() {
    let mut strong = recommendation("sch-x", "X", 130);
    strong.reasons = vec!["A".to_string(), "B".to_string(), "A".to_string()];

    let view = RecommendationView::from(&strong);

    assert_eq!(view.score, 130);
    assert_eq!(view.score_percent, 100);
    assert_eq!(view.explanation, vec!["A", "B"]);
    assert_eq!(RecommendationView::from(&recommendation("sch-y", "Y", 42)).score_percent, 42);
}
