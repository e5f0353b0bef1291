mod common;

use assert2::{check, let_assert};
use common::{TempWorkspace, widget_project};
use doxysearch::{
    EngineKind, Entity, EntityKind, Field, MatchType, ParseOptions, SearchEngine, SearchError,
    SearchOptions, SearchQuery, SearchStrategy, parse,
};
use rstest::rstest;

async fn loaded_engine(workspace: &TempWorkspace, kind: EngineKind) -> SearchEngine {
    let_assert!(Ok(result) = parse(workspace.path(), &ParseOptions::default()).await);
    let mut engine = SearchEngine::new(kind);
    engine.load_entities(result.into_entities());
    engine
}

fn names<'a>(results: &'a [doxysearch::SearchResult<'_>]) -> Vec<&'a str> {
    results.iter().map(|r| r.entity.name.as_str()).collect()
}

#[rstest]
#[tokio::test]
async fn simple_search_ranks_exact_name_first(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Simple).await;
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("widget")));

    check!(names(&outcome.results) == vec!["Widget"]);
    let widget = &outcome.results[0];
    check!(widget.relevance == 1.0);
    check!(widget.matched_fields[0].field_name == Field::Name);
    check!(widget.matched_fields[0].match_type == MatchType::Exact);
    check!(widget.matched_fields[0].score == 1.0);
    check!(widget.matched_fields.iter().any(|m| m.field_name == Field::QualifiedName));

    check!(outcome.stats.total_entities == 5);
    check!(outcome.stats.matched_entities == 1);
    check!(outcome.stats.returned_results == 1);
    check!(!outcome.stats.cache_used);
}

#[rstest]
#[tokio::test]
async fn simple_search_prefix_tier(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Simple).await;
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("dr")));

    let_assert!(Some(draw) = outcome.results.iter().find(|r| r.entity.name == "draw"));
    let name = draw.matched_fields.iter().find(|m| m.field_name == Field::Name);
    let_assert!(Some(name) = name);
    check!(name.match_type == MatchType::Prefix);
    check!(name.score == 0.9);
}

#[rstest]
#[tokio::test]
async fn simple_search_substring_tier(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Simple).await;
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("raw")));

    let_assert!(Some(draw) = outcome.results.iter().find(|r| r.entity.name == "draw"));
    let name = &draw.matched_fields[0];
    check!(name.field_name == Field::Name);
    check!(name.match_type == MatchType::Substring);
    check!((0.5..=0.8).contains(&name.score));
    check!((name.score - 0.725).abs() < 1e-9);
}

#[rstest]
#[tokio::test]
async fn simple_search_filters_kinds_and_caps(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Simple).await;

    let query = SearchQuery::new("ns").with_kinds([EntityKind::Function, EntityKind::Enum]);
    let_assert!(Ok(outcome) = engine.search(&query));
    check!(names(&outcome.results) == vec!["helper", "Color"]);
    check!(outcome.stats.total_entities == 2);

    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("ns").with_limit(2)));
    check!(outcome.len() == 2);
    check!(outcome.stats.matched_entities == 4);
    check!(outcome.stats.returned_results == 2);
}

#[rstest]
#[tokio::test]
async fn simple_search_ties_keep_snapshot_order(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Simple).await;
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("ns::")));

    // Widget, helper and Color all match only on a "ns::" qualified-name prefix.
    check!(names(&outcome.results) == vec!["Widget", "helper", "Color"]);
    check!(outcome.results.iter().all(|r| (r.relevance - 0.72).abs() < 1e-9));
}

#[rstest]
#[tokio::test]
async fn simple_search_respects_max_results(widget_project: TempWorkspace) {
    let mut engine = loaded_engine(&widget_project, EngineKind::Simple).await;
    engine.configure(&SearchOptions {
        max_results: Some(1),
        ..SearchOptions::default()
    });
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("ns").with_limit(10)));
    check!(outcome.len() == 1);
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn blank_term_matches_nothing(widget_project: TempWorkspace, #[case] term: &str) {
    for kind in [EngineKind::Simple, EngineKind::Fuzzy] {
        let engine = loaded_engine(&widget_project, kind).await;
        let_assert!(Ok(outcome) = engine.search(&SearchQuery::new(term)));
        check!(outcome.is_empty());
        check!(outcome.stats.total_entities == 5);
        check!(outcome.stats.matched_entities == 0);
    }
}

#[rstest]
#[tokio::test]
async fn simple_search_exact_only(widget_project: TempWorkspace) {
    let mut engine = loaded_engine(&widget_project, EngineKind::Simple).await;
    engine.configure(&SearchOptions {
        exact_match: Some(true),
        ..SearchOptions::default()
    });
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("dr")));
    check!(outcome.is_empty());
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("ns::helper")));
    check!(names(&outcome.results) == vec!["helper"]);
}

#[rstest]
#[tokio::test]
async fn simple_search_highlights_description(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Simple).await;
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("DRAWABLE")));

    check!(names(&outcome.results) == vec!["Widget"]);
    let_assert!(Some(highlights) = &outcome.results[0].highlights);
    check!(highlights.len() == 1);
    check!(highlights[0].field == Field::BriefDescription);
    check!(highlights[0].start == 2);
    check!(highlights[0].length == 8);
    check!(highlights[0].context == "A drawable widget.");
}

#[rstest]
#[tokio::test]
async fn fuzzy_search_tolerates_typos(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Fuzzy).await;
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("hepler")));

    check!(names(&outcome.results) == vec!["helper"]);
    let helper = &outcome.results[0];
    check!(helper.relevance > 0.0);
    check!(helper.relevance < 1.0);
    check!(helper.matched_fields.iter().all(|m| m.match_type == MatchType::Fuzzy));
}

#[rstest]
#[tokio::test]
async fn fuzzy_search_exact_name_scores_one(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Fuzzy).await;
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("widget")));

    check!(outcome.results[0].entity.name == "Widget");
    check!(outcome.results[0].relevance == 1.0);
}

#[rstest]
#[tokio::test]
async fn fuzzy_search_filters_kinds_and_caps(widget_project: TempWorkspace) {
    let mut engine = loaded_engine(&widget_project, EngineKind::Fuzzy).await;

    let query = SearchQuery::new("ns").with_kinds([EntityKind::Function, EntityKind::Enum]);
    let_assert!(Ok(outcome) = engine.search(&query));
    let mut found = names(&outcome.results);
    found.sort_unstable();
    check!(found == vec!["Color", "helper"]);
    check!(outcome.stats.total_entities == 2);
    check!(outcome.stats.matched_entities == 2);
    check!(outcome.stats.returned_results == 2);

    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("ns").with_limit(2)));
    check!(outcome.results[0].entity.name == "ns");
    check!(outcome.stats.total_entities == 5);
    check!(outcome.stats.matched_entities == 4);
    check!(outcome.stats.returned_results == 2);

    engine.configure(&SearchOptions {
        max_results: Some(1),
        ..SearchOptions::default()
    });
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("ns").with_limit(10)));
    check!(outcome.len() == 1);
    check!(outcome.stats.matched_entities == 4);
    check!(outcome.stats.returned_results == 1);
}

#[test]
fn fuzzy_search_requires_loaded_entities() {
    let engine = SearchEngine::new(EngineKind::Fuzzy);
    let_assert!(Err(e) = engine.search(&SearchQuery::new("widget")));
    check!(e == SearchError::EngineNotLoaded { engine: EngineKind::Fuzzy });
}

#[rstest]
#[tokio::test]
async fn semantic_search_fails_loudly(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Semantic).await;
    let_assert!(Err(e) = engine.search(&SearchQuery::new("widget")));
    check!(e == SearchError::NotImplemented { engine: EngineKind::Semantic });
    check!(e.to_string().contains("semantic"));
}

#[rstest]
#[tokio::test]
async fn load_entities_replaces_snapshot(widget_project: TempWorkspace) {
    let mut engine = loaded_engine(&widget_project, EngineKind::Simple).await;
    engine.load_entities(Vec::<Entity>::new());
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("widget")));
    check!(outcome.is_empty());
    check!(outcome.stats.total_entities == 0);
}

#[rstest]
#[tokio::test]
async fn search_outcome_serializes_camel_case(widget_project: TempWorkspace) {
    let engine = loaded_engine(&widget_project, EngineKind::Simple).await;
    let_assert!(Ok(outcome) = engine.search(&SearchQuery::new("widget")));
    let_assert!(Ok(json) = serde_json::to_value(&outcome));

    check!(json["stats"]["returnedResults"] == 1);
    check!(json["results"][0]["matchedFields"][0]["fieldName"] == "name");
    check!(json["results"][0]["matchedFields"][0]["matchType"] == "exact");
    check!(json["results"][0]["entity"]["qualifiedName"] == "ns::Widget");
}
