//! Integration tests for the worklist filter layer
//!
//! These tests drive a real controller end-to-end through recording sinks,
//! covering the full filter lifecycle: bootstrap seeding, facet selection,
//! facet replacement, free-text accumulation, removal, and the derived
//! reload payloads and URL replacements at every step.

use worklist::config::SyncConfig;
use worklist::context::PageContext;
use worklist::controller::{FilterController, FilterIntent, ReloadSink};
use worklist::query::{ProjectionMode, QueryPayload, QueryProjector};
use worklist::tags::FilterToken;
use worklist::urlstate::{HistoryWriter, UrlCodec};

/// Reload sink recording every emitted payload
#[derive(Default)]
struct CapturedReloads {
    payloads: Vec<QueryPayload>,
}

impl ReloadSink for CapturedReloads {
    fn request_reload(&mut self, payload: QueryPayload) {
        self.payloads.push(payload);
    }
}

/// History writer pinned to a fixed location path
struct CapturedHistory {
    pathname: String,
    replaced: Vec<String>,
}

impl CapturedHistory {
    fn at(pathname: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            replaced: Vec::new(),
        }
    }
}

impl HistoryWriter for CapturedHistory {
    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn replace_state(&mut self, path: &str) {
        self.replaced.push(path.to_string());
    }
}

fn controller_at(
    path: &str,
    mode: ProjectionMode,
) -> FilterController<CapturedReloads, CapturedHistory> {
    let config = SyncConfig::default();
    FilterController::new(
        config.registry().unwrap(),
        QueryProjector::new(mode),
        config.codec(),
        CapturedReloads::default(),
        CapturedHistory::at(path),
    )
}

fn facet(text: &str, value: &str) -> FilterIntent {
    FilterIntent::FacetSelected {
        prefix: None,
        text: text.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn test_full_filter_scenario_on_tag_list_deployment() {
    let mut controller = controller_at("/holdingpen/list", ProjectionMode::TagList);

    // Select status "In process"
    controller.handle(facet("In process", "status:\"In process\""));
    assert_eq!(controller.tags().values(), vec!["status:\"In process\""]);
    assert_eq!(
        controller.reload_sink().payloads.last().unwrap(),
        &QueryPayload::Tags {
            tags: vec!["status:\"In process\"".to_string()],
        }
    );
    assert_eq!(
        controller.history_writer().replaced.last().unwrap(),
        "list/status%3A%22In%20process%22"
    );

    // Replace with status "Done": size stays 1, URL reflects only "Done"
    controller.handle(facet("Done", "status:\"Done\""));
    assert_eq!(controller.tags().len(), 1);
    assert_eq!(controller.tags().values(), vec!["status:\"Done\""]);
    assert_eq!(
        controller.history_writer().replaced.last().unwrap(),
        "list/status%3A%22Done%22"
    );

    // Add free text "alice": accumulates after the facet token
    controller.handle(FilterIntent::FreeTextCommitted {
        text: "alice".to_string(),
    });
    assert_eq!(
        controller.tags().values(),
        vec!["status:\"Done\"", "alice"]
    );
    assert_eq!(
        controller.reload_sink().payloads.last().unwrap(),
        &QueryPayload::Tags {
            tags: vec!["status:\"Done\"".to_string(), "alice".to_string()],
        }
    );
    assert_eq!(
        controller.history_writer().replaced.last().unwrap(),
        "list/status%3A%22Done%22 AND alice"
    );

    // One emission pair per intent
    assert_eq!(controller.reload_sink().payloads.len(), 3);
    assert_eq!(controller.history_writer().replaced.len(), 3);
}

#[test]
fn test_joined_search_deployment_produces_query_string() {
    let mut controller = controller_at("/holdingpen/list", ProjectionMode::JoinedSearch);

    controller.handle(facet("Done", "status:\"Done\""));
    controller.handle(FilterIntent::FreeTextCommitted {
        text: "alice".to_string(),
    });

    assert_eq!(
        controller.reload_sink().payloads.last().unwrap(),
        &QueryPayload::Search {
            search: "status:\"Done\" AND alice".to_string(),
        }
    );
}

#[test]
fn test_removing_last_token_collapses_to_root_marker() {
    let mut controller = controller_at("/holdingpen/list", ProjectionMode::TagList);

    controller.handle(facet("Done", "status:\"Done\""));
    controller.handle(FilterIntent::TokenRemoved {
        value: "status:\"Done\"".to_string(),
    });

    assert!(controller.tags().is_empty());
    assert_eq!(
        controller.reload_sink().payloads.last().unwrap(),
        &QueryPayload::Tags { tags: Vec::new() }
    );
    assert_eq!(controller.history_writer().replaced.last().unwrap(), "list/.");
}

#[test]
fn test_bootstrap_seeding_then_initial_recompute() {
    let ctx = PageContext::from_json(
        r#"{
            "tags": [
                {"text": "New", "value": "status:\"New\""},
                {"text": "Done", "value": "status:\"Done\""},
                {"text": "alice", "value": "alice"}
            ],
            "menus": [
                {"prefix": "status:"},
                {"prefix": "type:"},
                {"prefix": "f:"}
            ]
        }"#,
    )
    .unwrap();

    let mut controller = FilterController::from_context(
        &ctx,
        QueryProjector::new(ProjectionMode::TagList),
        UrlCodec::default(),
        CapturedReloads::default(),
        CapturedHistory::at("/holdingpen/list"),
    )
    .unwrap();

    // Seeding collapsed the duplicate status facet and emitted nothing
    assert_eq!(controller.tags().values(), vec!["status:\"Done\"", "alice"]);
    assert!(controller.reload_sink().payloads.is_empty());

    // The host requests the initial load explicitly
    controller.handle(FilterIntent::RecomputeRequested);
    assert_eq!(controller.reload_sink().payloads.len(), 1);
    assert_eq!(
        controller.history_writer().replaced.last().unwrap(),
        "list/status%3A%22Done%22 AND alice"
    );
}

#[test]
fn test_decode_slug_reseeds_an_equivalent_controller() {
    let mut first = controller_at("/holdingpen/list", ProjectionMode::TagList);
    first.handle(facet("In process", "status:\"In process\""));
    first.handle(FilterIntent::FreeTextCommitted {
        text: "alice".to_string(),
    });

    // Take the slug the first controller wrote, decode it, and seed a
    // fresh controller from it the way a bookmarked page load would
    let codec = UrlCodec::default();
    let slug = first
        .history_writer()
        .replaced
        .last()
        .unwrap()
        .strip_prefix("list/")
        .unwrap()
        .to_string();
    let values = codec.decode_slug(&slug);

    let mut second = controller_at("/holdingpen/list", ProjectionMode::TagList);
    second.seed(values.into_iter().map(FilterToken::free_text));

    assert_eq!(second.tags().values(), first.tags().values());
}

#[test]
fn test_query_only_view_replaces_path_directly() {
    let mut controller = controller_at("/records/search", ProjectionMode::JoinedSearch);

    controller.handle(facet("Record", "type:Record"));

    assert_eq!(
        controller.history_writer().replaced.last().unwrap(),
        "type%3ARecord"
    );
}

#[test]
fn test_emissions_are_idempotent_without_mutation() {
    let mut controller = controller_at("/holdingpen/list", ProjectionMode::TagList);
    controller.handle(facet("Done", "status:\"Done\""));

    controller.handle(FilterIntent::RecomputeRequested);
    controller.handle(FilterIntent::RecomputeRequested);

    let payloads = &controller.reload_sink().payloads;
    let replaced = &controller.history_writer().replaced;
    assert_eq!(payloads[1], payloads[2]);
    assert_eq!(replaced[1], replaced[2]);
}
