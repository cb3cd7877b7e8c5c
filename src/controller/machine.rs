//! The filter controller state machine
//!
//! A single-state synchronous machine: every inbound intent runs to
//! completion on the caller's thread and fans out to the two collaborators
//! in a fixed order — mutate, project, reload emission, URL replacement.
//! There is no debouncing; rapid successive intents each produce a full
//! reload and replacement, and the widget layer is expected to throttle
//! rapid-fire input if it needs to.

use super::intents::FilterIntent;
use crate::context::PageContext;
use crate::facets::{FacetError, FacetRegistry, apply_free_text, apply_menu_selection};
use crate::query::{QueryPayload, QueryProjector};
use crate::tags::{FilterToken, TagSet};
use crate::urlstate::{HistoryWriter, UrlCodec};
use tracing::debug;

/// Consumer of freshly projected reload payloads
///
/// Implementations issue the actual list query. Because the controller has
/// already committed its local state when the payload is emitted, an
/// implementation must apply a last-response-wins (or request-generation
/// tag) discipline so a stale response never overwrites the rows of a newer
/// filter state. Failures are surfaced to the user by the implementation;
/// the filter state is never rolled back on remote failure.
pub trait ReloadSink {
    /// Deliver the payload for the current filter state
    fn request_reload(&mut self, payload: QueryPayload);
}

/// Orchestrates the tag set, reconciler, projector and URL codec
///
/// Owns the authoritative [`TagSet`] and the two outbound sinks. All
/// operations are synchronous in-memory mutations; the only asynchronous
/// work in the wider system (the network reload) lives behind the
/// [`ReloadSink`] implementor.
pub struct FilterController<R, H> {
    tags: TagSet,
    registry: FacetRegistry,
    projector: QueryProjector,
    codec: UrlCodec,
    reload: R,
    history: H,
}

impl<R: ReloadSink, H: HistoryWriter> FilterController<R, H> {
    /// Create a controller with an empty tag set
    #[must_use]
    pub const fn new(
        registry: FacetRegistry,
        projector: QueryProjector,
        codec: UrlCodec,
        reload: R,
        history: H,
    ) -> Self {
        Self {
            tags: TagSet::new(),
            registry,
            projector,
            codec,
            reload,
            history,
        }
    }

    /// Create a controller seeded from the hosting page's bootstrap context
    ///
    /// The registry is built from the context's menu bindings and the
    /// initial tokens are installed through the reconciler, so duplicate
    /// facet seeds collapse exactly like live selections. Seeding emits
    /// nothing; the host issues [`FilterIntent::RecomputeRequested`] when it
    /// wants the initial reload.
    ///
    /// # Errors
    ///
    /// Returns `FacetError` if the context declares invalid facet prefixes.
    pub fn from_context(
        ctx: &PageContext,
        projector: QueryProjector,
        codec: UrlCodec,
        reload: R,
        history: H,
    ) -> Result<Self, FacetError> {
        let mut controller = Self::new(ctx.registry()?, projector, codec, reload, history);
        controller.seed(ctx.tags.iter().cloned());
        Ok(controller)
    }

    /// Install tokens without emitting
    pub fn seed(&mut self, tokens: impl IntoIterator<Item = FilterToken>) {
        for token in tokens {
            apply_menu_selection(&self.registry, &mut self.tags, token);
        }
        self.tags.mark_clean();
    }

    /// Handle one inbound intent
    ///
    /// Emission order is fixed: mutate, project, reload emission, URL
    /// replacement — all within this call. Every intent emits exactly once,
    /// including content no-ops (duplicate adds, removals of absent values),
    /// with one exception: an empty free-text commit is swallowed entirely,
    /// as the input widget cancels such adds before any event fires.
    pub fn handle(&mut self, intent: FilterIntent) {
        match intent {
            FilterIntent::FacetSelected {
                prefix,
                text,
                value,
            } => {
                let computed = self.registry.classify(&value);
                if let Some(claimed) = &prefix
                    && computed != Some(claimed.as_str())
                {
                    debug!(%claimed, ?computed, %value, "ignoring caller-asserted prefix");
                }
                apply_menu_selection(
                    &self.registry,
                    &mut self.tags,
                    FilterToken::new(text, value),
                );
            }
            FilterIntent::FreeTextCommitted { text } => {
                if !apply_free_text(&mut self.tags, &text) {
                    debug!("swallowing empty free-text commit");
                    return;
                }
            }
            FilterIntent::TokenRemoved { value } => {
                self.tags.remove(&value);
            }
            FilterIntent::RecomputeRequested => {}
        }
        self.emit();
    }

    /// Project the current set and fan out to both sinks
    fn emit(&mut self) {
        let payload = self.projector.project(&self.tags);

        let values = self.tags.values();
        let encoded = self.codec.encode(&values);
        let placed = self.codec.place(&self.history.pathname(), &encoded);
        debug!(tokens = values.len(), slug = %placed, "filter state committed");

        self.reload.request_reload(payload);
        self.history.replace_state(&placed);
        self.tags.mark_clean();
    }

    /// The active tag set
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// The facet registry in use
    #[must_use]
    pub const fn registry(&self) -> &FacetRegistry {
        &self.registry
    }

    /// The reload sink (for inspection in tests and replay tooling)
    #[must_use]
    pub const fn reload_sink(&self) -> &R {
        &self.reload
    }

    /// The history writer (for inspection in tests and replay tooling)
    #[must_use]
    pub const fn history_writer(&self) -> &H {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ProjectionMode;
    use crate::testing::{RecordingHistory, RecordingReload};

    fn controller_at(path: &str) -> FilterController<RecordingReload, RecordingHistory> {
        FilterController::new(
            FacetRegistry::default(),
            QueryProjector::new(ProjectionMode::TagList),
            UrlCodec::default(),
            RecordingReload::default(),
            RecordingHistory::at(path),
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
    fn test_facet_selection_emits_reload_and_replacement() {
        let mut c = controller_at("/holdingpen/list");
        c.handle(facet("In process", "status:\"In process\""));

        assert_eq!(c.tags().values(), vec!["status:\"In process\""]);
        assert_eq!(
            c.reload_sink().payloads,
            vec![QueryPayload::Tags {
                tags: vec!["status:\"In process\"".into()],
            }]
        );
        assert_eq!(
            c.history_writer().replaced,
            vec!["list/status%3A%22In%20process%22"]
        );
    }

    #[test]
    fn test_facet_replacement_keeps_single_token() {
        let mut c = controller_at("/holdingpen/list");
        c.handle(facet("New", "status:\"New\""));
        c.handle(facet("Done", "status:\"Done\""));

        assert_eq!(c.tags().values(), vec!["status:\"Done\""]);
        assert_eq!(c.reload_sink().payloads.len(), 2);
        assert_eq!(
            c.history_writer().replaced.last().unwrap(),
            "list/status%3A%22Done%22"
        );
    }

    #[test]
    fn test_caller_asserted_prefix_is_ignored() {
        let mut c = controller_at("/holdingpen/list");
        // The menu claims "type:" but the value is status-scoped; the
        // recomputed classification wins
        c.handle(FilterIntent::FacetSelected {
            prefix: Some("type:".into()),
            text: "New".into(),
            value: "status:\"New\"".into(),
        });
        c.handle(facet("Done", "status:\"Done\""));

        assert_eq!(c.tags().values(), vec!["status:\"Done\""]);
    }

    #[test]
    fn test_empty_free_text_is_swallowed() {
        let mut c = controller_at("/holdingpen/list");
        c.handle(FilterIntent::FreeTextCommitted { text: "   ".into() });

        assert!(c.reload_sink().payloads.is_empty());
        assert!(c.history_writer().replaced.is_empty());
    }

    #[test]
    fn test_duplicate_free_text_still_emits() {
        let mut c = controller_at("/holdingpen/list");
        c.handle(FilterIntent::FreeTextCommitted {
            text: "alice".into(),
        });
        c.handle(FilterIntent::FreeTextCommitted {
            text: "alice".into(),
        });

        assert_eq!(c.tags().len(), 1);
        assert_eq!(c.reload_sink().payloads.len(), 2);
    }

    #[test]
    fn test_removal_collapses_url_to_root_marker() {
        let mut c = controller_at("/holdingpen/list");
        c.handle(FilterIntent::FreeTextCommitted {
            text: "alice".into(),
        });
        c.handle(FilterIntent::TokenRemoved {
            value: "alice".into(),
        });

        assert!(c.tags().is_empty());
        assert_eq!(c.history_writer().replaced.last().unwrap(), "list/.");
    }

    #[test]
    fn test_recompute_emits_without_mutation() {
        let mut c = controller_at("/holdingpen/list");
        c.handle(FilterIntent::FreeTextCommitted {
            text: "alice".into(),
        });
        c.handle(FilterIntent::RecomputeRequested);

        assert_eq!(c.reload_sink().payloads.len(), 2);
        assert_eq!(c.reload_sink().payloads[0], c.reload_sink().payloads[1]);
        let replaced = &c.history_writer().replaced;
        assert_eq!(replaced[0], replaced[1]);
    }

    #[test]
    fn test_placement_outside_list_root() {
        let mut c = controller_at("/records/search");
        c.handle(facet("Done", "status:\"Done\""));

        assert_eq!(
            c.history_writer().replaced,
            vec!["status%3A%22Done%22"]
        );
    }

    #[test]
    fn test_seed_collapses_duplicate_facets_without_emitting() {
        let mut c = controller_at("/holdingpen/list");
        c.seed(vec![
            FilterToken::new("New".into(), "status:\"New\"".into()),
            FilterToken::free_text("alice"),
            FilterToken::new("Done".into(), "status:\"Done\"".into()),
        ]);

        assert_eq!(c.tags().values(), vec!["alice", "status:\"Done\""]);
        assert!(c.reload_sink().payloads.is_empty());
        assert!(c.history_writer().replaced.is_empty());
        assert!(!c.tags().is_dirty());
    }
}
