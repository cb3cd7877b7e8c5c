//! Testing utilities for worklist
//!
//! This module provides recording sink implementations and small
//! constructors used across the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::controller::ReloadSink;
use crate::query::QueryPayload;
use crate::tags::FilterToken;
use crate::urlstate::HistoryWriter;

/// Reload sink that records every emitted payload
///
/// # Examples
/// ```ignore
/// let mut controller = FilterController::new(
///     FacetRegistry::default(),
///     QueryProjector::default(),
///     UrlCodec::default(),
///     RecordingReload::default(),
///     RecordingHistory::at("/holdingpen/list"),
/// );
/// controller.handle(intent);
/// assert_eq!(controller.reload_sink().payloads.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingReload {
    /// Emitted payloads, oldest first
    pub payloads: Vec<QueryPayload>,
}

impl ReloadSink for RecordingReload {
    fn request_reload(&mut self, payload: QueryPayload) {
        self.payloads.push(payload);
    }
}

/// History writer pinned to a fixed location
///
/// The simulated location never moves, so every recorded replacement shows
/// the placement decision as taken from the starting path.
#[derive(Debug)]
pub struct RecordingHistory {
    pathname: String,
    /// Recorded replacements, oldest first
    pub replaced: Vec<String>,
}

impl RecordingHistory {
    /// Create a recorder pinned at the given location path
    #[must_use]
    pub fn at(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            replaced: Vec::new(),
        }
    }
}

impl HistoryWriter for RecordingHistory {
    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn replace_state(&mut self, path: &str) {
        self.replaced.push(path.to_string());
    }
}

/// Shorthand for a facet token with distinct display and canonical forms
#[must_use]
pub fn token(text: &str, value: &str) -> FilterToken {
    FilterToken::new(text.to_string(), value.to_string())
}
