//! Token and tag-set data structures
//!
//! This module defines the core data structures for the active filter set:
//! - `FilterToken`: one atomic filter unit (facet-scoped or free text)
//! - `TagSet`: the ordered, value-unique collection of active tokens
//!
//! The facet prefix is deliberately NOT stored on the token. Prefix
//! membership is recomputed from `value` by the facet registry whenever a
//! decision depends on it, so stale or wrong caller metadata cannot
//! desynchronize the set.

use serde::{Deserialize, Serialize};

/// One atomic filter unit
///
/// `value` is the canonical form used for queries and the URL slug;
/// `text` is the display form shown on the chip and may differ
/// (e.g. a localized label).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterToken {
    /// Display form shown on the chip
    pub text: String,

    /// Canonical form used for queries and the URL slug
    pub value: String,
}

impl FilterToken {
    /// Create a token with distinct display and canonical forms
    #[must_use]
    pub const fn new(text: String, value: String) -> Self {
        Self { text, value }
    }

    /// Create a free-text token (display form equals canonical form)
    #[must_use]
    pub fn free_text(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            text: value.clone(),
            value,
        }
    }
}

/// Ordered collection of active filter tokens
///
/// Insertion order is significant: it determines the serialized query and
/// the URL slug. No two tokens share a `value`. The set carries a dirty
/// flag set by every content mutation and cleared by the consumer once the
/// derived query and URL have been recomputed.
///
/// Mutated only by the filter controller, synchronously, within one
/// intent-handling turn. No internal locking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagSet {
    tokens: Vec<FilterToken>,
    #[serde(skip)]
    dirty: bool,
}

impl TagSet {
    /// Create an empty tag set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tokens: Vec::new(),
            dirty: false,
        }
    }

    /// Append a token unless one with the same `value` already exists
    ///
    /// Duplicate values are a silent no-op, mirroring how a filter chip
    /// widget refuses identical tags.
    ///
    /// # Returns
    /// `true` if the token was appended, `false` on duplicate
    pub fn add(&mut self, token: FilterToken) -> bool {
        if self.contains_value(&token.value) {
            return false;
        }
        self.tokens.push(token);
        self.dirty = true;
        true
    }

    /// Remove the token with the matching `value`, if present
    pub fn remove(&mut self, value: &str) -> Option<FilterToken> {
        let pos = self.tokens.iter().position(|t| t.value == value)?;
        self.dirty = true;
        Some(self.tokens.remove(pos))
    }

    /// Remove all tokens whose `value` starts with `prefix`
    ///
    /// Used before adding a new facet-menu token for the same facet.
    ///
    /// # Returns
    /// Number of tokens removed
    pub fn remove_by_prefix(&mut self, prefix: &str) -> usize {
        let before = self.tokens.len();
        self.tokens.retain(|t| !t.value.starts_with(prefix));
        let removed = before - self.tokens.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    /// Ordered sequence of canonical values, insertion order, no filtering
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.value.as_str()).collect()
    }

    /// Check whether a token with this `value` is active
    #[must_use]
    pub fn contains_value(&self, value: &str) -> bool {
        self.tokens.iter().any(|t| t.value == value)
    }

    /// Iterate over the active tokens in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &FilterToken> {
        self.tokens.iter()
    }

    /// Number of active tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether no tokens are active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Remove all tokens
    pub fn clear(&mut self) {
        if !self.tokens.is_empty() {
            self.dirty = true;
        }
        self.tokens.clear();
    }

    /// Whether the set has mutated since the last `mark_clean`
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after downstream recomputation
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
