//! Prefix reconciliation for menu selections and free-text commits
//!
//! Facet tokens are single-select: picking a new value for facet X replaces
//! the old value for facet X. Free-text terms accumulate independently and
//! are never reconciled, even when they happen to start with a known facet
//! prefix, because only the menu path carries facet semantics.

use super::registry::FacetRegistry;
use crate::tags::{FilterToken, TagSet};
use tracing::debug;

/// Apply a facet-menu selection to the tag set
///
/// Classification is recomputed from `token.value`; any prefix the menu
/// claimed for itself is ignored. If the value is facet-scoped, all tokens
/// of that facet are removed first, then the token is appended. Re-selecting
/// the currently active value is therefore a remove-then-add: the content is
/// unchanged but the token moves to the end of the insertion order.
pub fn apply_menu_selection(registry: &FacetRegistry, tags: &mut TagSet, token: FilterToken) {
    if let Some(prefix) = registry.classify(&token.value) {
        let prefix = prefix.to_string();
        let removed = tags.remove_by_prefix(&prefix);
        if removed > 0 {
            debug!(%prefix, removed, "replaced facet selection");
        }
    }
    tags.add(token);
}

/// Apply a free-text commit to the tag set
///
/// The input is trimmed; an empty or whitespace-only commit is rejected, as
/// the input widget cancels such adds before they produce a token.
///
/// # Returns
/// `true` if a token was committed (new or duplicate), `false` if the input
/// was rejected as empty
pub fn apply_free_text(tags: &mut TagSet, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    tags.add(FilterToken::free_text(trimmed));
    true
}
