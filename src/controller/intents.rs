//! Typed intents consumed by the filter controller
//!
//! Intents replace the document-wide broadcast channel of the original
//! widget stack: the UI glue layer translates raw clicks and keystrokes
//! into these values and hands them to the controller directly. The serde
//! shape (`{"intent": "facet_selected", ...}`) serves hosts that deliver
//! intents over a JSON bridge and the CLI replay tool.

use serde::{Deserialize, Serialize};

/// Raw user intent from the filter bar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum FilterIntent {
    /// A facet menu item was selected
    FacetSelected {
        /// Prefix the menu claims for itself. Accepted for wire
        /// compatibility, but classification is always recomputed from
        /// `value`; a mismatch is logged and ignored.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,

        /// Display label of the menu entry
        text: String,

        /// Canonical value of the menu entry
        value: String,
    },

    /// Free text was committed in the filter input
    FreeTextCommitted {
        /// Raw input text, trimmed by the reconciler
        text: String,
    },

    /// A chip was removed by user interaction
    TokenRemoved {
        /// Canonical value of the removed token
        value: String,
    },

    /// Re-project the current set without mutation
    /// (e.g. the list widget re-initialized)
    RecomputeRequested,
}
