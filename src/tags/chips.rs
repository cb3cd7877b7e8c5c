//! Chip class palette for coloring facet tags
//!
//! Maps a token's canonical value to the CSS class the host should put on
//! its chip. Purely advisory: the state machine never consults the palette,
//! hosts that render uncolored chips simply skip it.

use serde::{Deserialize, Serialize};

/// One value-to-class rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipRule {
    /// Canonical token value to match exactly
    pub value: String,

    /// CSS class emitted for that value
    pub class: String,
}

/// Lookup table from token value to chip CSS class
///
/// Unmatched values fall back to `default_class`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipPalette {
    /// Class for values no rule matches
    ///
    /// Declared before `rules` so TOML serialization emits the scalar ahead
    /// of the rule tables.
    #[serde(default = "default_chip_class")]
    pub default_class: String,

    /// Exact-match rules, checked in order
    #[serde(default)]
    pub rules: Vec<ChipRule>,
}

fn default_chip_class() -> String {
    "badge badge-warning".to_string()
}

impl ChipPalette {
    /// Create an empty palette with the given fallback class
    #[must_use]
    pub const fn new(default_class: String) -> Self {
        Self {
            default_class,
            rules: Vec::new(),
        }
    }

    /// Add a rule mapping an exact token value to a class
    #[must_use]
    pub fn rule(mut self, value: impl Into<String>, class: impl Into<String>) -> Self {
        self.rules.push(ChipRule {
            value: value.into(),
            class: class.into(),
        });
        self
    }

    /// Look up the chip class for a token value
    #[must_use]
    pub fn class_for(&self, value: &str) -> &str {
        self.rules
            .iter()
            .find(|r| r.value == value)
            .map_or(self.default_class.as_str(), |r| r.class.as_str())
    }
}

impl Default for ChipPalette {
    /// Status palette of the stock workflow list view
    fn default() -> Self {
        Self::new(default_chip_class())
            .rule("status:\"New\"", "label label-info")
            .rule("status:\"In process\"", "label label-warning")
            .rule("status:\"Waiting\"", "label label-warning")
            .rule("status:\"Need action\"", "label label-danger")
            .rule("status:\"Error\"", "label label-danger")
            .rule("status:\"Done\"", "label label-success")
    }
}
