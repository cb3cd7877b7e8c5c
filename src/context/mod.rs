//! Startup page context
//!
//! The hosting page supplies the filter layer's initial state exactly once,
//! as a JSON blob embedded by the server-rendered template or bootstrap
//! script: the pre-seeded tokens, the facet menu bindings, and a few opaque
//! passthroughs for the list loader (initial page, page size, load URL).
//! The context is never re-read after startup; from then on the tag set is
//! the only source of truth.

use crate::facets::{FacetError, FacetRegistry};
use crate::tags::FilterToken;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing the bootstrap context
#[derive(Debug, Error)]
pub enum ContextError {
    /// Malformed bootstrap JSON
    #[error("Malformed bootstrap context: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One facet menu wired up by the hosting page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuBinding {
    /// DOM selector the host binds the menu to; opaque to the core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Facet prefix carried by the menu's entries (e.g. `"status:"`)
    pub prefix: String,
}

/// Bootstrap context supplied by the hosting page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContext {
    /// Tokens active when the page was rendered
    #[serde(default)]
    pub tags: Vec<FilterToken>,

    /// Facet menus present on the page
    #[serde(default)]
    pub menus: Vec<MenuBinding>,

    /// List endpoint for the excluded list loader (passthrough)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_url: Option<String>,

    /// Initial page number (passthrough)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Initial page size (passthrough)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl PageContext {
    /// Parse the context from the hosting page's bootstrap JSON
    ///
    /// # Errors
    ///
    /// Returns `ContextError` if the JSON is malformed.
    pub fn from_json(raw: &str) -> Result<Self, ContextError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build the facet registry from the menu bindings
    ///
    /// # Errors
    ///
    /// Returns `FacetError` if the menus declare invalid prefixes.
    pub fn registry(&self) -> Result<FacetRegistry, FacetError> {
        FacetRegistry::new(self.menus.iter().map(|m| m.prefix.clone()))
    }
}
