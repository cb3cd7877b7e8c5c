//! Query projection from the active tag set
//!
//! The projector derives the reload payload the list loader consumes. Two
//! wire shapes exist, selected by deployment configuration:
//!
//! - **tag-list**: `{"tags": [...]}` — the verbatim ordered value sequence,
//!   each entry query-encoded by the consumer
//! - **joined-search**: `{"search": "..."}` — the values joined into a
//!   single query string with the configured separator
//!
//! Projection is a pure function of the tag set's current token sequence:
//! projecting twice without an intervening mutation yields identical
//! payloads.

use crate::tags::TagSet;
use serde::{Deserialize, Serialize};

/// Separator used by both the joined-search projection and the URL slug
pub const DEFAULT_SEPARATOR: &str = " AND ";

/// Payload shape expected by the deployment's list backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionMode {
    /// Emit the ordered value list
    #[default]
    TagList,
    /// Emit a single joined query string
    JoinedSearch,
}

/// Derived, disposable projection of the tag set
///
/// Serializes untagged so the wire shapes are exactly `{"tags": [...]}` and
/// `{"search": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum QueryPayload {
    /// Ordered value list for tag-list deployments
    Tags {
        /// Canonical values in insertion order
        tags: Vec<String>,
    },
    /// Joined query string for search-box deployments
    Search {
        /// Values joined with the separator
        search: String,
    },
}

/// Projects the tag set into a reload payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryProjector {
    mode: ProjectionMode,
    separator: String,
}

impl QueryProjector {
    /// Create a projector with the default `" AND "` separator
    #[must_use]
    pub fn new(mode: ProjectionMode) -> Self {
        Self {
            mode,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Create a projector with a custom join separator
    #[must_use]
    pub const fn with_separator(mode: ProjectionMode, separator: String) -> Self {
        Self { mode, separator }
    }

    /// The configured projection mode
    #[must_use]
    pub const fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Derive the payload from the current token sequence
    #[must_use]
    pub fn project(&self, tags: &TagSet) -> QueryPayload {
        let values = tags.values();
        match self.mode {
            ProjectionMode::TagList => QueryPayload::Tags {
                tags: values.iter().map(ToString::to_string).collect(),
            },
            ProjectionMode::JoinedSearch => QueryPayload::Search {
                search: values.join(&self.separator),
            },
        }
    }
}

impl Default for QueryProjector {
    fn default() -> Self {
        Self::new(ProjectionMode::default())
    }
}
