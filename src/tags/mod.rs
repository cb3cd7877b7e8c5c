//! Active filter tokens and the tag set
//!
//! This module owns the authoritative in-memory state of the filter bar:
//!
//! - **Tokens**: each active filter is a `FilterToken` with a display form
//!   and a canonical value
//! - **Ordering**: the `TagSet` preserves insertion order, which drives the
//!   serialized query and the URL slug
//! - **Uniqueness**: no two tokens share a canonical value
//! - **Chips**: an optional `ChipPalette` maps values to CSS classes for
//!   hosts that color their chips
//!
//! Facet exclusivity (at most one token per facet prefix) is not enforced
//! here; it is the reconciler's job in [`crate::facets`].

pub mod chips;
pub mod types;

pub use chips::{ChipPalette, ChipRule};
pub use types::{FilterToken, TagSet};
