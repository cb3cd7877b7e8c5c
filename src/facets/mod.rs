//! Facet classification and prefix reconciliation
//!
//! A facet is a named filter dimension (status, type, ...) where only one
//! value may be active at a time. This module provides:
//!
//! - [`FacetRegistry`]: the validated set of facet prefixes, computing
//!   prefix membership from canonical values
//! - [`apply_menu_selection`] / [`apply_free_text`]: the reconciliation
//!   rules applied before a token enters the tag set
//! - [`FacetError`]: validation failures during registry construction

pub mod error;
pub mod reconciler;
pub mod registry;

pub use error::FacetError;
pub use reconciler::{apply_free_text, apply_menu_selection};
pub use registry::FacetRegistry;
