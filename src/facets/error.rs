//! Error types for facet registry construction
//!
//! Registry construction is the only fallible operation in the facet layer:
//! once a registry is built, classification and reconciliation are pure
//! in-memory operations that cannot fail.

use thiserror::Error;

/// Errors raised while validating a set of facet prefixes
#[derive(Debug, Error)]
pub enum FacetError {
    /// Empty prefix string
    #[error("Facet prefix cannot be empty")]
    EmptyPrefix,

    /// Prefix missing the trailing separator
    #[error("Facet prefix '{0}' must end with ':'")]
    MissingSeparator(String),

    /// Prefix is only the separator with no facet name
    #[error("Facet prefix '{0}' has no facet name")]
    MissingName(String),

    /// Same prefix declared twice
    #[error("Facet prefix '{0}' is declared twice")]
    Duplicate(String),

    /// One prefix is a prefix of another, making classification ambiguous
    #[error("Facet prefix '{0}' shadows '{1}'")]
    Shadowed(String, String),
}
