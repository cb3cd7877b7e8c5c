//! Worklist - a faceted filter-state synchronizer for paginated list views
//!
//! This library owns the active set of filter tokens behind a workflow list
//! view's filter bar and keeps two downstream representations in sync with
//! it: the reload payload consumed by the list loader, and the URL slug
//! written through a non-navigating history replacement.
//!
//! The state machine holds no rendering references. Hosts adapt it through
//! two trait seams ([`controller::ReloadSink`], [`urlstate::HistoryWriter`])
//! and seed it once from the page's bootstrap context.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod context;
pub mod controller;
pub mod facets;
pub mod output;
pub mod query;
pub mod tags;
pub mod urlstate;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the crate
#[derive(Debug, Error)]
pub enum WorklistError {
    /// Facet registry error
    #[error("Facet registry error: {0}")]
    Facet(#[from] facets::FacetError),
    /// Bootstrap context error
    #[error("Bootstrap context error: {0}")]
    Context(#[from] context::ContextError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
