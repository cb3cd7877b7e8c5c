//! The orchestrating filter state machine
//!
//! [`FilterController`] receives raw UI intents, drives the tag set through
//! the facet reconciler, and fans out to its two collaborators: a
//! [`ReloadSink`] consuming the projected query payload and a
//! [`crate::urlstate::HistoryWriter`] receiving the placed URL slug.
//!
//! The machine has a single state. All transitions are synchronous; the
//! asynchronous list reload happens behind the sink and is neither awaited
//! nor cancelled here (the sink owns last-response-wins discipline).

pub mod intents;
pub mod machine;

pub use intents::FilterIntent;
pub use machine::{FilterController, ReloadSink};
