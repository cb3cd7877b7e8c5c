//! URL state synchronization
//!
//! Keeps the browser address bar in sync with the active filter set so the
//! view is bookmarkable and shareable:
//!
//! - [`UrlCodec`]: encodes the ordered values into a slug, decides placement
//!   against the current location, and decodes slugs for startup seeding
//! - [`EscapeMode`]: generalized percent-encoding, or the byte-faithful
//!   legacy substitution for deployments with historical slugs
//! - [`HistoryWriter`]: the host seam performing the actual non-navigating
//!   replacement

pub mod codec;
pub mod history;

pub use codec::{EscapeMode, UrlCodec};
pub use history::HistoryWriter;
