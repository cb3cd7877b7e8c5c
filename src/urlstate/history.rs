//! History replacement seam
//!
//! The core never touches the browser directly; a host adapter implements
//! [`HistoryWriter`] over whatever history primitive it has (the browser's
//! `history.replaceState`, a test recorder, a replay printer).

/// Non-navigating history replacement
///
/// `replace_state` must update the current history entry in place: no new
/// navigable entry, no reload, no navigation event. Filter changes must
/// never turn into a back-button stop per keystroke. There is no error
/// channel; the browser primitive does not signal failure under normal
/// operation.
pub trait HistoryWriter {
    /// Current location path (the `location.pathname` equivalent)
    fn pathname(&self) -> String;

    /// Replace the current history entry with the given path fragment
    fn replace_state(&mut self, path: &str);
}
