//! URL slug encoding and startup-only decoding
//!
//! The codec turns the ordered token values into a path fragment suitable
//! for a non-navigating history replacement, and owns the placement rule
//! that decides whether the fragment is written below the list root or
//! replaces the path outright.
//!
//! Decoding exists only for startup seeding (the server hands the slug back
//! when a bookmarked URL is opened); the running state machine never
//! re-derives the tag set from the URL.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Bytes escaped per token in [`EscapeMode::Percent`]
///
/// Covers the characters that break path segments or the query engine;
/// everything else stays readable in the address bar.
const SLUG_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b':');

/// Character substitution strategy for slug values
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// Percent-encode URL-hazardous characters in every token
    #[default]
    Percent,

    /// First-occurrence-only substitution of `:` and ` ` on the joined
    /// string, byte-faithful to the historical widget. Known-limited:
    /// callers needing more must pre-encode. Only for hosts that have to
    /// match slugs already in the wild.
    Legacy,
}

/// Encoder for the URL state slug
///
/// Rules, in order:
/// 1. zero tokens collapse to `root_marker` (the history API accepts
///    UNIX-like relative paths, so `"."` returns to the list root)
/// 2. one token becomes the slug on its own
/// 3. two or more tokens are joined with `separator`
/// 4. escaping follows the configured [`EscapeMode`]; the separator itself
///    is never escaped
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlCodec {
    /// Slug written when no tokens are active
    #[serde(default = "default_root_marker")]
    pub root_marker: String,

    /// Join separator between token values
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Current-location suffix identifying a path-rooted list view
    #[serde(default = "default_path_suffix")]
    pub path_suffix: String,

    /// Fragment prepended when writing below the list root
    #[serde(default = "default_list_suffix")]
    pub list_suffix: String,

    /// Substitution strategy
    #[serde(default)]
    pub escape: EscapeMode,
}

fn default_root_marker() -> String {
    ".".to_string()
}

fn default_separator() -> String {
    crate::query::DEFAULT_SEPARATOR.to_string()
}

fn default_path_suffix() -> String {
    "holdingpen/list".to_string()
}

fn default_list_suffix() -> String {
    "list/".to_string()
}

impl UrlCodec {
    /// Encode an ordered value sequence into a slug
    #[must_use]
    pub fn encode<S: AsRef<str>>(&self, values: &[S]) -> String {
        if values.is_empty() {
            return self.root_marker.clone();
        }

        match self.escape {
            EscapeMode::Percent => values
                .iter()
                .map(|v| utf8_percent_encode(v.as_ref(), SLUG_ESCAPES).to_string())
                .collect::<Vec<_>>()
                .join(&self.separator),
            EscapeMode::Legacy => {
                let joined = values
                    .iter()
                    .map(|v| v.as_ref().to_string())
                    .collect::<Vec<_>>()
                    .join(&self.separator);
                joined.replacen(':', "%3A", 1).replacen(' ', "%20", 1)
            }
        }
    }

    /// Decide where the slug lands relative to the current location
    ///
    /// If the current path ends with `path_suffix` the slug is written below
    /// the list root (`list_suffix` + slug); otherwise the slug replaces the
    /// path directly, which serves query-only views.
    #[must_use]
    pub fn place(&self, current_path: &str, encoded: &str) -> String {
        if current_path.ends_with(&self.path_suffix) {
            format!("{}{}", self.list_suffix, encoded)
        } else {
            encoded.to_string()
        }
    }

    /// Decode a slug back into token values (startup seeding only)
    ///
    /// Splits on the separator and percent-decodes each piece. The bare
    /// root marker and empty pieces decode to nothing. Encoding remains
    /// deliberately asymmetric: nothing in the running state machine calls
    /// this after startup.
    #[must_use]
    pub fn decode_slug(&self, slug: &str) -> Vec<String> {
        if slug.is_empty() || slug == self.root_marker {
            return Vec::new();
        }

        slug.split(self.separator.as_str())
            .map(|piece| percent_decode_str(piece).decode_utf8_lossy().into_owned())
            .filter(|piece| !piece.is_empty())
            .collect()
    }
}

impl Default for UrlCodec {
    fn default() -> Self {
        Self {
            root_marker: default_root_marker(),
            separator: default_separator(),
            path_suffix: default_path_suffix(),
            list_suffix: default_list_suffix(),
            escape: EscapeMode::default(),
        }
    }
}
