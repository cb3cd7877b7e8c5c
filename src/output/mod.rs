//! Output formatting for CLI display
//!
//! This module provides utilities for formatting slugs, decoded value
//! lists, payloads and replay emissions in the CLI.

use crate::query::QueryPayload;
use colored::Colorize;

/// Format an encoded slug for display
#[must_use]
pub fn slug(slug: &str, quiet: bool) -> String {
    if quiet {
        slug.to_string()
    } else {
        format!("  {}", slug.cyan())
    }
}

/// Format a decoded value list, one value per line
#[must_use]
pub fn value_list(values: &[String], quiet: bool) -> String {
    if values.is_empty() {
        return if quiet {
            String::new()
        } else {
            "  (no tokens)".to_string()
        };
    }

    values
        .iter()
        .map(|v| {
            if quiet {
                v.clone()
            } else {
                format!("  {v}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a payload as pretty JSON
///
/// # Errors
/// Returns a `serde_json::Error` if serialization fails.
pub fn payload_json(payload: &QueryPayload) -> serde_json::Result<String> {
    serde_json::to_string_pretty(payload)
}

/// Format one replay reload emission
#[must_use]
pub fn reload_line(payload: &QueryPayload, quiet: bool) -> String {
    let json = serde_json::to_string(payload).unwrap_or_else(|_| "<unserializable>".to_string());
    if quiet {
        json
    } else {
        format!("{} {}", "reload ".green(), json)
    }
}

/// Format one replay URL replacement emission
#[must_use]
pub fn replace_line(path: &str, quiet: bool) -> String {
    if quiet {
        path.to_string()
    } else {
        format!("{} {}", "replace".yellow(), path)
    }
}
