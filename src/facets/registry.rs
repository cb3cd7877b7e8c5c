//! Facet prefix registry
//!
//! The registry is the single source of truth for which values are
//! facet-scoped. Menu items historically asserted their own prefix; the
//! registry recomputes membership from the value instead, so a caller
//! claiming the wrong facet cannot break exclusivity.

use super::error::FacetError;

/// Validated set of facet prefixes (e.g. `"status:"`, `"type:"`, `"f:"`)
///
/// Prefixes must be non-empty, end with `:`, carry a facet name before the
/// separator, and be mutually prefix-free so every value classifies to at
/// most one facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetRegistry {
    prefixes: Vec<String>,
}

impl FacetRegistry {
    /// Build a registry from a list of prefixes
    ///
    /// # Errors
    ///
    /// Returns `FacetError` if any prefix is empty, lacks the trailing `:`,
    /// has no facet name, is declared twice, or shadows another prefix.
    pub fn new(prefixes: impl IntoIterator<Item = String>) -> Result<Self, FacetError> {
        let mut validated: Vec<String> = Vec::new();

        for prefix in prefixes {
            if prefix.is_empty() {
                return Err(FacetError::EmptyPrefix);
            }
            if !prefix.ends_with(':') {
                return Err(FacetError::MissingSeparator(prefix));
            }
            if prefix.len() == 1 {
                return Err(FacetError::MissingName(prefix));
            }
            if validated.iter().any(|p| *p == prefix) {
                return Err(FacetError::Duplicate(prefix));
            }
            if let Some(other) = validated
                .iter()
                .find(|p| prefix.starts_with(p.as_str()) || p.starts_with(&prefix))
            {
                return Err(FacetError::Shadowed(prefix.clone(), other.clone()));
            }
            validated.push(prefix);
        }

        Ok(Self {
            prefixes: validated,
        })
    }

    /// Classify a canonical value
    ///
    /// # Returns
    /// The matching facet prefix, or `None` for free-text values
    #[must_use]
    pub fn classify(&self, value: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|p| value.starts_with(p.as_str()))
            .map(String::as_str)
    }

    /// Check whether a value is facet-scoped
    #[must_use]
    pub fn is_facet(&self, value: &str) -> bool {
        self.classify(value).is_some()
    }

    /// The registered prefixes, in declaration order
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for FacetRegistry {
    /// Facets of the stock workflow list view
    fn default() -> Self {
        Self {
            prefixes: vec![
                "status:".to_string(),
                "type:".to_string(),
                "f:".to_string(),
            ],
        }
    }
}
