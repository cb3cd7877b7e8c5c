//! Deployment configuration for the filter layer
//!
//! One deployment differs from another in its projection mode, URL
//! placement rules, escape strategy, facet prefixes and chip palette. All
//! of it lives in a single TOML-backed `SyncConfig`; every field has a
//! default matching the stock path-rooted workflow list view, so an empty
//! file (or no file at all) is a valid deployment.

use crate::facets::{FacetError, FacetRegistry};
use crate::query::{DEFAULT_SEPARATOR, ProjectionMode, QueryProjector};
use crate::tags::ChipPalette;
use crate::urlstate::{EscapeMode, UrlCodec};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Deployment configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncConfig {
    /// Payload shape for the list backend
    #[serde(default)]
    pub projection: ProjectionMode,

    /// Separator for joined queries and the URL slug
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Slug written when no tokens are active
    #[serde(default = "default_root_marker")]
    pub root_marker: String,

    /// Location suffix identifying a path-rooted list view
    #[serde(default = "default_path_suffix")]
    pub path_suffix: String,

    /// Fragment prepended when writing below the list root
    #[serde(default = "default_list_suffix")]
    pub list_suffix: String,

    /// Slug escape strategy
    #[serde(default)]
    pub escape: EscapeMode,

    /// Facet prefixes active in this deployment
    #[serde(default = "default_facets")]
    pub facets: Vec<String>,

    /// Chip coloring rules for hosts that render colored chips
    #[serde(default)]
    pub chips: ChipPalette,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_root_marker() -> String {
    ".".to_string()
}

fn default_path_suffix() -> String {
    "holdingpen/list".to_string()
}

fn default_list_suffix() -> String {
    "list/".to_string()
}

fn default_facets() -> Vec<String> {
    vec![
        "status:".to_string(),
        "type:".to_string(),
        "f:".to_string(),
    ]
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionMode::default(),
            separator: default_separator(),
            root_marker: default_root_marker(),
            path_suffix: default_path_suffix(),
            list_suffix: default_list_suffix(),
            escape: EscapeMode::default(),
            facets: default_facets(),
            chips: ChipPalette::default(),
        }
    }
}

impl SyncConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("worklist").join("config.toml"))
    }

    /// Load configuration from the default path, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Build the facet registry declared by this deployment
    ///
    /// # Errors
    ///
    /// Returns `FacetError` if the configured prefixes are invalid.
    pub fn registry(&self) -> Result<FacetRegistry, FacetError> {
        FacetRegistry::new(self.facets.iter().cloned())
    }

    /// Build the query projector for this deployment
    #[must_use]
    pub fn projector(&self) -> QueryProjector {
        QueryProjector::with_separator(self.projection, self.separator.clone())
    }

    /// Build the URL codec for this deployment
    #[must_use]
    pub fn codec(&self) -> UrlCodec {
        UrlCodec {
            root_marker: self.root_marker.clone(),
            separator: self.separator.clone(),
            path_suffix: self.path_suffix.clone(),
            list_suffix: self.list_suffix.clone(),
            escape: self.escape,
        }
    }
}
