//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for the `worklist` debug tool
//! using the `clap` crate. The tool exists for poking at a deployment's
//! filter behavior from a terminal: encoding and decoding URL slugs,
//! projecting payloads, and replaying recorded intent streams through a
//! real controller.
//!
//! # Commands
//!
//! - **encode**: encode token values into a URL slug
//! - **decode**: decode a slug back into token values
//! - **project**: project token values into a reload payload
//! - **replay**: drive a controller with a JSON-lines intent stream
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--config` flag pointing at a deployment TOML file
//! - Command aliases (`e`, `d`, `p`, `r`)

use crate::query::ProjectionMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Projection mode selector for the `project` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionArg {
    /// Emit the ordered value list (`{"tags": [...]}`)
    Tags,
    /// Emit a joined query string (`{"search": "..."}`)
    Search,
}

impl From<ProjectionArg> for ProjectionMode {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::Tags => Self::TagList,
            ProjectionArg::Search => Self::JoinedSearch,
        }
    }
}

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(name = "worklist")]
#[command(about = "Inspect and debug worklist filter slugs and payloads", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Deployment configuration TOML file
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode token values into a URL slug
    #[command(visible_alias = "e")]
    Encode {
        /// Token values in insertion order
        #[arg(value_name = "VALUE")]
        values: Vec<String>,

        /// Simulate placement against this current location path
        #[arg(short = 'p', long = "path", value_name = "PATH")]
        path: Option<String>,

        /// Use the legacy first-occurrence substitution
        #[arg(short = 'l', long = "legacy")]
        legacy: bool,
    },

    /// Decode a URL slug back into token values
    #[command(visible_alias = "d")]
    Decode {
        /// The slug to decode
        #[arg(value_name = "SLUG")]
        slug: String,
    },

    /// Project token values into a reload payload
    #[command(visible_alias = "p")]
    Project {
        /// Token values in insertion order
        #[arg(value_name = "VALUE")]
        values: Vec<String>,

        /// Payload shape to produce
        #[arg(short = 'm', long = "mode", value_enum)]
        mode: Option<ProjectionArg>,
    },

    /// Replay a JSON-lines intent stream through the controller
    #[command(visible_alias = "r")]
    Replay {
        /// Intent file (stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Simulated starting location path
        #[arg(short = 'p', long = "path", default_value = "/holdingpen/list")]
        path: String,
    },
}
