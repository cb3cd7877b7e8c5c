//! Worklist CLI application entry point
//!
//! This is the debug companion for the worklist filter layer. It lets a
//! developer exercise a deployment's slug encoding, payload projection and
//! controller behavior without a browser in the loop.
//!
//! # Usage
//!
//! ```bash
//! # Encode token values into a URL slug
//! worklist encode 'status:"In process"' alice
//!
//! # Simulate placement against a location path
//! worklist encode -p /holdingpen/list 'status:"Done"'
//!
//! # Decode a slug back into token values
//! worklist decode 'status%3A%22Done%22 AND alice'
//!
//! # Project token values into a reload payload
//! worklist project -m search 'status:"Done"' alice
//!
//! # Replay a JSON-lines intent stream through the controller
//! worklist replay intents.jsonl
//! echo '{"intent":"free_text_committed","text":"alice"}' | worklist replay
//! ```
//!
//! # Configuration
//!
//! A deployment TOML file can be passed with `--config`; otherwise the
//! stock deployment defaults apply. The tool never writes configuration.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use worklist::{
    WorklistError,
    cli::{Cli, Commands},
    config::SyncConfig,
    controller::{FilterController, FilterIntent, ReloadSink},
    output,
    query::QueryPayload,
    urlstate::{EscapeMode, HistoryWriter, UrlCodec},
};

type Result<T> = std::result::Result<T, WorklistError>;

/// Reload sink printing every emitted payload to stdout
struct PrintingReload {
    quiet: bool,
}

impl ReloadSink for PrintingReload {
    fn request_reload(&mut self, payload: QueryPayload) {
        println!("{}", output::reload_line(&payload, self.quiet));
    }
}

/// History writer pinned to a simulated location, printing replacements
///
/// The location is pinned so every replacement shows the placement decision
/// as taken from the starting path, like a fresh page load would.
struct PrintingHistory {
    pathname: String,
    quiet: bool,
}

impl HistoryWriter for PrintingHistory {
    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn replace_state(&mut self, path: &str) {
        println!("{}", output::replace_line(path, self.quiet));
    }
}

fn load_config(path: Option<&Path>) -> Result<SyncConfig> {
    match path {
        Some(path) => Ok(SyncConfig::load_from(path)?),
        None => Ok(SyncConfig::default()),
    }
}

fn handle_encode(
    config: &SyncConfig,
    values: &[String],
    path: Option<&str>,
    legacy: bool,
    quiet: bool,
) -> Result<()> {
    let mut codec = config.codec();
    if legacy {
        codec = UrlCodec {
            escape: EscapeMode::Legacy,
            ..codec
        };
    }

    let encoded = codec.encode(values);
    let placed = match path {
        Some(current) => codec.place(current, &encoded),
        None => encoded,
    };

    println!("{}", output::slug(&placed, quiet));
    Ok(())
}

fn handle_decode(config: &SyncConfig, slug: &str, quiet: bool) -> Result<()> {
    let values = config.codec().decode_slug(slug);
    println!("{}", output::value_list(&values, quiet));
    Ok(())
}

fn handle_project(config: &SyncConfig, values: &[String]) -> Result<()> {
    let mut tags = worklist::tags::TagSet::new();
    for value in values {
        tags.add(worklist::tags::FilterToken::free_text(value.clone()));
    }

    let payload = config.projector().project(&tags);
    let json = output::payload_json(&payload)
        .map_err(|e| WorklistError::InvalidInput(format!("Failed to render payload: {e}")))?;
    println!("{json}");
    Ok(())
}

fn handle_replay(config: &SyncConfig, file: Option<&Path>, path: String, quiet: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(fs::File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut controller = FilterController::new(
        config.registry()?,
        config.projector(),
        config.codec(),
        PrintingReload { quiet },
        PrintingHistory {
            pathname: path,
            quiet,
        },
    );

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let intent: FilterIntent = serde_json::from_str(&line).map_err(|e| {
            WorklistError::InvalidInput(format!("Bad intent on line {}: {e}", number + 1))
        })?;
        controller.handle(intent);
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse_args();
    let quiet = cli.quiet;

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode {
            values,
            path,
            legacy,
        } => {
            handle_encode(&config, &values, path.as_deref(), legacy, quiet)?;
        }
        Commands::Decode { slug } => {
            handle_decode(&config, &slug, quiet)?;
        }
        Commands::Project { values, mode } => {
            if let Some(mode) = mode {
                config.projection = mode.into();
            }
            handle_project(&config, &values)?;
        }
        Commands::Replay { file, path } => {
            handle_replay(&config, file.as_deref(), path, quiet)?;
        }
    }

    Ok(())
}
