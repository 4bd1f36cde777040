//! `chess-analysis` command line front end
//!
//! Analyzes one position and prints the JSON response on stdout. Logs go to
//! stderr and are controlled with `RUST_LOG` (default `warn`).

use analysis_engine::{analyze_position, AnalyzeRequest, Analyzer, EngineConfig, EngineInfo};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chess-analysis", version, about = "Analyze a chess position")]
struct Cli {
    /// Position to analyze, in FEN
    #[arg(long, required_unless_present = "info")]
    fen: Option<String>,

    /// Search depth (1-15, anything else falls back to 8)
    #[arg(long)]
    depth: Option<i64>,

    /// Config file (defaults to config.json in the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print engine information instead of analyzing
    #[arg(long)]
    info: bool,
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(cli.config.as_deref());
    debug!("[CLI] Using config {:?}", config);

    if cli.info {
        return print_json(&EngineInfo::new(&config), cli.pretty);
    }

    let request = AnalyzeRequest {
        fen: cli.fen.unwrap_or_default(),
        depth: cli.depth.map(serde_json::Value::from),
    };
    let analyzer = Analyzer::new(config);
    let response = analyze_position(&analyzer, &request);

    print_json(&response, cli.pretty)
}
