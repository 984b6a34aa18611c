//! dxreplay - inspect and edit battle log inputs
//!
//! # Commands
//!
//! - `dxreplay info` - Battle code, roster, timing and rounds of a log
//! - `dxreplay show` - Grouped inputs of one player in one round
//! - `dxreplay edit` - Add or remove a key over a frame range and save
//! - `dxreplay export` - Dump a log as JSON
//! - `dxreplay shell` - Interactive editing menu
//!
//! # Usage
//!
//! ```bash
//! # Player 2's inputs in round 1, frames 100 to 200
//! dxreplay show 1753648709739.pb --player 2 --range 100~200
//!
//! # Hold A for player 1 over frames 30 to 45 of round 2
//! dxreplay edit 1753648709739.pb --round 2 --range 30~45 --add A
//! ```
//!
//! Players, rounds and frame ranges are given relative to what the listing
//! prints: players and rounds count from 1, frames from the round start.
//!
//! # Config (config.toml)
//!
//! ```toml
//! [display]
//! page_step = 10
//! edit_context = 10
//!
//! [save]
//! suffix = "_edited"
//! ```

mod display;
mod edit;
mod export;
mod info;
mod shell;
mod show;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dxreplay_core::config::{self, EditorConfig};

/// dxreplay - inspect and edit battle log inputs
#[derive(Parser)]
#[command(name = "dxreplay")]
#[command(about = "Inspect and edit battle log inputs")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show battle code, roster, timing and rounds
    Info(info::InfoArgs),

    /// List grouped inputs of one player in one round
    Show(show::ShowArgs),

    /// Add or remove a key over a frame range and save
    Edit(edit::EditArgs),

    /// Export a log as JSON
    Export(export::ExportArgs),

    /// Edit interactively
    Shell(shell::ShellArgs),
}

/// Convert a 1-based command-line index to 0-based.
pub(crate) fn zero_based(value: usize, what: &str) -> Result<usize> {
    value
        .checked_sub(1)
        .with_context(|| format!("{what} numbers start at 1"))
}

fn load_config(path: Option<&PathBuf>) -> Result<EditorConfig> {
    match path {
        Some(path) => config::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(config::load()),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with listings
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    tracing::debug!(?config, "loaded config");

    match cli.command {
        Commands::Info(args) => info::execute(args),
        Commands::Show(args) => show::execute(args),
        Commands::Edit(args) => edit::execute(args, &config),
        Commands::Export(args) => export::execute(args),
        Commands::Shell(args) => shell::execute(args, &config),
    }
}
