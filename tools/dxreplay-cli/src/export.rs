//! Export command - dump a battle log as JSON

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use dxreplay_core::replay::read_file;

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    /// Battle log file (.pb)
    pub file: PathBuf,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the export command
pub fn execute(args: ExportArgs) -> Result<()> {
    let log = read_file(&args.file)
        .with_context(|| format!("Failed to load battle log: {}", args.file.display()))?;
    let json = log.to_json().context("Failed to serialize battle log")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
