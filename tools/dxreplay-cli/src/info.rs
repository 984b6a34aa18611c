//! Info command - summarize a battle log

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use dxreplay_core::replay::{EditSession, LogSummary};

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs {
    /// Battle log file (.pb)
    pub file: PathBuf,
}

/// Execute the info command
pub fn execute(args: InfoArgs) -> Result<()> {
    let session = EditSession::open(&args.file)
        .with_context(|| format!("Failed to load battle log: {}", args.file.display()))?;
    let summary = session.summary(Some(&args.file));

    let stdout = std::io::stdout();
    write_summary(&mut stdout.lock(), &summary)
}

fn format_time(time: Option<DateTime<Local>>) -> String {
    time.map_or_else(
        || "N/A".to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

fn write_summary<W: Write>(out: &mut W, summary: &LogSummary) -> Result<()> {
    writeln!(out, "=== Battle Log ===")?;
    writeln!(out, "Battle code: {}", summary.battle_code)?;
    writeln!(out, "Start: {}", format_time(summary.start))?;
    writeln!(out, "End: {}", format_time(summary.end))?;
    writeln!(out, "Frames: {}", summary.frame_count)?;

    writeln!(out)?;
    writeln!(out, "Players: {}", summary.player_count)?;
    for (i, player) in summary.players.iter().enumerate() {
        writeln!(out, "  {}: {}", i + 1, player)?;
    }

    writeln!(out)?;
    writeln!(out, "Rounds: {}", summary.rounds.len())?;
    for (i, round) in summary.rounds.iter().enumerate() {
        writeln!(
            out,
            "  {}: frames {}~{} ({} frames)",
            i + 1,
            round.start,
            round.end,
            round.frame_count()
        )?;
    }
    Ok(())
}
