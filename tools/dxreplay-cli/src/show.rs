//! Show command - list grouped inputs

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use dxreplay_core::replay::{DisplayWindow, EditSession, FrameRange};

use crate::display::write_listing;
use crate::zero_based;

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
    /// Battle log file (.pb)
    pub file: PathBuf,

    /// Player number (starting at 1)
    #[arg(short, long, default_value = "1")]
    pub player: usize,

    /// Round number (starting at 1)
    #[arg(short, long, default_value = "1")]
    pub round: usize,

    /// Only list groups touching these frames (e.g., 100~200)
    #[arg(long)]
    pub range: Option<FrameRange>,

    /// Frame at which the match clock starts, to show the countdown
    #[arg(long)]
    pub game_start: Option<usize>,
}

/// Execute the show command
pub fn execute(args: ShowArgs) -> Result<()> {
    let player = zero_based(args.player, "Player")?;
    let round = zero_based(args.round, "Round")?;

    let mut session = EditSession::open(&args.file)
        .with_context(|| format!("Failed to load battle log: {}", args.file.display()))?;

    if let Some(frame) = args.game_start {
        let start = session.round(round)?.absolute(frame);
        session.mark_game_start(round, start)?;
    }

    let window = args.range.map(|r| DisplayWindow::new(r.start, r.end));
    let stdout = std::io::stdout();
    write_listing(&mut stdout.lock(), &session, round, player, window)
}
