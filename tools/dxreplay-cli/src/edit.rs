//! Edit command - add or remove a key over a frame range

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};

use dxreplay_core::EditorConfig;
use dxreplay_core::replay::{Buttons, DisplayWindow, EditAction, EditSession, FrameRange};

use crate::display::write_listing;
use crate::zero_based;

/// Arguments for the edit command
#[derive(Args)]
pub struct EditArgs {
    /// Battle log file (.pb)
    pub file: PathBuf,

    /// Player number (starting at 1)
    #[arg(short, long, default_value = "1")]
    pub player: usize,

    /// Round number (starting at 1)
    #[arg(short, long, default_value = "1")]
    pub round: usize,

    /// Frames to edit, relative to the round start (e.g., 100~200)
    #[arg(long)]
    pub range: FrameRange,

    #[command(flatten)]
    pub key: KeyArgs,

    /// Output file (defaults to the input name with the configured suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Exactly one of `--add` or `--remove`
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct KeyArgs {
    /// Key to press (A, B, X, Y, R, L, S, UP, DOWN, LEFT, RIGHT)
    #[arg(long)]
    pub add: Option<Buttons>,

    /// Key to release
    #[arg(long)]
    pub remove: Option<Buttons>,
}

impl KeyArgs {
    fn action(&self) -> Result<(EditAction, Buttons)> {
        match (self.add, self.remove) {
            (Some(keys), None) => Ok((EditAction::Add, keys)),
            (None, Some(keys)) => Ok((EditAction::Remove, keys)),
            _ => anyhow::bail!("Specify exactly one of --add or --remove"),
        }
    }
}

/// Execute the edit command
pub fn execute(args: EditArgs, config: &EditorConfig) -> Result<()> {
    let mut session = EditSession::open(&args.file)
        .with_context(|| format!("Failed to load battle log: {}", args.file.display()))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.save.output_path(&args.file));

    let stdout = std::io::stdout();
    run(&mut session, &args, config, &output, &mut stdout.lock())
}

fn run<W: Write>(
    session: &mut EditSession,
    args: &EditArgs,
    config: &EditorConfig,
    output: &Path,
    out: &mut W,
) -> Result<()> {
    let player = zero_based(args.player, "Player")?;
    let round = zero_based(args.round, "Round")?;
    let (action, keys) = args.key.action()?;

    let bounds = session.round(round)?;
    let range = args.range;
    let visited = session.apply(
        round,
        player,
        bounds.absolute(range.start),
        bounds.absolute(range.end),
        action,
        keys,
    )?;

    writeln!(
        out,
        "Key '{}' {} for frames {}-{} for Player {} ({} frames).",
        keys,
        action.past_tense(),
        range.start,
        range.end,
        args.player,
        visited
    )?;

    let window = DisplayWindow::around_edit(
        range.start,
        range.end,
        config.display.edit_context,
        bounds.frame_count(),
    );
    write_listing(out, session, round, player, Some(window))?;

    session
        .save(output)
        .with_context(|| format!("Failed to save battle log: {}", output.display()))?;
    writeln!(out, "\nReplay saved successfully to {}", output.display())?;
    Ok(())
}
