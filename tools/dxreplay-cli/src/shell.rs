//! Shell command - interactive editing menu
//!
//! The menu loops until `Q` or end of input:
//!
//! ```text
//! (A)dd, (R)emove, (S)ave, (F)orward, (B)ack, (Q)uit:
//! ```
//!
//! Forward and back are offered once an edit has selected a window.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

use dxreplay_core::EditorConfig;
use dxreplay_core::replay::{
    Buttons, DisplayWindow, EditAction, EditSession, FrameRange, RangeSeparator,
};

use crate::display::write_listing;
use crate::zero_based;

/// Arguments for the shell command
#[derive(Args)]
pub struct ShellArgs {
    /// Battle log file (.pb)
    pub file: PathBuf,

    /// Player number (starting at 1)
    #[arg(short, long, default_value = "1")]
    pub player: usize,

    /// Round number (starting at 1)
    #[arg(short, long, default_value = "1")]
    pub round: usize,

    /// Frame at which the match clock starts, to show the countdown
    #[arg(long)]
    pub game_start: Option<usize>,
}

/// Execute the shell command
pub fn execute(args: ShellArgs, config: &EditorConfig) -> Result<()> {
    let player = zero_based(args.player, "Player")?;
    let round = zero_based(args.round, "Round")?;

    let mut session = EditSession::open(&args.file)
        .with_context(|| format!("Failed to load battle log: {}", args.file.display()))?;
    // Validate the selection before entering the loop
    session.frame_groups(round, player)?;
    if let Some(frame) = args.game_start {
        let start = session.round(round)?.absolute(frame);
        session.mark_game_start(round, start)?;
    }

    let suggested = config.save.output_path(&args.file);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(session, player, round, config, suggested, stdin.lock(), stdout.lock()).run()
}

/// Menu loop over one session with a fixed player and round.
struct Shell<'a, R, W> {
    session: EditSession,
    player: usize,
    round: usize,
    config: &'a EditorConfig,
    suggested_output: PathBuf,
    window: Option<DisplayWindow>,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    fn new(
        session: EditSession,
        player: usize,
        round: usize,
        config: &'a EditorConfig,
        suggested_output: PathBuf,
        input: R,
        out: W,
    ) -> Self {
        Self {
            session,
            player,
            round,
            config,
            suggested_output,
            window: None,
            input,
            out,
        }
    }

    fn run(&mut self) -> Result<()> {
        loop {
            write_listing(
                &mut self.out,
                &self.session,
                self.round,
                self.player,
                self.window,
            )?;

            let menu = if self.window.is_some() {
                "\n(A)dd, (R)emove, (S)ave, (F)orward, (B)ack, (Q)uit: "
            } else {
                "\n(A)dd, (R)emove, (S)ave, (Q)uit: "
            };
            let Some(choice) = self.prompt(menu)? else {
                break;
            };

            match choice.to_uppercase().as_str() {
                "A" => self.modify(EditAction::Add)?,
                "R" => self.modify(EditAction::Remove)?,
                "S" => self.save()?,
                "F" => self.forward()?,
                "B" => self.back()?,
                "Q" => {
                    if self.session.is_dirty() {
                        warn!("quitting with unsaved edits");
                        writeln!(self.out, "Unsaved edits discarded.")?;
                    }
                    writeln!(self.out, "Exiting.")?;
                    break;
                }
                _ => writeln!(self.out, "Invalid choice.")?,
            }
        }
        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn modify(&mut self, action: EditAction) -> Result<()> {
        let verb = action.verb();
        let Some(text) = self.prompt(&format!(
            "Frame range to {verb} key (e.g., 100~200, relative to round start): "
        ))?
        else {
            return Ok(());
        };
        let range = match FrameRange::parse(&text, RangeSeparator::Tilde) {
            Ok(range) => range,
            Err(_) => {
                writeln!(self.out, "Invalid frame range.")?;
                return Ok(());
            }
        };

        let bounds = self.session.round(self.round)?;
        let window = DisplayWindow::around_edit(
            range.start,
            range.end,
            self.config.display.edit_context,
            bounds.frame_count(),
        );
        write_listing(
            &mut self.out,
            &self.session,
            self.round,
            self.player,
            Some(window),
        )?;

        let Some(key) = self.prompt(&format!("Key to {verb} (e.g., X): "))? else {
            return Ok(());
        };
        let keys = match Buttons::parse_key(&key) {
            Ok(keys) => keys,
            Err(_) => {
                writeln!(self.out, "Invalid key.")?;
                return Ok(());
            }
        };

        match self.session.apply(
            self.round,
            self.player,
            bounds.absolute(range.start),
            bounds.absolute(range.end),
            action,
            keys,
        ) {
            Ok(_) => {
                writeln!(
                    self.out,
                    "Key '{}' {} for frames {}-{} for Player {}.",
                    keys,
                    action.past_tense(),
                    range.start,
                    range.end,
                    self.player + 1
                )?;
                self.window = Some(window);
            }
            Err(e) => writeln!(self.out, "Edit failed: {e}")?,
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let Some(name) = self.prompt(&format!(
            "Enter new filename (e.g., {}): ",
            self.suggested_output.display()
        ))?
        else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.out, "Save cancelled.")?;
            return Ok(());
        }

        let path = PathBuf::from(name);
        match self.session.save(&path) {
            Ok(()) => writeln!(self.out, "Replay saved successfully to {}", path.display())?,
            Err(e) => writeln!(self.out, "Failed to save replay: {e}")?,
        }
        self.window = None;
        Ok(())
    }

    fn forward(&mut self) -> Result<()> {
        let frame_count = self.session.round(self.round)?.frame_count();
        match self.window.as_mut() {
            Some(window) => {
                if !window.forward(self.config.display.page_step, frame_count) {
                    writeln!(self.out, "At the end of the round.")?;
                }
            }
            None => writeln!(self.out, "No range selected to move forward. Displaying all.")?,
        }
        Ok(())
    }

    fn back(&mut self) -> Result<()> {
        match self.window.as_mut() {
            Some(window) => window.back(self.config.display.page_step),
            None => writeln!(self.out, "No range selected to move backward. Displaying all.")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxreplay_core::replay::BattleLog;

    fn session() -> EditSession {
        EditSession::new(BattleLog::from_inputs(vec![0; 60], vec![0, 30])).unwrap()
    }

    /// Run a shell over `script` and return the session and everything printed.
    fn run_script(session: EditSession, script: &str) -> (EditSession, String) {
        let config = EditorConfig::default();
        let mut out = Vec::new();
        let mut shell = Shell::new(
            session,
            0,
            1,
            &config,
            PathBuf::from("log_edited.pb"),
            script.as_bytes(),
            &mut out,
        );
        shell.run().unwrap();
        let session = shell.session;
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quit_immediately() {
        let (session, text) = run_script(session(), "q\n");
        assert!(text.contains("--- Displaying inputs for Player 1, Round 2 ---"));
        assert!(text.contains("Frame 0~29: [30] "));
        assert!(text.contains("(A)dd, (R)emove, (S)ave, (Q)uit: "));
        assert!(text.contains("Exiting."));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, text) = run_script(session(), "");
        assert!(!text.contains("Exiting."));
    }

    #[test]
    fn test_add_then_remove() {
        let (session, text) = run_script(session(), "a\n2~3\na\nr\n2~3\nA\nq\n");
        assert!(text.contains("Key 'A' added for frames 2-3 for Player 1."));
        assert!(text.contains("Key 'A' removed for frames 2-3 for Player 1."));
        assert!(text.contains("(Showing frames 0 to 13)"));
        assert!(text.contains("(F)orward, (B)ack"));
        assert!(text.contains("Unsaved edits discarded."));
        assert_eq!(session.log().inputs, vec![0; 60]);
        assert_eq!(session.ledger().len(), 2);
    }

    #[test]
    fn test_edit_is_relative_to_round() {
        let (session, text) = run_script(session(), "a\n0~1\nup\nq\n");
        assert!(text.contains("Frame 0~1: [02] ↑ *"));
        assert_eq!(session.log().inputs[29], 0);
        assert_eq!(session.log().inputs[30], 0x20);
        assert_eq!(session.log().inputs[31], 0x20);
        assert_eq!(session.log().inputs[32], 0);
    }

    #[test]
    fn test_range_past_log_end_is_clipped() {
        let (session, text) = run_script(session(), "a\n5~18446744073709551615\nup\nq\n");
        assert!(text.contains("Key '↑' added for frames 5-18446744073709551615 for Player 1."));
        assert!(text.contains("Frame 5~29: [25] ↑ *"));
        assert_eq!(session.log().inputs[34], 0);
        assert_eq!(&session.log().inputs[35..], &[0x20; 25]);
        assert_eq!(session.ledger().ranges()[0].end, usize::MAX);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let script = "z\na\n5-9\nr\n9~5\na\n1~2\nQQ\nf\nb\nq\n";
        let (session, text) = run_script(session(), script);
        assert!(text.contains("Invalid choice."));
        assert_eq!(text.matches("Invalid frame range.").count(), 2);
        assert!(text.contains("Invalid key."));
        assert!(text.contains("No range selected to move forward. Displaying all."));
        assert!(text.contains("No range selected to move backward. Displaying all."));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_forward_and_back() {
        let (_, text) = run_script(session(), "a\n0~0\nb\nf\nf\nf\nb\nq\n");
        // Edit window 0~10 (key B), then pages of 10 within a 30-frame round
        assert!(text.contains("(Showing frames 0 to 10)"));
        assert!(text.contains("(Showing frames 10 to 20)"));
        assert!(text.contains("(Showing frames 20 to 30)"));
        assert!(text.contains("At the end of the round."));
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.pb");
        let script = format!("a\n0~4\na\ns\n\ns\n{}\nq\n", path.display());

        let (session, text) = run_script(session(), &script);
        assert!(text.contains("Save cancelled."));
        assert!(text.contains("Enter new filename (e.g., log_edited.pb): "));
        assert!(text.contains(&format!("Replay saved successfully to {}", path.display())));
        assert!(!session.is_dirty());
        assert!(!text.contains("Unsaved edits discarded."));

        let saved = EditSession::open(&path).unwrap();
        assert_eq!(&saved.log().inputs[30..35], &[0x4000; 5]);
    }
}
