//! Frame listings shared by `show`, `edit` and `shell`

use anyhow::Result;
use std::io::Write;

use dxreplay_core::replay::{DisplayWindow, EditSession, FrameGroup, Round, describe};

/// One listing line: `Frame a~b: [NN] tokens`, in round-relative frames.
///
/// Edited groups get a trailing `*`; `countdown` is appended when known.
pub fn group_line(group: &FrameGroup, edited: bool, countdown: Option<&str>) -> String {
    let mut line = format!(
        "Frame {}~{}: [{:02}] {}",
        group.start,
        group.end,
        group.frame_count(),
        describe(group.value)
    );
    if let Some(countdown) = countdown {
        line.push_str("  ");
        line.push_str(countdown);
    }
    if edited {
        line.push_str(" *");
    }
    line
}

fn to_relative(group: &FrameGroup, round: Round) -> FrameGroup {
    FrameGroup {
        start: group.start - round.start,
        end: group.end - round.start,
        value: group.value,
    }
}

/// Print `player`'s groups in `round`, limited to `window` when given.
pub fn write_listing<W: Write>(
    out: &mut W,
    session: &EditSession,
    round: usize,
    player: usize,
    window: Option<DisplayWindow>,
) -> Result<()> {
    let bounds = session.round(round)?;
    writeln!(
        out,
        "\n--- Displaying inputs for Player {}, Round {} ---",
        player + 1,
        round + 1
    )?;
    if let Some(window) = window {
        writeln!(out, "(Showing frames {} to {})", window.start, window.end)?;
    }

    let mut shown = 0;
    for group in session.frame_groups(round, player)? {
        let relative = to_relative(&group, bounds);
        if window.is_some_and(|w| !w.shows(&relative)) {
            continue;
        }
        let countdown = session
            .countdown(round, group.start)
            .map(|c| c.to_string());
        let edited = session.is_edited(round, player, &group);
        writeln!(out, "{}", group_line(&relative, edited, countdown.as_deref()))?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No frames to display.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxreplay_core::replay::{BattleLog, Buttons, EditAction};

    fn listing(session: &EditSession, round: usize, window: Option<DisplayWindow>) -> String {
        let mut out = Vec::new();
        write_listing(&mut out, session, round, 0, window).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_group_line() {
        let group = FrameGroup { start: 2, end: 4, value: 0x4024 };
        assert_eq!(group_line(&group, false, None), "Frame 2~4: [03] ↗ A");
        assert_eq!(group_line(&group, true, None), "Frame 2~4: [03] ↗ A *");
        assert_eq!(
            group_line(&group, false, Some("208' 99\"")),
            "Frame 2~4: [03] ↗ A  208' 99\""
        );
    }

    #[test]
    fn test_listing_uses_round_relative_frames() {
        let mut session =
            EditSession::new(BattleLog::from_inputs(vec![0; 30], vec![0, 10])).unwrap();
        session
            .apply(1, 0, 15, 16, EditAction::Add, Buttons::B)
            .unwrap();

        let text = listing(&session, 1, None);
        assert!(text.contains("Player 1, Round 2"));
        assert!(text.contains("Frame 0~4: [05] \n"));
        assert!(text.contains("Frame 5~6: [02] B *"));
        assert!(text.contains("Frame 7~19: [13] \n"));
    }

    #[test]
    fn test_listing_window_filters() {
        let session =
            EditSession::new(BattleLog::from_inputs(vec![0, 0, 1, 1, 2, 2], Vec::new())).unwrap();

        let text = listing(&session, 0, Some(DisplayWindow::new(2, 3)));
        assert!(text.contains("(Showing frames 2 to 3)"));
        assert!(text.contains("Frame 2~3"));
        assert!(!text.contains("Frame 0~1"));
        assert!(!text.contains("Frame 4~5"));

        let text = listing(&session, 0, Some(DisplayWindow::new(40, 50)));
        assert!(text.contains("No frames to display."));
    }

    #[test]
    fn test_listing_countdown() {
        let mut session = EditSession::new(BattleLog::from_inputs(
            [vec![0u64; 60], vec![0x4000; 10]].concat(),
            Vec::new(),
        ))
        .unwrap();
        session.mark_game_start(0, 0).unwrap();

        let text = listing(&session, 0, None);
        assert!(text.contains("Frame 0~59: [60]   210' 00\""));
        assert!(text.contains("Frame 60~69: [10] A  208' 99\""));
    }
}
