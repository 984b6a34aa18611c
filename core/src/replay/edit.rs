//! Range edits and the edit ledger
//!
//! [`apply_edit`] rewrites one player's field across a frame range;
//! [`EditLedger`] remembers which ranges were touched so listings can mark
//! them.

use tracing::{debug, warn};

use super::error::ReplayError;
use super::input::{Buttons, MAX_PLAYERS, extract_field, pack_field};
use super::types::{EditAction, EditRange};

/// Set or clear `keys` in `player`'s field over frames `start..=end`.
///
/// Frames at or past `inputs.len()` are skipped, so a range running off the
/// end of the log edits what exists. Returns the number of frames visited.
///
/// # Errors
///
/// [`ReplayError::InvalidPlayer`] if `player >= player_count`, and
/// [`ReplayError::InvalidRange`] if `end < start`. Nothing is written when
/// either check fails.
pub fn apply_edit(
    inputs: &mut [u64],
    player_count: usize,
    player: usize,
    start: usize,
    end: usize,
    action: EditAction,
    keys: Buttons,
) -> Result<usize, ReplayError> {
    if player >= player_count.min(MAX_PLAYERS) {
        return Err(ReplayError::InvalidPlayer {
            player,
            player_count,
        });
    }
    if end < start {
        return Err(ReplayError::InvalidRange(format!(
            "end frame {end} is before start frame {start}"
        )));
    }

    let mask = keys.bits();
    let mut visited = 0;
    for word in inputs.iter_mut().take(end.saturating_add(1)).skip(start) {
        let field = action.apply(extract_field(*word, player), mask);
        *word = pack_field(*word, player, field);
        visited += 1;
    }

    let requested = (end - start).saturating_add(1);
    if visited < requested {
        warn!(
            start,
            end,
            frame_count = inputs.len(),
            skipped = requested - visited,
            "edit range runs past the end of the log"
        );
    }
    debug!(player, start, end, ?action, keys = %keys, visited, "applied edit");

    Ok(visited)
}

/// Append-only record of applied edits.
#[derive(Debug, Clone, Default)]
pub struct EditLedger {
    ranges: Vec<EditRange>,
}

impl EditLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Record an applied edit. Overlapping ranges are kept as-is.
    pub fn record(&mut self, range: EditRange) {
        self.ranges.push(range);
    }

    /// Whether any edit for `round`/`player` touches `start..=end`.
    pub fn overlaps(&self, round: usize, player: usize, start: usize, end: usize) -> bool {
        self.ranges
            .iter()
            .any(|r| r.round == round && r.player == player && r.end >= start && r.start <= end)
    }

    /// Recorded edits, oldest first.
    pub fn ranges(&self) -> &[EditRange] {
        &self.ranges
    }

    /// Number of recorded edits.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Forget all edits (used when a new log is loaded).
    pub fn clear(&mut self) {
        self.ranges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sets_bits_in_range_only() {
        let mut inputs = vec![0u64, 0, 5, 5, 5, 0];
        let visited = apply_edit(&mut inputs, 3, 0, 0, 1, EditAction::Add, Buttons::A).unwrap();
        assert_eq!(visited, 2);
        assert_eq!(inputs, vec![0x4000, 0x4000, 5, 5, 5, 0]);
    }

    #[test]
    fn test_remove_clears_bits() {
        let mut inputs = vec![0x4001u64, 0x4001];
        apply_edit(&mut inputs, 2, 0, 0, 1, EditAction::Remove, Buttons::A).unwrap();
        assert_eq!(inputs, vec![0x0001, 0x0001]);
    }

    #[test]
    fn test_other_players_untouched() {
        let mut inputs = vec![0xAAAA_BBBB_CCCC_DDDDu64; 3];
        apply_edit(&mut inputs, 4, 2, 0, 2, EditAction::Add, Buttons::L).unwrap();
        for word in &inputs {
            assert_eq!(extract_field(*word, 0), 0xDDDD);
            assert_eq!(extract_field(*word, 1), 0xCCCC);
            assert_eq!(extract_field(*word, 2), 0xBBBB | 0x8000);
            assert_eq!(extract_field(*word, 3), 0xAAAA);
        }
    }

    #[test]
    fn test_tail_past_end_skipped() {
        let mut inputs = vec![0u64; 4];
        let visited = apply_edit(&mut inputs, 2, 1, 2, 100, EditAction::Add, Buttons::X).unwrap();
        assert_eq!(visited, 2);
        assert_eq!(inputs, vec![0, 0, 0x2_0000, 0x2_0000]);

        let visited = apply_edit(&mut inputs, 2, 1, 50, 60, EditAction::Add, Buttons::X).unwrap();
        assert_eq!(visited, 0);
    }

    #[test]
    fn test_range_to_usize_max_is_clipped() {
        let mut inputs = vec![0u64; 4];
        let visited =
            apply_edit(&mut inputs, 2, 0, 0, usize::MAX, EditAction::Add, Buttons::A).unwrap();
        assert_eq!(visited, 4);
        assert_eq!(inputs, vec![0x4000; 4]);
    }

    #[test]
    fn test_invalid_player_writes_nothing() {
        let mut inputs = vec![0u64; 4];
        let err = apply_edit(&mut inputs, 2, 2, 0, 3, EditAction::Add, Buttons::A).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::InvalidPlayer { player: 2, player_count: 2 }
        ));
        assert_eq!(inputs, vec![0; 4]);
    }

    #[test]
    fn test_inverted_range_writes_nothing() {
        let mut inputs = vec![0u64; 4];
        let err = apply_edit(&mut inputs, 2, 0, 3, 1, EditAction::Add, Buttons::A).unwrap_err();
        assert!(matches!(err, ReplayError::InvalidRange(_)));
        assert_eq!(inputs, vec![0; 4]);
    }

    #[test]
    fn test_ledger_overlap() {
        let mut ledger = EditLedger::new();
        assert!(!ledger.overlaps(0, 0, 0, 100));

        ledger.record(EditRange { start: 10, end: 20, player: 1, round: 0 });
        assert!(ledger.overlaps(0, 1, 20, 30));
        assert!(ledger.overlaps(0, 1, 0, 10));
        assert!(ledger.overlaps(0, 1, 12, 14));
        assert!(!ledger.overlaps(0, 1, 21, 30));
        assert!(!ledger.overlaps(0, 0, 10, 20));
        assert!(!ledger.overlaps(1, 1, 10, 20));
    }

    #[test]
    fn test_ledger_keeps_duplicates() {
        let mut ledger = EditLedger::new();
        let range = EditRange { start: 0, end: 1, player: 0, round: 0 };
        ledger.record(range);
        ledger.record(range);
        assert_eq!(ledger.len(), 2);

        ledger.clear();
        assert!(ledger.is_empty());
    }
}
