//! Editing session
//!
//! An [`EditSession`] owns one loaded [`BattleLog`] together with everything
//! derived from it: the rounds, the edit ledger and per-round game-start
//! marks. Callers pass the round and player explicitly on every call.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use super::binary;
use super::countdown::{self, Countdown};
use super::edit::{EditLedger, apply_edit};
use super::error::ReplayError;
use super::groups::FrameGroups;
use super::info::LogSummary;
use super::input::Buttons;
use super::rounds::segment;
use super::types::{BattleLog, EditAction, EditRange, FrameGroup, Round};

/// One loaded battle log and its editing state.
#[derive(Debug, Clone)]
pub struct EditSession {
    log: BattleLog,
    rounds: Vec<Round>,
    ledger: EditLedger,
    game_starts: BTreeMap<usize, usize>,
    dirty: bool,
}

impl EditSession {
    /// Start a session over `log`, deriving its rounds.
    ///
    /// # Errors
    ///
    /// [`ReplayError::MalformedLog`] if the log has no frames or bad round
    /// markers.
    pub fn new(log: BattleLog) -> Result<Self, ReplayError> {
        let rounds = segment(log.inputs.len(), &log.round_starts)?;
        debug!(
            frames = log.inputs.len(),
            rounds = rounds.len(),
            players = log.player_count(),
            "session started"
        );
        Ok(Self {
            log,
            rounds,
            ledger: EditLedger::new(),
            game_starts: BTreeMap::new(),
            dirty: false,
        })
    }

    /// Load a `.pb` file and start a session over it.
    pub fn open(path: &Path) -> Result<Self, ReplayError> {
        Self::new(binary::read_file(path)?)
    }

    /// Write the current log to `path` and clear the dirty flag.
    pub fn save(&mut self, path: &Path) -> Result<(), ReplayError> {
        binary::write_file(path, &self.log)?;
        self.dirty = false;
        Ok(())
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Give the log back, ending the session.
    pub fn into_log(self) -> BattleLog {
        self.log
    }

    pub fn player_count(&self) -> usize {
        self.log.player_count()
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Look up a round by index.
    pub fn round(&self, round: usize) -> Result<Round, ReplayError> {
        self.rounds
            .get(round)
            .copied()
            .ok_or(ReplayError::InvalidRound {
                round,
                round_count: self.rounds.len(),
            })
    }

    fn check_player(&self, player: usize) -> Result<(), ReplayError> {
        if player < self.player_count() {
            Ok(())
        } else {
            Err(ReplayError::InvalidPlayer {
                player,
                player_count: self.player_count(),
            })
        }
    }

    /// Lazily group `player`'s inputs in `round`.
    pub fn frame_groups(&self, round: usize, player: usize) -> Result<FrameGroups<'_>, ReplayError> {
        let bounds = self.round(round)?;
        self.check_player(player)?;
        Ok(FrameGroups::new(&self.log.inputs, player, bounds))
    }

    /// Group `player`'s inputs in `round`.
    pub fn groups(&self, round: usize, player: usize) -> Result<Vec<FrameGroup>, ReplayError> {
        Ok(self.frame_groups(round, player)?.collect())
    }

    /// Set or clear `keys` for `player` over absolute frames `start..=end`
    /// and record the edit against `round`.
    ///
    /// Returns the number of frames that existed in the range.
    pub fn apply(
        &mut self,
        round: usize,
        player: usize,
        start: usize,
        end: usize,
        action: EditAction,
        keys: Buttons,
    ) -> Result<usize, ReplayError> {
        self.round(round)?;
        let player_count = self.player_count();
        let visited = apply_edit(
            &mut self.log.inputs,
            player_count,
            player,
            start,
            end,
            action,
            keys,
        )?;

        self.ledger.record(EditRange {
            start,
            end,
            player,
            round,
        });
        self.dirty = true;
        info!(round, player, start, end, ?action, keys = %keys, "edited frames");
        Ok(visited)
    }

    /// Recorded edits for this session.
    pub fn ledger(&self) -> &EditLedger {
        &self.ledger
    }

    /// Whether `group` was touched by any edit of `player` in `round`.
    pub fn is_edited(&self, round: usize, player: usize, group: &FrameGroup) -> bool {
        self.ledger.overlaps(round, player, group.start, group.end)
    }

    /// Whether the log changed since it was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the frame at which the match clock starts in `round`.
    ///
    /// Replaces any earlier mark for that round.
    pub fn mark_game_start(&mut self, round: usize, frame: usize) -> Result<(), ReplayError> {
        self.round(round)?;
        self.game_starts.insert(round, frame);
        Ok(())
    }

    /// The game-start mark of `round`, if set.
    pub fn game_start(&self, round: usize) -> Option<usize> {
        self.game_starts.get(&round).copied()
    }

    /// Countdown at `frame` against `round`'s game-start mark.
    pub fn countdown(&self, round: usize, frame: usize) -> Option<Countdown> {
        countdown::remaining(frame, self.game_start(round)?)
    }

    /// Summary for display; `path` helps recover a missing start time.
    pub fn summary(&self, path: Option<&Path>) -> LogSummary {
        LogSummary::new(&self.log, &self.rounds, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditSession {
        EditSession::new(BattleLog::from_inputs(vec![0, 0, 5, 5, 5, 0], Vec::new())).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_log() {
        let err = EditSession::new(BattleLog::default()).unwrap_err();
        assert!(matches!(err, ReplayError::MalformedLog(_)));
    }

    #[test]
    fn test_round_lookup() {
        let session = session();
        assert_eq!(session.round(0).unwrap(), Round { start: 0, end: 5 });
        assert!(matches!(
            session.round(1),
            Err(ReplayError::InvalidRound { round: 1, round_count: 1 })
        ));
    }

    #[test]
    fn test_groups_validate_player() {
        let session = session();
        assert_eq!(session.groups(0, 0).unwrap().len(), 3);
        assert!(matches!(
            session.groups(0, 2),
            Err(ReplayError::InvalidPlayer { player: 2, player_count: 2 })
        ));
    }

    #[test]
    fn test_apply_records_and_marks_dirty() {
        let mut session = session();
        assert!(!session.is_dirty());

        session
            .apply(0, 0, 0, 1, EditAction::Add, Buttons::A)
            .unwrap();
        assert!(session.is_dirty());
        assert_eq!(
            session.ledger().ranges(),
            &[EditRange { start: 0, end: 1, player: 0, round: 0 }]
        );

        let groups = session.groups(0, 0).unwrap();
        assert!(session.is_edited(0, 0, &groups[0]));
        assert!(!session.is_edited(0, 0, &groups[1]));
        assert!(!session.is_edited(0, 1, &groups[0]));
    }

    #[test]
    fn test_failed_apply_records_nothing() {
        let mut session = session();
        assert!(session.apply(0, 0, 3, 1, EditAction::Add, Buttons::A).is_err());
        assert!(session.apply(0, 5, 0, 1, EditAction::Add, Buttons::A).is_err());
        assert!(session.apply(9, 0, 0, 1, EditAction::Add, Buttons::A).is_err());
        assert!(session.ledger().is_empty());
        assert!(!session.is_dirty());
        assert_eq!(session.log().inputs, vec![0, 0, 5, 5, 5, 0]);
    }

    #[test]
    fn test_game_start_countdown() {
        let mut session = EditSession::new(BattleLog::from_inputs(vec![0; 200], vec![0, 100]))
            .unwrap();
        assert_eq!(session.countdown(1, 150), None);

        session.mark_game_start(1, 110).unwrap();
        assert_eq!(session.game_start(1), Some(110));
        assert_eq!(session.game_start(0), None);
        assert_eq!(session.countdown(1, 109), None);
        assert_eq!(session.countdown(1, 170).unwrap().to_string(), "208' 99\"");

        assert!(session.mark_game_start(2, 0).is_err());
    }

    #[test]
    fn test_save_clears_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edited.pb");

        let mut session = session();
        session
            .apply(0, 1, 2, 4, EditAction::Add, Buttons::UP)
            .unwrap();
        session.save(&path).unwrap();
        assert!(!session.is_dirty());

        let reopened = EditSession::open(&path).unwrap();
        assert_eq!(reopened.log().inputs, session.log().inputs);
        assert!(reopened.ledger().is_empty());
    }
}
