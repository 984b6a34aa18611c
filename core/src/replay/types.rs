//! Core types for the replay input model
//!
//! [`BattleLog`] is the decoded container; [`Round`], [`FrameGroup`] and
//! [`EditRange`] are derived views and records over its frames.

use serde::{Deserialize, Serialize};

use super::binary::proto::{BattleLogMessage, BattleLogUser};
use super::input::MAX_PLAYERS;

/// Player count assumed when the roster is empty.
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Complete battle log (in-memory representation)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleLog {
    pub battle_code: String,
    pub game_disk: String,
    pub patch_name: String,
    pub log_file_version: i32,
    /// Opaque rule block, carried through unchanged.
    pub rule_bin: Vec<u8>,
    pub users: Vec<BattleLogUser>,
    /// Lobby messages, carried through unchanged.
    pub battle_data: Vec<BattleLogMessage>,
    /// Epoch milliseconds.
    pub start_at: Option<i64>,
    /// Epoch milliseconds.
    pub end_at: Option<i64>,
    /// Frame indices where rounds begin, as stored in the container.
    pub round_starts: Vec<i32>,
    /// One packed word per frame.
    #[serde(with = "decimal_words")]
    pub inputs: Vec<u64>,
}

impl BattleLog {
    /// Create a log with the given frames and round markers and no roster.
    pub fn from_inputs(inputs: Vec<u64>, round_starts: Vec<i32>) -> Self {
        Self {
            inputs,
            round_starts,
            ..Self::default()
        }
    }

    /// Number of players: the roster size (at most 4), or 2 without a roster.
    pub fn player_count(&self) -> usize {
        if self.users.is_empty() {
            DEFAULT_PLAYER_COUNT
        } else {
            self.users.len().min(MAX_PLAYERS)
        }
    }

    /// Total number of frames.
    pub fn frame_count(&self) -> usize {
        self.inputs.len()
    }

    /// Serialize to pretty JSON; frame words are written as decimal strings.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse the JSON produced by [`BattleLog::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl BattleLogUser {
    /// Roster line: `ID: <id>, HN: <handle>, PN: <pilot>`.
    pub fn label(&self) -> String {
        fn or_na(s: &str) -> &str {
            if s.is_empty() { "N/A" } else { s }
        }
        format!(
            "ID: {}, HN: {}, PN: {}",
            or_na(&self.user_id),
            or_na(&self.user_name),
            or_na(&self.pilot_name)
        )
    }
}

/// Inclusive frame bounds of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub start: usize,
    pub end: usize,
}

impl Round {
    /// Number of frames in the round.
    pub fn frame_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether an absolute frame lies inside the round.
    pub fn contains(&self, frame: usize) -> bool {
        (self.start..=self.end).contains(&frame)
    }

    /// Convert a round-relative frame to an absolute one, saturating at
    /// `usize::MAX`.
    pub fn absolute(&self, relative: usize) -> usize {
        self.start.saturating_add(relative)
    }

    /// Convert an absolute frame to a round-relative one.
    pub fn relative(&self, frame: usize) -> Option<usize> {
        frame.checked_sub(self.start)
    }
}

/// Maximal run of frames where one player's field holds `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameGroup {
    pub start: usize,
    pub end: usize,
    pub value: u16,
}

impl FrameGroup {
    /// Number of frames in the group.
    pub fn frame_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether the group shares any frame with `[start, end]`.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.end >= start && self.start <= end
    }
}

/// Bitmask operation applied by an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditAction {
    /// Set the key bits.
    Add,
    /// Clear the key bits.
    Remove,
}

impl EditAction {
    /// Apply the action to one field.
    #[inline]
    pub fn apply(self, field: u16, mask: u16) -> u16 {
        match self {
            EditAction::Add => field | mask,
            EditAction::Remove => field & !mask,
        }
    }

    /// Verb used in prompts ("add" / "remove").
    pub fn verb(self) -> &'static str {
        match self {
            EditAction::Add => "add",
            EditAction::Remove => "remove",
        }
    }

    /// Past tense used in confirmations ("added" / "removed").
    pub fn past_tense(self) -> &'static str {
        match self {
            EditAction::Add => "added",
            EditAction::Remove => "removed",
        }
    }
}

/// Record of one applied edit, in absolute frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRange {
    pub start: usize,
    pub end: usize,
    pub player: usize,
    pub round: usize,
}

/// Serde adapter writing `u64` frame words as decimal strings.
///
/// JSON consumers commonly parse numbers as doubles, which cannot hold every
/// 64-bit word.
mod decimal_words {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(words: &[u64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(words.iter().map(|w| w.to_string()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .iter()
            .map(|s| s.parse::<u64>().map_err(D::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_count_from_roster() {
        let mut log = BattleLog::from_inputs(vec![0; 4], Vec::new());
        assert_eq!(log.player_count(), DEFAULT_PLAYER_COUNT);

        log.users = vec![BattleLogUser::default(); 3];
        assert_eq!(log.player_count(), 3);

        log.users = vec![BattleLogUser::default(); 6];
        assert_eq!(log.player_count(), MAX_PLAYERS);
    }

    #[test]
    fn test_user_label() {
        let user = BattleLogUser {
            user_id: "AB12CD".to_string(),
            pilot_name: "Char".to_string(),
            ..Default::default()
        };
        assert_eq!(user.label(), "ID: AB12CD, HN: N/A, PN: Char");
    }

    #[test]
    fn test_round_helpers() {
        let round = Round { start: 10, end: 14 };
        assert_eq!(round.frame_count(), 5);
        assert!(round.contains(10));
        assert!(round.contains(14));
        assert!(!round.contains(15));
        assert_eq!(round.absolute(3), 13);
        assert_eq!(round.absolute(usize::MAX), usize::MAX);
        assert_eq!(round.relative(13), Some(3));
        assert_eq!(round.relative(9), None);
    }

    #[test]
    fn test_edit_action_apply() {
        assert_eq!(EditAction::Add.apply(0x0001, 0x4000), 0x4001);
        assert_eq!(EditAction::Add.apply(0x4001, 0x4000), 0x4001);
        assert_eq!(EditAction::Remove.apply(0x4001, 0x4000), 0x0001);
        assert_eq!(EditAction::Remove.apply(0x0001, 0x4000), 0x0001);
    }

    #[test]
    fn test_json_words_as_strings() {
        let log = BattleLog::from_inputs(vec![u64::MAX, 5], vec![0]);
        let json = log.to_json().unwrap();
        assert!(json.contains("\"18446744073709551615\""));
        assert!(json.contains("\"5\""));

        let parsed = BattleLog::from_json(&json).unwrap();
        assert_eq!(parsed, log);
    }

    #[test]
    fn test_json_rejects_bad_word() {
        let json = r#"{
            "battle_code": "", "game_disk": "", "patch_name": "",
            "log_file_version": 0, "rule_bin": [], "users": [],
            "battle_data": [], "start_at": null, "end_at": null,
            "round_starts": [], "inputs": ["12", "nope"]
        }"#;
        assert!(BattleLog::from_json(json).is_err());
    }
}
