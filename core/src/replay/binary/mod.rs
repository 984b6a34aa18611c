//! Battle log container (.pb)
//!
//! Logs are stored as a single protobuf `BattleLogFile` message written by
//! the game server:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ BattleLogFile                                │
//! │ ├─ game_disk, battle_code, patch_name        │
//! │ ├─ log_file_version, rule_bin                │
//! │ ├─ users[]        (roster, pos is 1-based)   │
//! │ ├─ battle_data[]  (raw lobby messages)       │
//! │ ├─ start_at, end_at (epoch ms, 0 = unknown)  │
//! │ ├─ inputs[]       (u64 per frame)            │
//! │ └─ start_msg_indexes[] (round markers)       │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! [`BinaryReader`] and [`BinaryWriter`] convert between that message and
//! [`BattleLog`](crate::replay::BattleLog).

pub mod proto;
mod reader;
mod writer;

pub use reader::{BinaryReader, read_file};
pub use writer::{BinaryWriter, write_file};

use super::types::BattleLog;
use proto::BattleLogFile;

fn non_zero(ms: i64) -> Option<i64> {
    (ms != 0).then_some(ms)
}

impl From<BattleLogFile> for BattleLog {
    fn from(file: BattleLogFile) -> Self {
        Self {
            battle_code: file.battle_code,
            game_disk: file.game_disk,
            patch_name: file.patch_name,
            log_file_version: file.log_file_version,
            rule_bin: file.rule_bin,
            users: file.users,
            battle_data: file.battle_data,
            start_at: non_zero(file.start_at),
            end_at: non_zero(file.end_at),
            round_starts: file.start_msg_indexes,
            inputs: file.inputs,
        }
    }
}

impl From<&BattleLog> for BattleLogFile {
    fn from(log: &BattleLog) -> Self {
        Self {
            game_disk: log.game_disk.clone(),
            battle_code: log.battle_code.clone(),
            log_file_version: log.log_file_version,
            rule_bin: log.rule_bin.clone(),
            users: log.users.clone(),
            battle_data: log.battle_data.clone(),
            start_at: log.start_at.unwrap_or(0),
            end_at: log.end_at.unwrap_or(0),
            patch_name: log.patch_name.clone(),
            inputs: log.inputs.clone(),
            start_msg_indexes: log.round_starts.clone(),
        }
    }
}
