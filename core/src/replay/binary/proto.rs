//! Protobuf messages of the battle log container
//!
//! Field numbers follow the game server's `gdxsv.proto`. Only the messages a
//! log file needs are declared here.

use serde::{Deserialize, Serialize};

/// One participant in the battle.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct BattleLogUser {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub user_name: String,
    #[prost(string, tag = "3")]
    pub pilot_name: String,
    #[prost(bytes = "vec", tag = "4")]
    pub game_param: Vec<u8>,
    #[prost(int32, tag = "5")]
    pub battle_count: i32,
    #[prost(int32, tag = "6")]
    pub win_count: i32,
    #[prost(int32, tag = "7")]
    pub lose_count: i32,
    #[prost(int32, tag = "8")]
    pub grade: i32,
    #[prost(int32, tag = "9")]
    pub team: i32,
    /// 1-based roster position.
    #[prost(int32, tag = "10")]
    pub pos: i32,
}

/// Raw lobby message captured during the battle.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct BattleLogMessage {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(bytes = "vec", tag = "2")]
    pub body: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub seq: u32,
    #[prost(int64, tag = "4")]
    pub timestamp: i64,
}

/// Top-level message of a `.pb` battle log file.
#[derive(Clone, PartialEq, prost::Message)]
pub struct BattleLogFile {
    #[prost(string, tag = "1")]
    pub game_disk: String,
    #[prost(string, tag = "2")]
    pub battle_code: String,
    #[prost(int32, tag = "3")]
    pub log_file_version: i32,
    #[prost(bytes = "vec", tag = "4")]
    pub rule_bin: Vec<u8>,
    #[prost(message, repeated, tag = "5")]
    pub users: Vec<BattleLogUser>,
    #[prost(message, repeated, tag = "6")]
    pub battle_data: Vec<BattleLogMessage>,
    /// Epoch milliseconds, 0 when unknown.
    #[prost(int64, tag = "7")]
    pub start_at: i64,
    /// Epoch milliseconds, 0 when unknown.
    #[prost(int64, tag = "8")]
    pub end_at: i64,
    #[prost(string, tag = "9")]
    pub patch_name: String,
    /// One packed word per frame.
    #[prost(uint64, repeated, tag = "10")]
    pub inputs: Vec<u64>,
    /// Frame indices where each round begins.
    #[prost(int32, repeated, tag = "11")]
    pub start_msg_indexes: Vec<i32>,
}
