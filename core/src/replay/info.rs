//! Human-facing summary of a loaded battle log

use chrono::{DateTime, Local, TimeZone};
use std::path::Path;

use super::types::{BattleLog, Round};

/// Frame rate used to estimate the end time of logs without `end_at`.
const ESTIMATE_FPS: f64 = 60.0;

/// Battle code, roster, timing and rounds of a log.
#[derive(Debug, Clone)]
pub struct LogSummary {
    pub battle_code: String,
    pub player_count: usize,
    /// One label per player slot.
    pub players: Vec<String>,
    pub frame_count: usize,
    pub rounds: Vec<Round>,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
}

impl LogSummary {
    /// Summarize `log`, using `path` to recover a start time when the log
    /// lacks one (server logs are named `<epoch ms>.pb`).
    pub fn new(log: &BattleLog, rounds: &[Round], path: Option<&Path>) -> Self {
        let battle_code = if log.battle_code.is_empty() {
            "N/A".to_string()
        } else {
            log.battle_code.clone()
        };

        let players = if log.users.is_empty() {
            vec!["ID: N/A, HN: N/A, PN: N/A".to_string(); log.player_count()]
        } else {
            log.users.iter().map(|u| u.label()).collect()
        };

        let start_ms = log.start_at.or_else(|| path.and_then(epoch_ms_from_file_name));
        let end_ms = log.end_at.or_else(|| {
            let start_ms = start_ms.filter(|&ms| ms > 0)?;
            if log.inputs.is_empty() {
                return None;
            }
            let duration_ms = (log.inputs.len() as f64 / ESTIMATE_FPS * 1000.0) as i64;
            start_ms.checked_add(duration_ms)
        });

        Self {
            battle_code,
            player_count: log.player_count(),
            players,
            frame_count: log.inputs.len(),
            rounds: rounds.to_vec(),
            start: start_ms.and_then(local_time),
            end: end_ms.and_then(local_time),
        }
    }
}

/// Parse `<digits>.pb` into epoch milliseconds.
pub fn epoch_ms_from_file_name(path: &Path) -> Option<i64> {
    if path.extension()? != "pb" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

fn local_time(ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(ms).single()
}
