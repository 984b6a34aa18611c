//! Battle log container reader

use prost::Message;
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::proto::BattleLogFile;
use crate::replay::error::ReplayError;
use crate::replay::types::BattleLog;

/// Reader for `.pb` battle log files
pub struct BinaryReader<R: Read> {
    reader: R,
}

impl<R: Read> BinaryReader<R> {
    /// Create a new binary reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read and decode a complete battle log
    pub fn read_log(&mut self) -> Result<BattleLog, ReplayError> {
        let mut buffer = Vec::new();
        self.reader.read_to_end(&mut buffer)?;
        let file = BattleLogFile::decode(buffer.as_slice())?;
        Ok(BattleLog::from(file))
    }
}

/// Read a battle log from a file on disk
pub fn read_file(path: &Path) -> Result<BattleLog, ReplayError> {
    let file = std::fs::File::open(path)?;
    let log = BinaryReader::new(std::io::BufReader::new(file)).read_log()?;
    info!(
        path = %path.display(),
        battle_code = %log.battle_code,
        frames = log.inputs.len(),
        rounds = log.round_starts.len(),
        "loaded battle log"
    );
    Ok(log)
}
