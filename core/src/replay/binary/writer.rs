//! Battle log container writer

use prost::Message;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::proto::BattleLogFile;
use crate::replay::error::ReplayError;
use crate::replay::types::BattleLog;

/// Writer for `.pb` battle log files
pub struct BinaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a new binary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Encode and write a complete battle log
    pub fn write_log(&mut self, log: &BattleLog) -> Result<(), ReplayError> {
        let bytes = BattleLogFile::from(log).encode_to_vec();
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer and return the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write a battle log to a file, replacing any existing file
pub fn write_file(path: &Path, log: &BattleLog) -> Result<(), ReplayError> {
    let file = std::fs::File::create(path)?;
    BinaryWriter::new(std::io::BufWriter::new(file)).write_log(log)?;
    info!(path = %path.display(), frames = log.inputs.len(), "saved battle log");
    Ok(())
}
