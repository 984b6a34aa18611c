//! Error types for battle log editing

use std::io;

/// Errors raised while loading, segmenting or editing a battle log.
///
/// Every variant is recoverable: the operation that produced it is aborted
/// and the in-memory log is left exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// Round markers are out of order or out of bounds, or the log has no
    /// frames where a round is required.
    #[error("malformed battle log: {0}")]
    MalformedLog(String),

    /// Player index outside the log's configured player count.
    #[error("invalid player {player} (log has {player_count} players)")]
    InvalidPlayer { player: usize, player_count: usize },

    /// Round index outside the derived rounds.
    #[error("invalid round {round} (log has {round_count} rounds)")]
    InvalidRound { round: usize, round_count: usize },

    /// End before start, or bounds that are not base-10 integers.
    #[error("invalid frame range: {0}")]
    InvalidRange(String),

    /// Unrecognized button token.
    #[error("invalid key {0:?}")]
    InvalidKey(String),

    /// Reading or writing the container failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container bytes are not a valid battle log message.
    #[error("failed to decode battle log: {0}")]
    Decode(#[from] prost::DecodeError),
}

impl ReplayError {
    /// True for failures at the container boundary (read, write, decode).
    pub fn is_io_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ReplayError::InvalidPlayer {
            player: 3,
            player_count: 2,
        };
        assert_eq!(err.to_string(), "invalid player 3 (log has 2 players)");

        let err = ReplayError::InvalidKey("Q".to_string());
        assert_eq!(err.to_string(), "invalid key \"Q\"");
    }

    #[test]
    fn test_io_failure_family() {
        let err = ReplayError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.is_io_failure());
        assert!(!ReplayError::InvalidRange("x".into()).is_io_failure());
    }
}
