//! Match clock projection
//!
//! Converts a frame position into the in-game countdown, given the frame at
//! which the round's clock started.

use std::fmt;

/// Nominal frame rate of the game (NTSC).
pub const FRAME_RATE: f64 = 59.94;

/// Length of a match clock in seconds (3:30).
pub const MATCH_SECONDS: f64 = 210.0;

/// Remaining match time at some frame.
///
/// Goes negative once the clock would have run out; the value is not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    pub remaining_seconds: f64,
}

impl Countdown {
    /// Whole seconds, rounded down.
    pub fn seconds(&self) -> i64 {
        self.remaining_seconds.floor() as i64
    }

    /// Hundredths digits of the remaining time.
    ///
    /// The remainder keeps the sign of the time, so a negative clock shows
    /// negative hundredths.
    pub fn hundredths(&self) -> i64 {
        (self.remaining_seconds * 100.0 % 100.0).floor() as i64
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}' {:02}\"", self.seconds(), self.hundredths())
    }
}

/// Project the countdown at `current_frame` for a clock started at
/// `round_start_frame`.
///
/// Returns `None` before the clock starts.
pub fn remaining(current_frame: usize, round_start_frame: usize) -> Option<Countdown> {
    let elapsed_frames = current_frame.checked_sub(round_start_frame)?;
    let elapsed_seconds = elapsed_frames as f64 / FRAME_RATE;
    Some(Countdown {
        remaining_seconds: MATCH_SECONDS - elapsed_seconds,
    })
}
