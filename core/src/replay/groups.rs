//! Run-length grouping of one player's inputs within a round

use super::input::extract_field;
use super::types::{FrameGroup, Round};

/// Lazy iterator over the [`FrameGroup`]s of one player in one round.
///
/// Groups come out in ascending frame order. The iterator is `Clone`, so a
/// saved copy restarts the scan from wherever it was taken.
#[derive(Debug, Clone)]
pub struct FrameGroups<'a> {
    inputs: &'a [u64],
    player: usize,
    next: usize,
    end: usize,
}

impl<'a> FrameGroups<'a> {
    /// Group `player`'s field over `round`.
    ///
    /// Frames past the end of `inputs` are ignored, so an empty log yields no
    /// groups.
    pub fn new(inputs: &'a [u64], player: usize, round: Round) -> Self {
        // `next > end` marks an exhausted scan
        let (next, end) = match inputs.len().checked_sub(1) {
            Some(last) if round.start <= last => (round.start, round.end.min(last)),
            _ => (1, 0),
        };
        Self {
            inputs,
            player,
            next,
            end,
        }
    }
}

impl Iterator for FrameGroups<'_> {
    type Item = FrameGroup;

    fn next(&mut self) -> Option<FrameGroup> {
        if self.next > self.end {
            return None;
        }

        let start = self.next;
        let value = extract_field(self.inputs[start], self.player);
        let mut frame = start + 1;
        while frame <= self.end && extract_field(self.inputs[frame], self.player) == value {
            frame += 1;
        }

        self.next = frame;
        Some(FrameGroup {
            start,
            end: frame - 1,
            value,
        })
    }
}

impl std::iter::FusedIterator for FrameGroups<'_> {}

/// Collect every group of `player` in `round`.
pub fn group(inputs: &[u64], player: usize, round: Round) -> Vec<FrameGroup> {
    FrameGroups::new(inputs, player, round).collect()
}
