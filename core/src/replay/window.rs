//! Paging window over a round's frame groups

use super::types::FrameGroup;

/// Inclusive span of round-relative frames selected for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    pub start: usize,
    pub end: usize,
}

impl DisplayWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Window framing an edit of `[start, end]` with `context` frames on
    /// either side, clipped to the round.
    pub fn around_edit(start: usize, end: usize, context: usize, round_len: usize) -> Self {
        Self {
            start: start.saturating_sub(context),
            end: end
                .saturating_add(context)
                .min(round_len.saturating_sub(1)),
        }
    }

    /// Move forward by `step`. Returns `false` and stays put when the new
    /// start would fall at or past `frame_count`.
    pub fn forward(&mut self, step: usize, frame_count: usize) -> bool {
        let start = self.start.saturating_add(step);
        if start >= frame_count {
            return false;
        }
        self.start = start;
        self.end = self.end.saturating_add(step);
        true
    }

    /// Move back by `step`, stopping at frame 0.
    pub fn back(&mut self, step: usize) {
        self.start = self.start.saturating_sub(step);
        self.end = self.end.saturating_sub(step);
    }

    /// Whether `group`'s round-relative span touches the window.
    pub fn shows(&self, group: &FrameGroup) -> bool {
        group.overlaps(self.start, self.end)
    }
}
