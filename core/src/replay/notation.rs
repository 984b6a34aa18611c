//! Textual frame ranges
//!
//! Ranges are two inclusive base-10 frame numbers joined by `-` (as typed in
//! the range box) or `~` (as printed in listings and typed at the prompt).

use std::fmt;
use std::str::FromStr;

use super::error::ReplayError;

/// Separator between the two ends of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSeparator {
    /// `100-200`
    Dash,
    /// `100~200`
    Tilde,
}

impl RangeSeparator {
    pub fn as_char(self) -> char {
        match self {
            RangeSeparator::Dash => '-',
            RangeSeparator::Tilde => '~',
        }
    }
}

/// Inclusive frame span parsed from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    pub start: usize,
    pub end: usize,
}

impl FrameRange {
    /// Parse `start<sep>end`, rejecting non-numeric bounds and `end < start`.
    pub fn parse(input: &str, separator: RangeSeparator) -> Result<Self, ReplayError> {
        let input = input.trim();
        let (start, end) = input
            .split_once(separator.as_char())
            .ok_or_else(|| {
                ReplayError::InvalidRange(format!(
                    "expected start{}end, got {input:?}",
                    separator.as_char()
                ))
            })?;

        let start = parse_bound(start)?;
        let end = parse_bound(end)?;
        if end < start {
            return Err(ReplayError::InvalidRange(format!(
                "end frame {end} is before start frame {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn frame_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Render with the given separator.
    pub fn display(&self, separator: RangeSeparator) -> String {
        format!("{}{}{}", self.start, separator.as_char(), self.end)
    }
}

fn parse_bound(s: &str) -> Result<usize, ReplayError> {
    let s = s.trim();
    s.parse::<usize>()
        .map_err(|_| ReplayError::InvalidRange(format!("{s:?} is not a frame number")))
}

/// Accepts either separator; `~` is tried first.
impl FromStr for FrameRange {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('~') {
            Self::parse(s, RangeSeparator::Tilde)
        } else {
            Self::parse(s, RangeSeparator::Dash)
        }
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(RangeSeparator::Tilde))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_separators() {
        assert_eq!(
            FrameRange::parse("100-200", RangeSeparator::Dash).unwrap(),
            FrameRange { start: 100, end: 200 }
        );
        assert_eq!(
            FrameRange::parse(" 100 ~ 200 ", RangeSeparator::Tilde).unwrap(),
            FrameRange { start: 100, end: 200 }
        );
        assert_eq!(
            "7~7".parse::<FrameRange>().unwrap(),
            FrameRange { start: 7, end: 7 }
        );
        assert_eq!(
            "0-3".parse::<FrameRange>().unwrap(),
            FrameRange { start: 0, end: 3 }
        );
    }

    #[test]
    fn test_wrong_separator_rejected() {
        assert!(FrameRange::parse("100~200", RangeSeparator::Dash).is_err());
        assert!(FrameRange::parse("100-200", RangeSeparator::Tilde).is_err());
    }

    #[test]
    fn test_invalid_ranges() {
        for input in ["", "5", "a~b", "1~", "~4", "-1-4", "9~3", "1.5~3"] {
            assert!(
                matches!(input.parse::<FrameRange>(), Err(ReplayError::InvalidRange(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        let range = FrameRange { start: 3, end: 9 };
        assert_eq!(range.to_string(), "3~9");
        assert_eq!(range.display(RangeSeparator::Dash), "3-9");
        assert_eq!(range.frame_count(), 7);
    }
}
