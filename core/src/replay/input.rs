//! Packed per-frame input words
//!
//! Every frame of a battle log is one `u64`. Each player owns a 16-bit field
//! inside it, least-significant first:
//!
//! ```text
//! bit 63            48 47            32 31            16 15             0
//! ┌──────────────────┬──────────────────┬──────────────────┬──────────────────┐
//! │     player 4     │     player 3     │     player 2     │     player 1     │
//! └──────────────────┴──────────────────┴──────────────────┴──────────────────┘
//! ```
//!
//! Within a field, [`Buttons`] names the direction and action bits.

use std::fmt;
use std::str::FromStr;

use super::error::ReplayError;

/// Maximum number of players a frame word can carry.
pub const MAX_PLAYERS: usize = 4;

/// Width of one player's field in bits.
pub const FIELD_BITS: u32 = 16;

const FIELD_MASK: u64 = 0xFFFF;

#[inline]
fn field_shift(player: usize) -> u32 {
    debug_assert!(player < MAX_PLAYERS, "player {player} out of range");
    player as u32 * FIELD_BITS
}

/// Extract one player's 16-bit field from a frame word.
///
/// `player` must be below [`MAX_PLAYERS`].
#[inline]
pub fn extract_field(word: u64, player: usize) -> u16 {
    ((word >> field_shift(player)) & FIELD_MASK) as u16
}

/// Replace one player's 16-bit field in a frame word.
///
/// All bits outside the player's field are returned unchanged.
#[inline]
pub fn pack_field(word: u64, player: usize, value: u16) -> u64 {
    let shift = field_shift(player);
    (word & !(FIELD_MASK << shift)) | ((value as u64 & FIELD_MASK) << shift)
}

bitflags::bitflags! {
    /// Button bits within one player's field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        const UP = 0x0020;
        const DOWN = 0x0010;
        const LEFT = 0x0008;
        const RIGHT = 0x0004;
        const A = 0x4000;
        const B = 0x2000;
        const X = 0x0002;
        const Y = 0x0001;
        const R = 0x1000;
        const L = 0x8000;
        const S = 0x0080;
    }
}

/// Action buttons in display order.
pub const ACTION_BUTTONS: [(Buttons, &str); 7] = [
    (Buttons::A, "A"),
    (Buttons::B, "B"),
    (Buttons::X, "X"),
    (Buttons::Y, "Y"),
    (Buttons::R, "R"),
    (Buttons::L, "L"),
    (Buttons::S, "S"),
];

/// The eight stick directions a field can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Arrow glyph used in listings.
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Left => "←",
            Direction::Right => "→",
            Direction::UpLeft => "↖",
            Direction::UpRight => "↗",
            Direction::DownLeft => "↙",
            Direction::DownRight => "↘",
        }
    }
}

impl Buttons {
    /// Interpret a raw field, keeping bits that have no name.
    pub fn from_field(value: u16) -> Self {
        Self::from_bits_retain(value)
    }

    /// The direction these bits describe, diagonals first.
    pub fn direction(self) -> Option<Direction> {
        let up = self.contains(Buttons::UP);
        let down = self.contains(Buttons::DOWN);
        let left = self.contains(Buttons::LEFT);
        let right = self.contains(Buttons::RIGHT);

        if up && left {
            Some(Direction::UpLeft)
        } else if up && right {
            Some(Direction::UpRight)
        } else if down && left {
            Some(Direction::DownLeft)
        } else if down && right {
            Some(Direction::DownRight)
        } else if up {
            Some(Direction::Up)
        } else if down {
            Some(Direction::Down)
        } else if left {
            Some(Direction::Left)
        } else if right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Tokens for the direction (if any) followed by pressed action buttons.
    pub fn tokens(self) -> Vec<&'static str> {
        let mut tokens = Vec::with_capacity(8);
        if let Some(direction) = self.direction() {
            tokens.push(direction.symbol());
        }
        for (button, name) in ACTION_BUTTONS {
            if self.contains(button) {
                tokens.push(name);
            }
        }
        tokens
    }

    /// Parse a single key token such as `"a"`, `"↑"` or `"left"`.
    ///
    /// Matching is case-insensitive. Anything that does not name exactly one
    /// button is rejected.
    pub fn parse_key(token: &str) -> Result<Self, ReplayError> {
        let key = match token.trim().to_uppercase().as_str() {
            "↑" | "UP" => Buttons::UP,
            "↓" | "DOWN" => Buttons::DOWN,
            "←" | "LEFT" => Buttons::LEFT,
            "→" | "RIGHT" => Buttons::RIGHT,
            "A" => Buttons::A,
            "B" => Buttons::B,
            "X" => Buttons::X,
            "Y" => Buttons::Y,
            "R" => Buttons::R,
            "L" => Buttons::L,
            "S" => Buttons::S,
            _ => return Err(ReplayError::InvalidKey(token.to_string())),
        };
        Ok(key)
    }
}

impl fmt::Display for Buttons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

impl FromStr for Buttons {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s)
    }
}

/// Render a raw field as space-separated tokens (empty when idle).
pub fn describe(value: u16) -> String {
    Buttons::from_field(value).to_string()
}
