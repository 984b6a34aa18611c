//! Battle log input model
//!
//! Loading, inspecting and editing recorded per-frame inputs:
//!
//! - **Container (`.pb`)**: protobuf `BattleLogFile` as written by the server
//! - **Frame words**: one `u64` per frame, a 16-bit field per player
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Loading                              │
//! │ .pb → BinaryReader → BattleLog → segment → Vec<Round>       │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Editing                              │
//! │ (round, player) → FrameGroups → listing                     │
//! │ range + key → apply_edit → inputs (in place)                │
//! │                         └→ EditLedger (marks edited groups) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use dxreplay_core::replay::{Buttons, EditAction, EditSession};
//!
//! let mut session = EditSession::open(Path::new("1753648709739.pb"))?;
//! let round = session.round(0)?;
//!
//! // Hold A for player 1 over the first two frames of the round
//! session.apply(0, 0, round.start, round.start + 1, EditAction::Add, Buttons::A)?;
//!
//! for group in session.frame_groups(0, 0)? {
//!     println!("{}~{}: {}", group.start, group.end, describe(group.value));
//! }
//!
//! session.save(Path::new("1753648709739_edited.pb"))?;
//! ```

pub mod binary;
pub mod countdown;
pub mod edit;
pub mod error;
pub mod groups;
pub mod info;
pub mod input;
pub mod notation;
pub mod rounds;
pub mod session;
pub mod types;
pub mod window;


// Re-export core types
pub use types::{BattleLog, DEFAULT_PLAYER_COUNT, EditAction, EditRange, FrameGroup, Round};

pub use countdown::{Countdown, remaining};
pub use edit::{EditLedger, apply_edit};
pub use error::ReplayError;
pub use groups::{FrameGroups, group};
pub use info::LogSummary;
pub use input::{Buttons, Direction, MAX_PLAYERS, describe, extract_field, pack_field};
pub use notation::{FrameRange, RangeSeparator};
pub use rounds::segment;
pub use session::EditSession;
pub use window::DisplayWindow;

// Re-export binary format
pub use binary::{BinaryReader, BinaryWriter, read_file, write_file};
