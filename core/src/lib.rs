//! dxreplay core - battle log input editing
//!
//! This crate provides the replay input model used by the `dxreplay` tool:
//! decoding packed per-frame input words, deriving rounds, grouping inputs
//! for display and applying range edits.
//!
//! # Architecture
//!
//! - [`replay::EditSession`] - One loaded log with its rounds and edit ledger
//! - [`replay::FrameGroups`] - Run-length view of one player's inputs
//! - [`replay::apply_edit`] - Bitmask add/remove over a frame range
//! - [`config::EditorConfig`] - User settings from `config.toml`

pub mod config;
pub mod replay;

pub use config::EditorConfig;
pub use replay::{
    BattleLog, Buttons, EditAction, EditSession, FrameGroup, ReplayError, Round,
};
