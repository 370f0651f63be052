//! Draft domain module
//!
//! A draft starts as soon as [`DRAFT_TEAM_COUNT`] registered teams have
//! entered draft mode.

mod board;

pub use board::{DraftBoard, DraftEntry, DraftOrder, DRAFT_TEAM_COUNT};
