//! Domain layer - Core draft logic and entities

pub mod draft;
pub mod error;
pub mod team;

pub use draft::{DraftBoard, DraftEntry, DraftOrder, DRAFT_TEAM_COUNT};
pub use error::DomainError;
pub use team::{Team, TeamName, TeamStatus};
