//! Team domain module
//!
//! Teams are identified by the name they register with. A team's status is a
//! human-readable phrase describing where it stands in the draft flow.

mod entity;

pub use entity::{Team, TeamName, TeamStatus};
