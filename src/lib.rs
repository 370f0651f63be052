//! Draft Coordinator
//!
//! Teams register by name and signal when they are ready to draft. As soon as
//! three registered teams are ready, the draft starts and the ready set is
//! cleared. All state is held in memory for the life of the process.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::draft::DraftService;
use tracing::info;

/// Create the application state with an empty draft board
pub fn create_app_state() -> AppState {
    info!("Initializing in-memory draft board");
    AppState::new(Arc::new(DraftService::new()))
}
