//! CLI module for the Draft Coordinator
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP API server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Draft Coordinator - team registration and draft kickoff service
#[derive(Parser)]
#[command(name = "draft-coordinator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve(serve::ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}
