use thiserror::Error;

/// Core domain errors
///
/// The display strings are the messages clients receive in the `error` field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Team name already registered")]
    DuplicateTeam { team: String },

    #[error("Team not registered")]
    UnregisteredTeam { team: String },

    #[error("Not enough players to start the draft!")]
    InsufficientPlayers { ready: usize, required: usize },
}

impl DomainError {
    pub fn duplicate_team(team: impl Into<String>) -> Self {
        Self::DuplicateTeam { team: team.into() }
    }

    pub fn unregistered_team(team: impl Into<String>) -> Self {
        Self::UnregisteredTeam { team: team.into() }
    }

    pub fn insufficient_players(ready: usize, required: usize) -> Self {
        Self::InsufficientPlayers { ready, required }
    }

    /// Stable label used for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateTeam { .. } => "duplicate_team",
            Self::UnregisteredTeam { .. } => "unregistered_team",
            Self::InsufficientPlayers { .. } => "insufficient_players",
        }
    }
}
