//! Team entity and related types

use serde::{Deserialize, Serialize};

/// Team name - the unique key of a registered team.
///
/// Names are kept verbatim; empty and whitespace-only names are valid keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TeamName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a registered team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TeamStatus {
    /// Registered, not yet signalled readiness
    #[default]
    #[serde(rename = "Waiting to enter draft mode...")]
    WaitingToEnterDraft,
    /// In draft mode, waiting for enough teams to join
    #[serde(rename = "Waiting for draft to start...")]
    WaitingForDraft,
}

impl TeamStatus {
    /// The phrase shown to clients
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WaitingToEnterDraft => "Waiting to enter draft mode...",
            Self::WaitingForDraft => "Waiting for draft to start...",
        }
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: TeamName,
    status: TeamStatus,
}

impl Team {
    /// Create a freshly registered team
    pub fn new(name: TeamName) -> Self {
        Self {
            name,
            status: TeamStatus::WaitingToEnterDraft,
        }
    }

    pub fn name(&self) -> &TeamName {
        &self.name
    }

    pub fn status(&self) -> TeamStatus {
        self.status
    }

    /// Move the team into draft mode
    pub fn enter_draft_mode(&mut self) {
        self.status = TeamStatus::WaitingForDraft;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name() {
        let name = TeamName::new("Scuderia");
        assert_eq!(name.as_str(), "Scuderia");
        assert_eq!(name.to_string(), "Scuderia");
    }

    #[test]
    fn test_team_name_keeps_whitespace() {
        assert_eq!(TeamName::new(" McLaren ").as_str(), " McLaren ");
        assert_eq!(TeamName::new("   ").as_str(), "   ");
        assert_eq!(TeamName::new("").as_str(), "");
        assert_ne!(TeamName::new(""), TeamName::new(" "));
    }

    #[test]
    fn test_team_name_deserialize_accepts_blank() {
        let name: TeamName = serde_json::from_str("\"\"").unwrap();
        assert_eq!(name.as_str(), "");

        let name: TeamName = serde_json::from_str("\"Williams\"").unwrap();
        assert_eq!(name.as_str(), "Williams");
    }

    #[test]
    fn test_team_status_phrases() {
        assert_eq!(
            TeamStatus::WaitingToEnterDraft.to_string(),
            "Waiting to enter draft mode..."
        );
        assert_eq!(
            TeamStatus::WaitingForDraft.to_string(),
            "Waiting for draft to start..."
        );
    }

    #[test]
    fn test_team_status_serialization() {
        assert_eq!(
            serde_json::to_string(&TeamStatus::WaitingToEnterDraft).unwrap(),
            "\"Waiting to enter draft mode...\""
        );
        assert_eq!(
            serde_json::to_string(&TeamStatus::WaitingForDraft).unwrap(),
            "\"Waiting for draft to start...\""
        );
    }

    #[test]
    fn test_team_creation() {
        let team = Team::new(TeamName::new("Alpine"));

        assert_eq!(team.name().as_str(), "Alpine");
        assert_eq!(team.status(), TeamStatus::WaitingToEnterDraft);
    }

    #[test]
    fn test_team_enter_draft_mode() {
        let mut team = Team::new(TeamName::new("Alpine"));

        team.enter_draft_mode();
        assert_eq!(team.status(), TeamStatus::WaitingForDraft);

        team.enter_draft_mode();
        assert_eq!(team.status(), TeamStatus::WaitingForDraft);
    }
}
