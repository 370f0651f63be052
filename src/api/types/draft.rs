//! Request and response bodies for the draft endpoints

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::domain::{DraftEntry, DraftOrder, Team, TeamStatus};

/// Query parameters naming a team
#[derive(Debug, Clone, Deserialize)]
pub struct TeamNameParams {
    pub team_name: String,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Confirmation carrying a team's new status
#[derive(Debug, Clone, Serialize)]
pub struct TeamStatusResponse {
    pub message: String,
    pub status: TeamStatus,
}

impl TeamStatusResponse {
    pub fn registered(team: &Team) -> Self {
        Self {
            message: format!("{} registered successfully!", team.name()),
            status: team.status(),
        }
    }

    pub fn entered_draft(team: &Team) -> Self {
        Self {
            message: format!("{} has entered draft mode.", team.name()),
            status: team.status(),
        }
    }
}

/// Payload returned when a draft starts
#[derive(Debug, Clone, Serialize)]
pub struct DraftStartedResponse {
    pub message: String,
    pub draft_order: DraftOrder,
}

impl From<DraftOrder> for DraftStartedResponse {
    fn from(draft_order: DraftOrder) -> Self {
        Self {
            message: "Draft started!".to_string(),
            draft_order,
        }
    }
}

/// Either an entry confirmation or, when the entry completed the field, the
/// draft-start payload
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EnterDraftResponse {
    Waiting(TeamStatusResponse),
    Started(DraftStartedResponse),
}

impl From<DraftEntry> for EnterDraftResponse {
    fn from(entry: DraftEntry) -> Self {
        match entry {
            DraftEntry::Waiting(team) => Self::Waiting(TeamStatusResponse::entered_draft(&team)),
            DraftEntry::Started(order) => Self::Started(order.into()),
        }
    }
}

/// Registered teams: `{"teams": {"<name>": "<status>", ...}}`
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredTeamsResponse {
    pub teams: TeamStatusMap,
}

/// Team name to status map, serialized in registration order
#[derive(Debug, Clone)]
pub struct TeamStatusMap(Vec<Team>);

impl Serialize for TeamStatusMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for team in &self.0 {
            map.serialize_entry(team.name().as_str(), &team.status())?;
        }
        map.end()
    }
}

impl From<Vec<Team>> for RegisteredTeamsResponse {
    fn from(teams: Vec<Team>) -> Self {
        Self {
            teams: TeamStatusMap(teams),
        }
    }
}
