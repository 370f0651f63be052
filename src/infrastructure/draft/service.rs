//! Draft service - the single synchronization boundary around the draft board

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::draft::{DraftBoard, DraftEntry, DraftOrder};
use crate::domain::team::{Team, TeamName};
use crate::domain::DomainError;
use crate::infrastructure::observability::{
    record_domain_error, record_draft_entry, record_draft_started, record_team_registered,
    record_teams_reset, set_ready_teams,
};

/// Draft service for registering teams and starting drafts.
///
/// Every operation holds the board lock for its whole duration, so the
/// entry, auto-start check and ready-set clear happen as one step.
#[derive(Debug, Default)]
pub struct DraftService {
    board: Mutex<DraftBoard>,
}

impl DraftService {
    /// Create a service over an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new team
    pub async fn register_team(&self, team_name: &str) -> Result<Team, DomainError> {
        info!(team = %team_name, "Registering team");

        let result = {
            let mut board = self.board.lock().await;
            board.register(TeamName::new(team_name)).cloned()
        };

        match &result {
            Ok(_) => record_team_registered(),
            Err(e) => report_error("register_team", team_name, e),
        }

        result
    }

    /// Put a registered team into draft mode, starting the draft when the
    /// field is complete
    pub async fn enter_draft_mode(&self, team_name: &str) -> Result<DraftEntry, DomainError> {
        info!(team = %team_name, "Team entering draft mode");

        let result = {
            let mut board = self.board.lock().await;
            let result = board.enter_draft_mode(&TeamName::new(team_name));
            set_ready_teams(board.ready_teams().len());
            result
        };

        match &result {
            Ok(DraftEntry::Waiting(_)) => record_draft_entry(),
            Ok(DraftEntry::Started(order)) => {
                record_draft_entry();
                info!(team = %team_name, "Draft field complete");
                draft_started(order);
            }
            Err(e) => report_error("enter_draft_mode", team_name, e),
        }

        result
    }

    /// Start a draft with the teams currently in draft mode
    pub async fn start_draft(&self) -> Result<DraftOrder, DomainError> {
        let result = {
            let mut board = self.board.lock().await;
            let result = board.start_draft();
            set_ready_teams(board.ready_teams().len());
            result
        };

        match &result {
            Ok(order) => draft_started(order),
            Err(e) => report_error("start_draft", "", e),
        }

        result
    }

    /// Snapshot of every registered team in registration order
    pub async fn registered_teams(&self) -> Vec<Team> {
        let board = self.board.lock().await;
        debug!(count = board.teams().len(), "Listing registered teams");
        board.teams().to_vec()
    }

    /// Number of teams currently in draft mode
    pub async fn ready_count(&self) -> usize {
        self.board.lock().await.ready_teams().len()
    }

    /// Drop every team and pending readiness signal
    pub async fn reset_teams(&self) -> usize {
        let cleared = {
            let mut board = self.board.lock().await;
            board.reset()
        };

        info!(cleared, "Reset all teams");
        record_teams_reset(cleared);
        set_ready_teams(0);

        cleared
    }
}

fn draft_started(order: &DraftOrder) {
    info!(
        teams = ?order.teams().iter().map(TeamName::as_str).collect::<Vec<_>>(),
        "Draft started"
    );
    record_draft_started(order.teams().len());
}

fn report_error(operation: &'static str, team_name: &str, error: &DomainError) {
    warn!(operation, team = %team_name, error = %error, "Draft request rejected");
    record_domain_error(operation, error.kind());
}
