//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, DraftEntry, DraftOrder, Team};
use crate::infrastructure::draft::DraftService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub draft_service: Arc<dyn DraftServiceTrait>,
}

impl AppState {
    pub fn new(draft_service: Arc<dyn DraftServiceTrait>) -> Self {
        Self { draft_service }
    }
}

/// Trait for draft coordination operations
#[async_trait::async_trait]
pub trait DraftServiceTrait: Send + Sync {
    async fn register_team(&self, team_name: &str) -> Result<Team, DomainError>;
    async fn enter_draft_mode(&self, team_name: &str) -> Result<DraftEntry, DomainError>;
    async fn start_draft(&self) -> Result<DraftOrder, DomainError>;
    async fn registered_teams(&self) -> Vec<Team>;
    async fn ready_count(&self) -> usize;
    async fn reset_teams(&self) -> usize;
}

#[async_trait::async_trait]
impl DraftServiceTrait for DraftService {
    async fn register_team(&self, team_name: &str) -> Result<Team, DomainError> {
        DraftService::register_team(self, team_name).await
    }

    async fn enter_draft_mode(&self, team_name: &str) -> Result<DraftEntry, DomainError> {
        DraftService::enter_draft_mode(self, team_name).await
    }

    async fn start_draft(&self) -> Result<DraftOrder, DomainError> {
        DraftService::start_draft(self).await
    }

    async fn registered_teams(&self) -> Vec<Team> {
        DraftService::registered_teams(self).await
    }

    async fn ready_count(&self) -> usize {
        DraftService::ready_count(self).await
    }

    async fn reset_teams(&self) -> usize {
        DraftService::reset_teams(self).await
    }
}
