//! Draft coordination endpoints

use axum::{extract::State, Json};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, DraftStartedResponse, EnterDraftResponse, MessageResponse, Query,
    RegisteredTeamsResponse, TeamNameParams, TeamStatusResponse,
};

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Draft coordinator is running."))
}

/// GET /register_team?team_name=...
pub async fn register_team(
    State(state): State<AppState>,
    Query(params): Query<TeamNameParams>,
) -> Result<Json<TeamStatusResponse>, ApiError> {
    let team = state.draft_service.register_team(&params.team_name).await?;

    Ok(Json(TeamStatusResponse::registered(&team)))
}

/// GET /enter_draft_mode?team_name=...
pub async fn enter_draft_mode(
    State(state): State<AppState>,
    Query(params): Query<TeamNameParams>,
) -> Result<Json<EnterDraftResponse>, ApiError> {
    let entry = state
        .draft_service
        .enter_draft_mode(&params.team_name)
        .await?;

    Ok(Json(entry.into()))
}

/// GET /get_registered_teams
pub async fn get_registered_teams(State(state): State<AppState>) -> Json<RegisteredTeamsResponse> {
    let teams = state.draft_service.registered_teams().await;
    debug!(count = teams.len(), "Returning registered teams");

    Json(teams.into())
}

/// GET /start_draft
pub async fn start_draft(
    State(state): State<AppState>,
) -> Result<Json<DraftStartedResponse>, ApiError> {
    let order = state.draft_service.start_draft().await?;

    Ok(Json(order.into()))
}

/// POST /reset_teams
pub async fn reset_teams(State(state): State<AppState>) -> Json<MessageResponse> {
    state.draft_service.reset_teams().await;

    Json(MessageResponse::new("All teams reset!"))
}
