use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::players::PlayerResponse;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::Team;
use crate::services::{CreateTeamRequest, TeamDetails};

/// Team as returned to clients, with its roster
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub stadium: String,
    pub players: Vec<PlayerResponse>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            country: team.country,
            city: team.city,
            stadium: team.stadium,
            players: Vec::new(),
        }
    }
}

impl From<TeamDetails> for TeamResponse {
    fn from(details: TeamDetails) -> Self {
        let players = details
            .players
            .into_iter()
            .map(|player| PlayerResponse::new(player, Some(details.team.name.clone())))
            .collect();

        Self {
            players,
            ..Self::from(details.team)
        }
    }
}

/// List every team with its players
///
/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.get_all().await?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.get_by_id(id).await?;
    Ok(Json(TeamResponse::from(team)))
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let Json(req) = payload?;
    let team = state.teams.create(req).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))))
}

/// Delete a team and its players
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.teams.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
