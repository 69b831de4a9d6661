use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::player::{Foot, Player, Position};
use crate::services::{CreatePlayerRequest, PlayerDetails, UpdatePlayerRequest};

/// Player as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i32,
    pub name: String,
    pub number: i32,
    pub position: Position,
    pub foot: Foot,
    pub birth_date: NaiveDate,
    pub height: i32,
    pub is_injured: bool,
    pub team_id: i32,
    pub team_name: Option<String>,
}

impl PlayerResponse {
    pub fn new(player: Player, team_name: Option<String>) -> Self {
        Self {
            id: player.id,
            name: player.name,
            number: player.number,
            position: player.position,
            foot: player.foot,
            birth_date: player.birth_date,
            height: player.height,
            is_injured: player.is_injured,
            team_id: player.team_id,
            team_name,
        }
    }
}

impl From<PlayerDetails> for PlayerResponse {
    fn from(details: PlayerDetails) -> Self {
        Self::new(details.player, details.team_name)
    }
}

/// List every player with its team's name
///
/// GET /api/players
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let players = state.players.get_all().await?;
    Ok(Json(players.into_iter().map(PlayerResponse::from).collect()))
}

/// Get a player by ID
///
/// GET /api/players/:id
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = state.players.get_by_id(id).await?;
    Ok(Json(PlayerResponse::from(player)))
}

/// Add a player to an existing team
///
/// POST /api/players
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let Json(req) = payload?;
    let player = state.players.create(req).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(player))))
}

/// Sparse update; `teamName` moves the player to another team
///
/// PUT /api/players/:id
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdatePlayerRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = payload?;
    state.players.update(id, req).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a player
///
/// DELETE /api/players/:id
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.players.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
