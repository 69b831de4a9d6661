//! Player consistency service

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::store_error;
use super::team_service::team_missing;
use crate::domain::player::{Foot, NewPlayer, Player, PlayerChanges, Position};
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::validation::{validate_age, validate_length, validate_range, ValidationErrors};
use crate::domain::{DomainError, DomainResult};

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 50;

/// Request for adding a player to an existing team
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub number: i32,
    pub position: String,
    pub foot: String,
    pub birth_date: Option<NaiveDate>,
    pub height: i32,
    #[serde(default)]
    pub is_injured: bool,
    pub team_id: i32,
}

impl CreatePlayerRequest {
    /// Runs every structural rule as of `today` and reports all violations together
    pub fn validate(self, today: NaiveDate) -> Result<NewPlayer, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(validate_length("Name", &self.name, 2, 50));
        errors.check(validate_range("Number", self.number, 1, 99));
        let position = self
            .position
            .parse::<Position>()
            .map_err(|e| errors.push(e))
            .ok();
        let foot = self.foot.parse::<Foot>().map_err(|e| errors.push(e)).ok();
        errors.check(validate_age("BirthDate", self.birth_date, MIN_AGE, MAX_AGE, today));
        errors.check(validate_range("Height", self.height, 120, 240));

        match (position, foot, self.birth_date) {
            (Some(position), Some(foot), Some(birth_date)) if errors.is_empty() => Ok(NewPlayer {
                name: self.name,
                number: self.number,
                position,
                foot,
                birth_date,
                height: self.height,
                is_injured: self.is_injured,
                team_id: self.team_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Sparse update for an existing player
///
/// Absent fields keep their stored value. `team_name` moves the player to
/// the team with that exact name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePlayerRequest {
    pub number: Option<i32>,
    pub position: Option<String>,
    pub foot: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub height: Option<i32>,
    pub is_injured: Option<bool>,
    pub team_name: Option<String>,
}

/// A structurally valid update: typed changes plus an optional team move
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub changes: PlayerChanges,
    pub team_name: Option<String>,
}

impl UpdatePlayerRequest {
    /// Validates only the fields that are present
    pub fn validate(self, today: NaiveDate) -> Result<PlayerUpdate, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(number) = self.number {
            errors.check(validate_range("Number", number, 1, 99));
        }
        let position = match self.position {
            Some(position) => position.parse::<Position>().map_err(|e| errors.push(e)).ok(),
            None => None,
        };
        let foot = match self.foot {
            Some(foot) => foot.parse::<Foot>().map_err(|e| errors.push(e)).ok(),
            None => None,
        };
        if self.birth_date.is_some() {
            errors.check(validate_age("BirthDate", self.birth_date, MIN_AGE, MAX_AGE, today));
        }
        if let Some(height) = self.height {
            errors.check(validate_range("Height", height, 120, 240));
        }

        errors.finish(PlayerUpdate {
            changes: PlayerChanges {
                number: self.number,
                position,
                foot,
                birth_date: self.birth_date,
                height: self.height,
                is_injured: self.is_injured,
            },
            team_name: self.team_name.filter(|name| !name.is_empty()),
        })
    }
}

/// A player together with the name of the team it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDetails {
    pub player: Player,
    pub team_name: Option<String>,
}

/// Orchestrates player creation, update and removal
pub struct PlayerService {
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
}

impl PlayerService {
    pub fn new(teams: Arc<dyn TeamRepository>, players: Arc<dyn PlayerRepository>) -> Self {
        Self { teams, players }
    }

    /// All players, each with its team's name
    pub async fn get_all(&self) -> DomainResult<Vec<PlayerDetails>> {
        info!("Fetching all players");

        let players = self
            .players
            .find_all()
            .await
            .map_err(store_error("Failed to fetch players"))?;
        let team_names: HashMap<i32, String> = self
            .teams
            .find_all()
            .await
            .map_err(store_error("Failed to fetch teams"))?
            .into_iter()
            .map(|team| (team.id, team.name))
            .collect();

        let details: Vec<PlayerDetails> = players
            .into_iter()
            .map(|player| {
                let team_name = team_names.get(&player.team_id).cloned();
                PlayerDetails { player, team_name }
            })
            .collect();

        info!(count = details.len(), "Fetched players");
        Ok(details)
    }

    /// One player with its team's name
    pub async fn get_by_id(&self, id: i32) -> DomainResult<PlayerDetails> {
        info!(player_id = id, "Fetching player");

        let player = self.find_existing(id).await?;
        let team_name = self
            .teams
            .find_by_id(player.team_id)
            .await
            .map_err(store_error("Failed to fetch player team"))?
            .map(|team| team.name);

        Ok(PlayerDetails { player, team_name })
    }

    /// Adds a player to an existing team
    ///
    /// Checks run in a fixed order and the first failure wins: the team
    /// must exist, the player must not already be on it, and the shirt
    /// number must be free within it.
    pub async fn create(&self, request: CreatePlayerRequest) -> DomainResult<PlayerDetails> {
        let new_player = request.validate(today()).map_err(|errors| {
            warn!(%errors, "Rejected invalid player");
            DomainError::from(errors)
        })?;

        info!(name = %new_player.name, team_id = new_player.team_id, "Adding player");

        let team = self
            .teams
            .find_by_id(new_player.team_id)
            .await
            .map_err(store_error("Failed to fetch team"))?
            .ok_or_else(|| {
                warn!(team_id = new_player.team_id, "Team not found");
                DomainError::not_found(team_missing(new_player.team_id))
            })?;

        self.ensure_not_on_team(&new_player.name, new_player.team_id, new_player.birth_date)
            .await?;
        self.ensure_number_free(new_player.number, new_player.team_id)
            .await?;

        let player = self
            .players
            .insert(new_player)
            .await
            .map_err(store_error("Failed to insert player"))?;

        info!(player_id = player.id, "Added player");
        Ok(PlayerDetails {
            player,
            team_name: Some(team.name),
        })
    }

    /// Applies a sparse update, optionally moving the player to another team by name
    pub async fn update(&self, id: i32, request: UpdatePlayerRequest) -> DomainResult<()> {
        let update = request.validate(today()).map_err(|errors| {
            warn!(player_id = id, %errors, "Rejected invalid player update");
            DomainError::from(errors)
        })?;

        info!(player_id = id, "Updating player");

        let current = self
            .players
            .find_by_id(id)
            .await
            .map_err(store_error("Failed to fetch player"))?;
        let Some(current) = current else {
            warn!(player_id = id, "Player not found");
            return Err(DomainError::not_found(format!("Player with ID {} not found.", id)));
        };

        let mut player = current.clone();
        if let Some(team_name) = update.team_name {
            let team = self
                .teams
                .find_by_name(&team_name)
                .await
                .map_err(store_error("Failed to look up team by name"))?
                .ok_or_else(|| {
                    warn!(team_name = %team_name, "Team not found");
                    DomainError::not_found(format!("Team '{}' not found.", team_name))
                })?;
            player.team_id = team.id;
        }
        player.apply(update.changes);

        let team_changed = player.team_id != current.team_id;
        if team_changed || player.birth_date != current.birth_date {
            self.ensure_not_on_team(&player.name, player.team_id, player.birth_date)
                .await?;
        }
        if team_changed || player.number != current.number {
            self.ensure_number_free(player.number, player.team_id).await?;
        }

        self.players
            .update(&player)
            .await
            .map_err(store_error("Failed to update player"))?;

        info!(player_id = id, team_id = player.team_id, "Updated player");
        Ok(())
    }

    /// Removes a player by id
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        info!(player_id = id, "Deleting player");

        self.find_existing(id).await?;
        self.players
            .delete(id)
            .await
            .map_err(store_error("Failed to delete player"))?;

        info!(player_id = id, "Deleted player");
        Ok(())
    }

    async fn find_existing(&self, id: i32) -> DomainResult<Player> {
        self.players
            .find_by_id(id)
            .await
            .map_err(store_error("Failed to fetch player"))?
            .ok_or_else(|| {
                warn!(player_id = id, "Player not found");
                DomainError::not_found(format!("Player with Id {} doesn't exist", id))
            })
    }

    async fn ensure_not_on_team(
        &self,
        name: &str,
        team_id: i32,
        birth_date: NaiveDate,
    ) -> DomainResult<()> {
        let exists = self
            .players
            .exists_in_team(name, team_id, birth_date)
            .await
            .map_err(store_error("Failed to check for duplicate player"))?;
        if exists {
            warn!(name = %name, team_id, %birth_date, "Duplicate player");
            return Err(DomainError::conflict(format!(
                "A player named '{}' born on {} already exists in team {}.",
                name, birth_date, team_id
            )));
        }
        Ok(())
    }

    async fn ensure_number_free(&self, number: i32, team_id: i32) -> DomainResult<()> {
        let taken = self
            .players
            .number_exists_in_team(number, team_id)
            .await
            .map_err(store_error("Failed to check shirt number"))?;
        if taken {
            warn!(number, team_id, "Shirt number already taken");
            return Err(DomainError::conflict(format!(
                "The number {} is already assigned to another player in this team.",
                number
            )));
        }
        Ok(())
    }
}

/// Age rules are evaluated against the local calendar date at call time
fn today() -> NaiveDate {
    Local::now().date_naive()
}
