//! Team consistency service

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::store_error;
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::team::{validate_team_properties, NewTeam, Team};
use crate::domain::validation::{validate_length, ValidationErrors};
use crate::domain::{DomainError, DomainResult};

/// Request for creating a new team
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTeamRequest {
    pub name: String,
    pub country: String,
    pub city: String,
    pub stadium: String,
}

impl CreateTeamRequest {
    /// Runs every structural rule and reports all violations together
    pub fn validate(self) -> Result<NewTeam, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_length("Name", &self.name, 2, 50));
        if let Err(property_errors) =
            validate_team_properties(&self.country, &self.city, &self.stadium)
        {
            for error in property_errors.errors() {
                errors.push(error.clone());
            }
        }

        errors.finish(NewTeam {
            name: self.name,
            country: self.country,
            city: self.city,
            stadium: self.stadium,
        })
    }
}

/// A team together with the players that reference it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDetails {
    pub team: Team,
    pub players: Vec<Player>,
}

/// Orchestrates team creation and removal
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
}

impl TeamService {
    pub fn new(teams: Arc<dyn TeamRepository>, players: Arc<dyn PlayerRepository>) -> Self {
        Self { teams, players }
    }

    /// All teams, each with its players
    pub async fn get_all(&self) -> DomainResult<Vec<TeamDetails>> {
        info!("Fetching all teams");

        let teams = self
            .teams
            .find_all()
            .await
            .map_err(store_error("Failed to fetch teams"))?;
        let players = self
            .players
            .find_all()
            .await
            .map_err(store_error("Failed to fetch players"))?;

        let mut by_team: HashMap<i32, Vec<Player>> = HashMap::new();
        for player in players {
            by_team.entry(player.team_id).or_default().push(player);
        }

        let details: Vec<TeamDetails> = teams
            .into_iter()
            .map(|team| {
                let players = by_team.remove(&team.id).unwrap_or_default();
                TeamDetails { team, players }
            })
            .collect();

        info!(count = details.len(), "Fetched teams");
        Ok(details)
    }

    /// One team with its players
    pub async fn get_by_id(&self, id: i32) -> DomainResult<TeamDetails> {
        info!(team_id = id, "Fetching team");

        let team = self
            .teams
            .find_by_id(id)
            .await
            .map_err(store_error("Failed to fetch team"))?
            .ok_or_else(|| {
                warn!(team_id = id, "Team not found");
                DomainError::not_found(team_missing(id))
            })?;

        let players = self
            .players
            .find_by_team(id)
            .await
            .map_err(store_error("Failed to fetch team players"))?;

        Ok(TeamDetails { team, players })
    }

    /// Creates a team after checking that its name is not taken
    pub async fn create(&self, request: CreateTeamRequest) -> DomainResult<Team> {
        let new_team = request.validate().map_err(|errors| {
            warn!(%errors, "Rejected invalid team");
            DomainError::from(errors)
        })?;

        info!(name = %new_team.name, "Creating team");

        let existing = self
            .teams
            .find_by_name(&new_team.name)
            .await
            .map_err(store_error("Failed to look up team by name"))?;
        if existing.is_some() {
            warn!(name = %new_team.name, "Team name already taken");
            return Err(DomainError::conflict("A team with this name already exists."));
        }

        let team = self
            .teams
            .insert(new_team)
            .await
            .map_err(store_error("Failed to insert team"))?;

        info!(team_id = team.id, name = %team.name, "Created team");
        Ok(team)
    }

    /// Deletes a team; its players go with it
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        info!(team_id = id, "Deleting team");

        let team = self
            .teams
            .find_by_id(id)
            .await
            .map_err(store_error("Failed to fetch team"))?;
        if team.is_none() {
            warn!(team_id = id, "Team not found");
            return Err(DomainError::not_found(team_missing(id)));
        }

        self.teams
            .delete(id)
            .await
            .map_err(store_error("Failed to delete team"))?;

        info!(team_id = id, "Deleted team");
        Ok(())
    }
}

pub(crate) fn team_missing(id: i32) -> String {
    format!("Team with Id {} doesn't exist", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{Foot, NewPlayer, Position};
    use crate::domain::repositories::{MockPlayerRepository, MockTeamRepository};
    use crate::domain::RepositoryError;
    use crate::infrastructure::repositories::InMemoryStore;
    use chrono::NaiveDate;

    fn request(name: &str) -> CreateTeamRequest {
        CreateTeamRequest {
            name: name.to_string(),
            country: "The Netherlands".to_string(),
            city: "Amsterdam".to_string(),
            stadium: "Johan Cruyff Arena".to_string(),
        }
    }

    fn service_with_store() -> (TeamService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let service = TeamService::new(store.team_repository(), store.player_repository());
        (service, store)
    }

    #[test]
    fn validate_reports_name_and_property_errors_together() {
        let errors = CreateTeamRequest {
            name: "A".to_string(),
            country: "Belgium".to_string(),
            city: "Amsterdam".to_string(),
            stadium: "Heysel".to_string(),
        }
        .validate()
        .unwrap_err();

        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Name", "Country", "Stadium"]);
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let (service, _) = service_with_store();

        let ajax = service.create(request("Ajax")).await.unwrap();
        let twente = service.create(request("Twente")).await.unwrap();

        assert_eq!(ajax.id, 1);
        assert_eq!(twente.id, 2);
        assert_eq!(ajax.name, "Ajax");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let (service, _) = service_with_store();
        service.create(request("Ajax")).await.unwrap();

        let err = service.create(request("Ajax")).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::Conflict("A team with this name already exists.".to_string())
        );
    }

    #[tokio::test]
    async fn create_rejects_invalid_properties_before_touching_store() {
        let mut teams = MockTeamRepository::new();
        teams.expect_find_by_name().never();
        teams.expect_insert().never();
        let service = TeamService::new(Arc::new(teams), Arc::new(MockPlayerRepository::new()));

        let mut bad = request("Ajax");
        bad.city = "Rotterdam".to_string();
        let err = service.create(bad).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(ref errors) if errors.len() == 1));
    }

    #[tokio::test]
    async fn delete_missing_team_is_not_found_every_time() {
        let (service, _) = service_with_store();

        let first = service.delete(42).await.unwrap_err();
        let second = service.delete(42).await.unwrap_err();

        assert_eq!(first, DomainError::NotFound("Team with Id 42 doesn't exist".to_string()));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (service, _) = service_with_store();
        let team = service.create(request("Ajax")).await.unwrap();

        service.delete(team.id).await.unwrap();

        assert!(matches!(
            service.get_by_id(team.id).await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn get_all_groups_players_under_their_team() {
        let (service, store) = service_with_store();
        let ajax = service.create(request("Ajax")).await.unwrap();
        let twente = service.create(request("Twente")).await.unwrap();

        let players = store.player_repository();
        players
            .insert(NewPlayer {
                name: "Brian Brobbey".to_string(),
                number: 9,
                position: Position::Forward,
                foot: Foot::Right,
                birth_date: NaiveDate::from_ymd_opt(2002, 2, 2).unwrap(),
                height: 182,
                is_injured: false,
                team_id: ajax.id,
            })
            .await
            .unwrap();

        let all = service.get_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].team.id, ajax.id);
        assert_eq!(all[0].players.len(), 1);
        assert_eq!(all[1].team.id, twente.id);
        assert!(all[1].players.is_empty());
    }

    #[tokio::test]
    async fn storage_fault_propagates_as_storage_error() {
        let mut teams = MockTeamRepository::new();
        teams
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::Unavailable("connection refused".to_string())));
        teams.expect_delete().never();
        let service = TeamService::new(Arc::new(teams), Arc::new(MockPlayerRepository::new()));

        let err = service.delete(1).await.unwrap_err();

        assert_eq!(err, DomainError::Storage("connection refused".to_string()));
    }
}
