use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::errors::RepositoryResult;
use crate::domain::player::{NewPlayer, Player};

#[cfg(test)]
use mockall::automock;

/// Repository trait for Player records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// All players, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Player>>;

    /// Find a player by ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Player>>;

    /// Players whose `team_id` points at the given team, ordered by id
    async fn find_by_team(&self, team_id: i32) -> RepositoryResult<Vec<Player>>;

    /// Insert a player, assigning the next id
    async fn insert(&self, player: NewPlayer) -> RepositoryResult<Player>;

    /// Replace the stored record with the same id
    async fn update(&self, player: &Player) -> RepositoryResult<()>;

    /// Delete a player by ID
    async fn delete(&self, id: i32) -> RepositoryResult<()>;

    /// Whether a player with this name and birth date already plays for the team
    async fn exists_in_team(
        &self,
        name: &str,
        team_id: i32,
        birth_date: NaiveDate,
    ) -> RepositoryResult<bool>;

    /// Whether the shirt number is already taken within the team
    async fn number_exists_in_team(&self, number: i32, team_id: i32) -> RepositoryResult<bool>;
}
