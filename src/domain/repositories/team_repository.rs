use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::team::{NewTeam, Team};

#[cfg(test)]
use mockall::automock;

/// Repository trait for Team records
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// All teams, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Team>>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Team>>;

    /// Find a team by exact name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Team>>;

    /// Insert a team, assigning the next id
    ///
    /// Ids are never reused, even after the highest one was deleted.
    async fn insert(&self, team: NewTeam) -> RepositoryResult<Team>;

    /// Delete a team by ID, together with the players that reference it
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
}
