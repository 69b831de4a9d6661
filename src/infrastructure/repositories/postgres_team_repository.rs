use async_trait::async_trait;
use sqlx::PgPool;

use super::map_db_error;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{NewTeam, Team};
use crate::domain::RepositoryResult;

/// PostgreSQL implementation of TeamRepository
///
/// Team ids come from an identity column, so a deleted id is never handed
/// out again. Deleting a team cascades to its players through the
/// `players.team_id` foreign key.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, country, city, stadium
            FROM teams
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error("Failed to list teams"))
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Team>> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, country, city, stadium
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error("Failed to find team by id"))
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Team>> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, country, city, stadium
            FROM teams
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error("Failed to find team by name"))
    }

    async fn insert(&self, team: NewTeam) -> RepositoryResult<Team> {
        sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, country, city, stadium)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, country, city, stadium
            "#,
        )
        .bind(&team.name)
        .bind(&team.country)
        .bind(&team.city)
        .bind(&team.stadium)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error("Failed to insert team"))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            DELETE FROM teams WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error("Failed to delete team"))?;

        Ok(())
    }
}
