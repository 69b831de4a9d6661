use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::map_db_error;
use crate::domain::player::{NewPlayer, Player};
use crate::domain::repositories::PlayerRepository;
use crate::domain::RepositoryResult;

const PLAYER_COLUMNS: &str =
    "id, name, number, position, foot, birth_date, height, is_injured, team_id";

/// PostgreSQL implementation of PlayerRepository
///
/// The schema carries unique constraints on `(team_id, number)` and
/// `(team_id, name, birth_date)`; violations surface as store conflicts.
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    /// Creates a new PostgresPlayerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        sqlx::query_as::<_, Player>(&format!(
            "SELECT {} FROM players ORDER BY id",
            PLAYER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error("Failed to list players"))
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Player>> {
        sqlx::query_as::<_, Player>(&format!(
            "SELECT {} FROM players WHERE id = $1",
            PLAYER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error("Failed to find player by id"))
    }

    async fn find_by_team(&self, team_id: i32) -> RepositoryResult<Vec<Player>> {
        sqlx::query_as::<_, Player>(&format!(
            "SELECT {} FROM players WHERE team_id = $1 ORDER BY id",
            PLAYER_COLUMNS
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error("Failed to find players by team"))
    }

    async fn insert(&self, player: NewPlayer) -> RepositoryResult<Player> {
        sqlx::query_as::<_, Player>(&format!(
            r#"
            INSERT INTO players (
                name, number, position, foot, birth_date, height, is_injured, team_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            PLAYER_COLUMNS
        ))
        .bind(&player.name)
        .bind(player.number)
        .bind(player.position)
        .bind(player.foot)
        .bind(player.birth_date)
        .bind(player.height)
        .bind(player.is_injured)
        .bind(player.team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error("Failed to insert player"))
    }

    async fn update(&self, player: &Player) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            UPDATE players SET
                name = $2,
                number = $3,
                position = $4,
                foot = $5,
                birth_date = $6,
                height = $7,
                is_injured = $8,
                team_id = $9
            WHERE id = $1
            "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(player.number)
        .bind(player.position)
        .bind(player.foot)
        .bind(player.birth_date)
        .bind(player.height)
        .bind(player.is_injured)
        .bind(player.team_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error("Failed to update player"))?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error("Failed to delete player"))?;

        Ok(())
    }

    async fn exists_in_team(
        &self,
        name: &str,
        team_id: i32,
        birth_date: NaiveDate,
    ) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM players
                WHERE name = $1 AND team_id = $2 AND birth_date = $3
            )
            "#,
        )
        .bind(name)
        .bind(team_id)
        .bind(birth_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error("Failed to check player in team"))
    }

    async fn number_exists_in_team(&self, number: i32, team_id: i32) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM players WHERE number = $1 AND team_id = $2
            )
            "#,
        )
        .bind(number)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error("Failed to check player number in team"))
    }
}
