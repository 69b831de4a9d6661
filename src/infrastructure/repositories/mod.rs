// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_store;
pub mod postgres_player_repository;
pub mod postgres_team_repository;

pub use in_memory_store::{InMemoryPlayerRepository, InMemoryStore, InMemoryTeamRepository};
pub use postgres_player_repository::PostgresPlayerRepository;
pub use postgres_team_repository::PostgresTeamRepository;

use crate::domain::RepositoryError;

/// Translates a SQLx failure into a Store error
///
/// Unique and foreign-key violations are the schema backing up the
/// service-level checks; everything else is a fault.
fn map_db_error(context: &'static str) -> impl Fn(sqlx::Error) -> RepositoryError {
    move |e| match &e {
        sqlx::Error::Database(db)
            if db.is_unique_violation() || db.is_foreign_key_violation() =>
        {
            RepositoryError::Conflict(format!("{}: {}", context, db.message()))
        }
        _ => RepositoryError::Unavailable(format!("{}: {}", context, e)),
    }
}
