//! Integration tests for repository layer
//!
//! The same Store contract is checked against the in-memory adapter and,
//! when `DATABASE_URL` points at a scratch database, against PostgreSQL:
//! id allocation, uniqueness constraints, predicate queries and the
//! team-to-player cascade.
//!
//! Run the PostgreSQL variants with `cargo test -- --ignored`.

use std::sync::Arc;

use beyondsports_api::domain::player::{Foot, NewPlayer, Position};
use beyondsports_api::domain::repositories::{PlayerRepository, TeamRepository};
use beyondsports_api::domain::team::NewTeam;
use beyondsports_api::domain::RepositoryError;
use beyondsports_api::infrastructure::database;
use beyondsports_api::infrastructure::repositories::{
    InMemoryStore, PostgresPlayerRepository, PostgresTeamRepository,
};
use chrono::NaiveDate;

fn in_memory() -> (Arc<dyn TeamRepository>, Arc<dyn PlayerRepository>) {
    let store = Arc::new(InMemoryStore::new());
    (store.team_repository(), store.player_repository())
}

/// Connects to the test database and empties both tables
async fn postgres() -> (Arc<dyn TeamRepository>, Arc<dyn PlayerRepository>) {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = database::connect(&database_url, 2)
        .await
        .expect("Failed to connect to test database");
    sqlx::query("TRUNCATE players, teams RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("Failed to reset test tables");

    (
        Arc::new(PostgresTeamRepository::new(pool.clone())),
        Arc::new(PostgresPlayerRepository::new(pool)),
    )
}

fn team(name: &str) -> NewTeam {
    NewTeam {
        name: name.to_string(),
        country: "The Netherlands".to_string(),
        city: "Amsterdam".to_string(),
        stadium: "Johan Cruyff Arena".to_string(),
    }
}

fn player(name: &str, number: i32, team_id: i32) -> NewPlayer {
    NewPlayer {
        name: name.to_string(),
        number,
        position: Position::Midfielder,
        foot: Foot::Left,
        birth_date: NaiveDate::from_ymd_opt(2002, 5, 16).unwrap(),
        height: 182,
        is_injured: false,
        team_id,
    }
}

async fn crud_and_queries(teams: Arc<dyn TeamRepository>, players: Arc<dyn PlayerRepository>) {
    let ajax = teams.insert(team("Ajax Amsterdam")).await.unwrap();
    assert_eq!(ajax.id, 1);
    assert_eq!(
        teams.find_by_name("Ajax Amsterdam").await.unwrap(),
        Some(ajax.clone())
    );
    assert_eq!(teams.find_by_name("ajax amsterdam").await.unwrap(), None);

    let taylor = players.insert(player("Kenneth Taylor", 8, ajax.id)).await.unwrap();
    assert_eq!(taylor.id, 1);
    assert_eq!(taylor.position, Position::Midfielder);

    assert!(players
        .exists_in_team("Kenneth Taylor", ajax.id, taylor.birth_date)
        .await
        .unwrap());
    assert!(!players
        .exists_in_team(
            "Kenneth Taylor",
            ajax.id,
            NaiveDate::from_ymd_opt(2002, 5, 17).unwrap()
        )
        .await
        .unwrap());
    assert!(players.number_exists_in_team(8, ajax.id).await.unwrap());
    assert!(!players.number_exists_in_team(8, ajax.id + 1).await.unwrap());

    let mut updated = taylor.clone();
    updated.number = 10;
    updated.is_injured = true;
    players.update(&updated).await.unwrap();
    assert_eq!(players.find_by_id(taylor.id).await.unwrap(), Some(updated));

    players.delete(taylor.id).await.unwrap();
    assert_eq!(players.find_by_id(taylor.id).await.unwrap(), None);
    assert!(players.find_all().await.unwrap().is_empty());
}

async fn constraints_and_cascade(
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
) {
    let ajax = teams.insert(team("Ajax Amsterdam")).await.unwrap();
    let twente = teams.insert(team("Twente Enschede FC")).await.unwrap();

    let err = teams.insert(team("Ajax Amsterdam")).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));

    players.insert(player("Brian Brobbey", 9, ajax.id)).await.unwrap();
    let err = players.insert(player("Jorrel Hato", 9, ajax.id)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));
    let err = players.insert(player("Brian Brobbey", 11, ajax.id)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));

    // Same number and name are fine on another team
    let kept = players.insert(player("Brian Brobbey", 9, twente.id)).await.unwrap();

    teams.delete(ajax.id).await.unwrap();
    assert_eq!(teams.find_by_id(ajax.id).await.unwrap(), None);
    assert_eq!(players.find_all().await.unwrap(), vec![kept]);
    assert!(players.find_by_team(ajax.id).await.unwrap().is_empty());

    // Deleted ids are not handed out again
    let psv = teams.insert(team("PSV")).await.unwrap();
    assert!(psv.id > twente.id);
}

#[tokio::test]
async fn in_memory_crud_and_queries() {
    let (teams, players) = in_memory();
    crud_and_queries(teams, players).await;
}

#[tokio::test]
async fn in_memory_constraints_and_cascade() {
    let (teams, players) = in_memory();
    constraints_and_cascade(teams, players).await;
}

#[tokio::test]
async fn in_memory_deleting_missing_rows_is_a_no_op() {
    let (teams, players) = in_memory();

    teams.delete(99).await.unwrap();
    players.delete(99).await.unwrap();
}

// Both scenarios share one database, so they run in sequence
#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn postgres_store_contract() {
    let (teams, players) = postgres().await;
    crud_and_queries(teams, players).await;

    let (teams, players) = postgres().await;
    constraints_and_cascade(teams, players).await;
}
