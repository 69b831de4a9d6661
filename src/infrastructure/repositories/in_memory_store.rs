use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::player::{NewPlayer, Player};
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::team::{NewTeam, Team};
use crate::domain::{RepositoryError, RepositoryResult};

#[derive(Debug, Default)]
struct Tables {
    teams: BTreeMap<i32, Team>,
    players: BTreeMap<i32, Player>,
    // Highest ids ever issued; deleting the top record never lowers them
    last_team_id: i32,
    last_player_id: i32,
}

impl Tables {
    fn player_key_taken(&self, player: &Player) -> Option<String> {
        self.players.values().filter(|p| p.id != player.id).find_map(|p| {
            if p.team_id != player.team_id {
                None
            } else if p.name == player.name && p.birth_date == player.birth_date {
                Some(format!(
                    "player '{}' born {} already in team {}",
                    player.name, player.birth_date, player.team_id
                ))
            } else if p.number == player.number {
                Some(format!(
                    "number {} already used in team {}",
                    player.number, player.team_id
                ))
            } else {
                None
            }
        })
    }
}

/// Thread-safe in-memory Store for teams and players
///
/// Useful for tests and local development. Data is lost when the process
/// terminates. Enforces the same uniqueness and cascade rules as the
/// PostgreSQL schema.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Team repository backed by this store
    pub fn team_repository(self: &Arc<Self>) -> Arc<InMemoryTeamRepository> {
        Arc::new(InMemoryTeamRepository {
            store: Arc::clone(self),
        })
    }

    /// Player repository backed by this store
    pub fn player_repository(self: &Arc<Self>) -> Arc<InMemoryPlayerRepository> {
        Arc::new(InMemoryPlayerRepository {
            store: Arc::clone(self),
        })
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|e| {
            RepositoryError::Unavailable(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|e| {
            RepositoryError::Unavailable(format!("Failed to acquire write lock: {}", e))
        })
    }
}

/// In-memory implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct InMemoryTeamRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        Ok(self.store.read()?.teams.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Team>> {
        Ok(self.store.read()?.teams.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Team>> {
        Ok(self
            .store
            .read()?
            .teams
            .values()
            .find(|team| team.name == name)
            .cloned())
    }

    async fn insert(&self, team: NewTeam) -> RepositoryResult<Team> {
        let mut tables = self.store.write()?;

        if tables.teams.values().any(|t| t.name == team.name) {
            return Err(RepositoryError::Conflict(format!(
                "team name '{}' already taken",
                team.name
            )));
        }

        tables.last_team_id += 1;
        let team = team.with_id(tables.last_team_id);
        tables.teams.insert(team.id, team.clone());
        Ok(team)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut tables = self.store.write()?;
        if tables.teams.remove(&id).is_some() {
            tables.players.retain(|_, player| player.team_id != id);
        }
        Ok(())
    }
}

/// In-memory implementation of PlayerRepository
#[derive(Debug, Clone)]
pub struct InMemoryPlayerRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        Ok(self.store.read()?.players.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Player>> {
        Ok(self.store.read()?.players.get(&id).cloned())
    }

    async fn find_by_team(&self, team_id: i32) -> RepositoryResult<Vec<Player>> {
        Ok(self
            .store
            .read()?
            .players
            .values()
            .filter(|player| player.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, player: NewPlayer) -> RepositoryResult<Player> {
        let mut tables = self.store.write()?;

        if !tables.teams.contains_key(&player.team_id) {
            return Err(RepositoryError::Conflict(format!(
                "team {} does not exist",
                player.team_id
            )));
        }

        // Checked against a provisional id that cannot collide with a stored one
        let player = player.with_id(tables.last_player_id + 1);
        if let Some(reason) = tables.player_key_taken(&player) {
            return Err(RepositoryError::Conflict(reason));
        }

        tables.last_player_id = player.id;
        tables.players.insert(player.id, player.clone());
        Ok(player)
    }

    async fn update(&self, player: &Player) -> RepositoryResult<()> {
        let mut tables = self.store.write()?;

        if !tables.players.contains_key(&player.id) {
            return Err(RepositoryError::Conflict(format!(
                "player {} no longer exists",
                player.id
            )));
        }
        if !tables.teams.contains_key(&player.team_id) {
            return Err(RepositoryError::Conflict(format!(
                "team {} does not exist",
                player.team_id
            )));
        }
        if let Some(reason) = tables.player_key_taken(player) {
            return Err(RepositoryError::Conflict(reason));
        }

        tables.players.insert(player.id, player.clone());
        Ok(())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        self.store.write()?.players.remove(&id);
        Ok(())
    }

    async fn exists_in_team(
        &self,
        name: &str,
        team_id: i32,
        birth_date: NaiveDate,
    ) -> RepositoryResult<bool> {
        Ok(self.store.read()?.players.values().any(|p| {
            p.name == name && p.team_id == team_id && p.birth_date == birth_date
        }))
    }

    async fn number_exists_in_team(&self, number: i32, team_id: i32) -> RepositoryResult<bool> {
        Ok(self
            .store
            .read()?
            .players
            .values()
            .any(|p| p.number == number && p.team_id == team_id))
    }
}
