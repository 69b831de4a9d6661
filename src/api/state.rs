use std::sync::Arc;

use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::services::{PlayerService, TeamService};

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<TeamService>,
    pub players: Arc<PlayerService>,
}

impl AppState {
    /// Wires both services to the same pair of repositories
    pub fn new(teams: Arc<dyn TeamRepository>, players: Arc<dyn PlayerRepository>) -> Self {
        Self {
            teams: Arc::new(TeamService::new(Arc::clone(&teams), Arc::clone(&players))),
            players: Arc::new(PlayerService::new(teams, players)),
        }
    }
}
