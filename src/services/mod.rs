// Application services
// Apply the relational rules (existence, uniqueness) around Store reads/writes

pub mod player_service;
pub mod team_service;

pub use player_service::{CreatePlayerRequest, PlayerDetails, PlayerService, UpdatePlayerRequest};
pub use team_service::{CreateTeamRequest, TeamDetails, TeamService};

use tracing::{error, warn};

use crate::domain::{DomainError, RepositoryError};

/// Logs a Store failure and converts it into the service error
///
/// Store-level conflicts are expected outcomes; everything else is a fault.
fn store_error(context: &'static str) -> impl FnOnce(RepositoryError) -> DomainError {
    move |err| {
        match &err {
            RepositoryError::Conflict(message) => warn!(%message, "{}", context),
            RepositoryError::Unavailable(message) => error!(error = %message, "{}", context),
        }
        err.into()
    }
}
