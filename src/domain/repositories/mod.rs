// Store contracts consumed by the services
// Adapters live in crate::infrastructure::repositories

pub mod player_repository;
pub mod team_repository;

pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;

#[cfg(test)]
pub use player_repository::MockPlayerRepository;
#[cfg(test)]
pub use team_repository::MockTeamRepository;
