// Team domain module
// Contains the team record and the allow-lists for its properties

#![allow(clippy::module_inception)]

pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use team::{NewTeam, Team};
pub use value_objects::validate_team_properties;
