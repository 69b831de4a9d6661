// Player domain module
// Contains the player record, its sparse change set, and enumerated fields

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::{NewPlayer, Player, PlayerChanges};
pub use value_objects::{Foot, Position};
