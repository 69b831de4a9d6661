use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::validation::{invalid_choice, FieldError};

/// Where a player lines up on the pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "player_position")]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Position {
    /// Accepted tokens, in declaration order
    pub const ALLOWED: &'static [&'static str] =
        &["Forward", "Midfielder", "Defender", "Goalkeeper"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Forward => "Forward",
            Position::Midfielder => "Midfielder",
            Position::Defender => "Defender",
            Position::Goalkeeper => "Goalkeeper",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Forward" => Ok(Position::Forward),
            "Midfielder" => Ok(Position::Midfielder),
            "Defender" => Ok(Position::Defender),
            "Goalkeeper" => Ok(Position::Goalkeeper),
            _ => Err(invalid_choice("Position", Self::ALLOWED)),
        }
    }
}

/// A player's preferred kicking foot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "preferred_foot")]
pub enum Foot {
    Left,
    Right,
    Both,
}

impl Foot {
    /// Accepted tokens, in declaration order
    pub const ALLOWED: &'static [&'static str] = &["Left", "Right", "Both"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Foot::Left => "Left",
            Foot::Right => "Right",
            Foot::Both => "Both",
        }
    }
}

impl fmt::Display for Foot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Foot {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" => Ok(Foot::Left),
            "Right" => Ok(Foot::Right),
            "Both" => Ok(Foot::Both),
            _ => Err(invalid_choice("Foot", Self::ALLOWED)),
        }
    }
}
