use serde::Serialize;

/// Stored team record
///
/// # Invariants
/// - `name` is unique across all teams and 2-50 characters long
/// - `country`, `city` and `stadium` come from their allow-lists
///
/// Players are not owned by the team; they point at it through their
/// `team_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub stadium: String,
}

/// A validated team that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub country: String,
    pub city: String,
    pub stadium: String,
}

impl NewTeam {
    /// Attaches a Store-assigned id
    pub fn with_id(self, id: i32) -> Team {
        Team {
            id,
            name: self.name,
            country: self.country,
            city: self.city,
            stadium: self.stadium,
        }
    }
}
