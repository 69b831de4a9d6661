use chrono::NaiveDate;
use serde::Serialize;

use super::value_objects::{Foot, Position};

/// Stored player record
///
/// # Invariants
/// - `(name, team_id, birth_date)` is unique; it is the de-duplication key
/// - `(number, team_id)` is unique; the same number may appear in other teams
/// - `team_id` references an existing team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub number: i32,
    pub position: Position,
    pub foot: Foot,
    pub birth_date: NaiveDate,
    pub height: i32,
    pub is_injured: bool,
    pub team_id: i32,
}

/// A validated player that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub number: i32,
    pub position: Position,
    pub foot: Foot,
    pub birth_date: NaiveDate,
    pub height: i32,
    pub is_injured: bool,
    pub team_id: i32,
}

impl NewPlayer {
    /// Attaches a Store-assigned id
    pub fn with_id(self, id: i32) -> Player {
        Player {
            id,
            name: self.name,
            number: self.number,
            position: self.position,
            foot: self.foot,
            birth_date: self.birth_date,
            height: self.height,
            is_injured: self.is_injured,
            team_id: self.team_id,
        }
    }
}

/// Field-by-field changes for an existing player
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerChanges {
    pub number: Option<i32>,
    pub position: Option<Position>,
    pub foot: Option<Foot>,
    pub birth_date: Option<NaiveDate>,
    pub height: Option<i32>,
    pub is_injured: Option<bool>,
}

impl Player {
    /// Overwrites only the fields present in `changes`
    pub fn apply(&mut self, changes: PlayerChanges) {
        if let Some(number) = changes.number {
            self.number = number;
        }
        if let Some(position) = changes.position {
            self.position = position;
        }
        if let Some(foot) = changes.foot {
            self.foot = foot;
        }
        if let Some(birth_date) = changes.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(height) = changes.height {
            self.height = height;
        }
        if let Some(is_injured) = changes.is_injured {
            self.is_injured = is_injured;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Player {
        Player {
            id: 3,
            name: "Lars Unnerstall".to_string(),
            number: 1,
            position: Position::Goalkeeper,
            foot: Foot::Right,
            birth_date: NaiveDate::from_ymd_opt(1990, 7, 20).unwrap(),
            height: 198,
            is_injured: false,
            team_id: 1,
        }
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut player = sample();
        player.apply(PlayerChanges {
            number: Some(16),
            is_injured: Some(true),
            ..Default::default()
        });

        assert_eq!(player.number, 16);
        assert!(player.is_injured);
        assert_eq!(player.position, Position::Goalkeeper);
        assert_eq!(player.foot, Foot::Right);
        assert_eq!(player.birth_date, NaiveDate::from_ymd_opt(1990, 7, 20).unwrap());
        assert_eq!(player.height, 198);
        assert_eq!(player.team_id, 1);
    }

    #[test]
    fn empty_changes_leave_player_untouched() {
        let mut player = sample();
        player.apply(PlayerChanges::default());
        assert_eq!(player, sample());
    }
}
