use chrono::NaiveDate;
use tracing::info;

use crate::domain::player::{Foot, NewPlayer, Position};
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::team::NewTeam;
use crate::domain::{RepositoryError, RepositoryResult};

struct DemoPlayer {
    name: &'static str,
    number: i32,
    position: Position,
    foot: Foot,
    born: (i32, u32, u32),
    height: i32,
}

struct DemoTeam {
    name: &'static str,
    country: &'static str,
    city: &'static str,
    stadium: &'static str,
    players: &'static [DemoPlayer],
}

const DEMO_TEAMS: &[DemoTeam] = &[
    DemoTeam {
        name: "Twente Enschede FC",
        country: "The Netherlands",
        city: "Enschede",
        stadium: "De Grolsch Veste",
        players: &[
            DemoPlayer {
                name: "Mees Hilgers",
                number: 2,
                position: Position::Defender,
                foot: Foot::Right,
                born: (2001, 5, 13),
                height: 185,
            },
            DemoPlayer {
                name: "Sem Steijn",
                number: 14,
                position: Position::Midfielder,
                foot: Foot::Right,
                born: (2001, 11, 12),
                height: 173,
            },
            DemoPlayer {
                name: "Lars Unnerstall",
                number: 1,
                position: Position::Goalkeeper,
                foot: Foot::Right,
                born: (1990, 7, 20),
                height: 198,
            },
            DemoPlayer {
                name: "Sam Lammers",
                number: 10,
                position: Position::Forward,
                foot: Foot::Both,
                born: (1997, 8, 30),
                height: 191,
            },
        ],
    },
    DemoTeam {
        name: "Ajax Amsterdam",
        country: "The Netherlands",
        city: "Amsterdam",
        stadium: "Johan Cruyff Arena",
        players: &[
            DemoPlayer {
                name: "Brian Brobbey",
                number: 9,
                position: Position::Forward,
                foot: Foot::Right,
                born: (2002, 2, 2),
                height: 182,
            },
            DemoPlayer {
                name: "Jorrel Hato",
                number: 4,
                position: Position::Defender,
                foot: Foot::Left,
                born: (2006, 3, 7),
                height: 182,
            },
            DemoPlayer {
                name: "Kenneth Taylor",
                number: 8,
                position: Position::Midfielder,
                foot: Foot::Left,
                born: (2002, 5, 16),
                height: 182,
            },
            DemoPlayer {
                name: "Diant Ramaj",
                number: 40,
                position: Position::Goalkeeper,
                foot: Foot::Both,
                born: (2001, 9, 19),
                height: 189,
            },
        ],
    },
];

/// Loads the demo teams and players into an empty Store
///
/// Returns `false` without writing anything when teams already exist.
pub async fn seed_demo_data(
    teams: &dyn TeamRepository,
    players: &dyn PlayerRepository,
) -> RepositoryResult<bool> {
    if !teams.find_all().await?.is_empty() {
        info!("Store already holds teams, skipping demo data");
        return Ok(false);
    }

    for demo in DEMO_TEAMS {
        let team = teams
            .insert(NewTeam {
                name: demo.name.to_string(),
                country: demo.country.to_string(),
                city: demo.city.to_string(),
                stadium: demo.stadium.to_string(),
            })
            .await?;

        for player in demo.players {
            let (year, month, day) = player.born;
            let birth_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                RepositoryError::Unavailable(format!("invalid demo birth date for {}", player.name))
            })?;

            players
                .insert(NewPlayer {
                    name: player.name.to_string(),
                    number: player.number,
                    position: player.position,
                    foot: player.foot,
                    birth_date,
                    height: player.height,
                    is_injured: false,
                    team_id: team.id,
                })
                .await?;
        }

        info!(team_id = team.id, name = %team.name, players = demo.players.len(), "Seeded demo team");
    }

    Ok(true)
}
