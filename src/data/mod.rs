//! Static reference data: drivers, teams, races and seasons

pub mod drivers;
pub mod races;
pub mod seasons;
pub mod teams;

// Re-export commonly used types
pub use drivers::{drivers_for_team, find_driver, Driver, DRIVERS};
pub use races::{find_race, round_of, Race, RACES};
pub use seasons::{is_historical, is_supported_season, season_kind, SeasonKind, SEASONS};
pub use teams::{team_code, team_color, team_name, TEAMS};
