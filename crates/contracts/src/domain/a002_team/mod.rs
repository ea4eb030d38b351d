pub mod aggregate;

pub use aggregate::{NewTeam, Team, TeamId, TeamRow, TEAM_DEPARTMENTS};
