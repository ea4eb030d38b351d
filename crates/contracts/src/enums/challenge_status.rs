use serde::{Deserialize, Serialize};

/// Lifecycle status of a challenge.
///
/// `Upcoming`, `Active` and `Completed` follow from the challenge dates.
/// `Paused` only ever comes from a manual override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Upcoming,
    Active,
    Completed,
    Paused,
}

impl ChallengeStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ChallengeStatus::Upcoming => "upcoming",
            ChallengeStatus::Active => "active",
            ChallengeStatus::Completed => "completed",
            ChallengeStatus::Paused => "paused",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChallengeStatus::Upcoming => "Upcoming",
            ChallengeStatus::Active => "Active",
            ChallengeStatus::Completed => "Completed",
            ChallengeStatus::Paused => "Paused",
        }
    }

    pub fn all() -> Vec<ChallengeStatus> {
        vec![
            ChallengeStatus::Active,
            ChallengeStatus::Completed,
            ChallengeStatus::Upcoming,
            ChallengeStatus::Paused,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "upcoming" => Some(ChallengeStatus::Upcoming),
            "active" => Some(ChallengeStatus::Active),
            "completed" => Some(ChallengeStatus::Completed),
            "paused" => Some(ChallengeStatus::Paused),
            _ => None,
        }
    }
}
