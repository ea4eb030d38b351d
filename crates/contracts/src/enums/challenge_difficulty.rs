use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChallengeDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl ChallengeDifficulty {
    pub fn code(&self) -> &'static str {
        match self {
            ChallengeDifficulty::Easy => "Easy",
            ChallengeDifficulty::Medium => "Medium",
            ChallengeDifficulty::Hard => "Hard",
        }
    }

    pub fn all() -> Vec<ChallengeDifficulty> {
        vec![
            ChallengeDifficulty::Easy,
            ChallengeDifficulty::Medium,
            ChallengeDifficulty::Hard,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Easy" => Some(ChallengeDifficulty::Easy),
            "Medium" => Some(ChallengeDifficulty::Medium),
            "Hard" => Some(ChallengeDifficulty::Hard),
            _ => None,
        }
    }
}
