use serde::{Deserialize, Serialize};

/// Kind of an entry in the activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    ChallengeCompleted,
    TeamJoined,
    MilestoneReached,
    GoalCompleted,
    ChallengeStarted,
}

impl ActivityType {
    pub fn code(&self) -> &'static str {
        match self {
            ActivityType::ChallengeCompleted => "challenge_completed",
            ActivityType::TeamJoined => "team_joined",
            ActivityType::MilestoneReached => "milestone_reached",
            ActivityType::GoalCompleted => "goal_completed",
            ActivityType::ChallengeStarted => "challenge_started",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::ChallengeCompleted => "Challenges Completed",
            ActivityType::TeamJoined => "Team Joins",
            ActivityType::MilestoneReached => "Milestones",
            ActivityType::GoalCompleted => "Goals Achieved",
            ActivityType::ChallengeStarted => "Challenges Started",
        }
    }

    /// Icon name used by the activity feed
    pub fn icon_name(&self) -> &'static str {
        match self {
            ActivityType::ChallengeCompleted => "check-circle",
            ActivityType::TeamJoined => "user-plus",
            ActivityType::MilestoneReached => "award",
            ActivityType::GoalCompleted => "target",
            ActivityType::ChallengeStarted => "activity",
        }
    }

    pub fn all() -> Vec<ActivityType> {
        vec![
            ActivityType::ChallengeCompleted,
            ActivityType::TeamJoined,
            ActivityType::MilestoneReached,
            ActivityType::GoalCompleted,
            ActivityType::ChallengeStarted,
        ]
    }
}
