pub mod activity_type;
pub mod challenge_difficulty;
pub mod challenge_status;
pub mod employee_status;
pub mod sort_direction;

pub use activity_type::ActivityType;
pub use challenge_difficulty::ChallengeDifficulty;
pub use challenge_status::ChallengeStatus;
pub use employee_status::EmployeeStatus;
pub use sort_direction::SortDirection;
