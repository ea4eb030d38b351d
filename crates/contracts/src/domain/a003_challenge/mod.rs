pub mod aggregate;

pub use aggregate::{Challenge, ChallengeId, ChallengeRow, NewChallenge};
