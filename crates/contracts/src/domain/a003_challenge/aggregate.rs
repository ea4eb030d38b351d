use crate::domain::a007_wellness_category::WellnessCategory;
use crate::enums::{ChallengeDifficulty, ChallengeStatus};
use crate::shared::query::{FieldValue, Fields};
use crate::shared::timeline::{challenge_status, ChallengeState, ChallengeTimeline};
use crate::shared::validation::{require_fields, FormError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

crate::record_id!(ChallengeId);

pub const DEFAULT_CHALLENGE_POINTS: u32 = 100;
pub const DEFAULT_CHALLENGE_COLOR: &str = "#3B82F6";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participants: u32,
    /// 0..=100
    pub completion_rate: u8,
    pub points: u32,
    /// Status as stored; views derive the live status from the dates
    pub status: ChallengeStatus,
    pub color: String,
    #[serde(default)]
    pub difficulty: ChallengeDifficulty,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub rewards: Vec<String>,
}

impl Challenge {
    pub fn timeline(&self, now: DateTime<Utc>) -> ChallengeTimeline {
        ChallengeTimeline::at(self.start_date, self.end_date, now)
    }
}

impl Fields for Challenge {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        match path {
            "id" => Some(self.id.0.into()),
            "title" => Some(self.title.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "startDate" => Some(self.start_date.into()),
            "endDate" => Some(self.end_date.into()),
            "participants" => Some(self.participants.into()),
            "completionRate" => Some(self.completion_rate.into()),
            "points" => Some(self.points.into()),
            "status" => Some(self.status.code().into()),
            "color" => Some(self.color.as_str().into()),
            "difficulty" => Some(self.difficulty.code().into()),
            _ => None,
        }
    }
}

/// Fields entered in the "Create Challenge" form
#[derive(Debug, Clone, PartialEq)]
pub struct NewChallenge {
    pub title: String,
    pub description: String,
    pub category: String,
    /// `YYYY-MM-DD` as typed into the date input
    pub start_date: String,
    pub end_date: String,
    pub points: u32,
    pub difficulty: ChallengeDifficulty,
}

impl Default for NewChallenge {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            points: DEFAULT_CHALLENGE_POINTS,
            difficulty: ChallengeDifficulty::default(),
        }
    }
}

impl NewChallenge {
    /// Presence check; dates must also parse as `YYYY-MM-DD`.
    /// The order of the two dates is not checked.
    pub fn validate(&self) -> Result<(), FormError> {
        require_fields(&[
            ("Title", &self.title),
            ("Description", &self.description),
            ("Category", &self.category),
            ("Start date", &self.start_date),
            ("End date", &self.end_date),
        ])?;
        parse_form_date(&self.start_date, "Start date")?;
        parse_form_date(&self.end_date, "End date")?;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Builds the challenge. The colour comes from the wellness category with
    /// the same name, or the default blue when there is none.
    pub fn into_challenge(
        self,
        id: ChallengeId,
        categories: &[WellnessCategory],
        now: DateTime<Utc>,
    ) -> Result<Challenge, FormError> {
        self.validate()?;
        let start_date = parse_form_date(&self.start_date, "Start date")?;
        let end_date = parse_form_date(&self.end_date, "End date")?;

        let color = WellnessCategory::find_by_name(categories, &self.category)
            .map(|c| c.color.clone())
            .unwrap_or_else(|| DEFAULT_CHALLENGE_COLOR.to_string());

        Ok(Challenge {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            start_date,
            end_date,
            participants: 0,
            completion_rate: 0,
            points: self.points,
            status: challenge_status(start_date, end_date, now),
            color,
            difficulty: self.difficulty,
            requirements: vec![
                "Complete daily activities".to_string(),
                "Track progress".to_string(),
                "Share updates".to_string(),
            ],
            rewards: vec![
                format!("{} points", self.points),
                "Certificate of completion".to_string(),
                "Wellness badge".to_string(),
            ],
        })
    }
}

fn parse_form_date(value: &str, field: &'static str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate { field })
}

/// Challenge as listed on the Challenges page, with the status split into the
/// date-derived part and the manual pause override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRow {
    pub challenge: Challenge,
    pub state: ChallengeState,
    pub progress: u8,
    pub days_remaining: u32,
}

impl ChallengeRow {
    /// A stored `paused` status becomes the pause override
    pub fn new(challenge: Challenge, now: DateTime<Utc>) -> Self {
        let timeline = challenge.timeline(now);
        let paused = challenge.status == ChallengeStatus::Paused;
        Self {
            state: ChallengeState::new(timeline.status, paused),
            progress: timeline.progress,
            days_remaining: timeline.days_remaining,
            challenge,
        }
    }

    pub fn id(&self) -> ChallengeId {
        self.challenge.id
    }

    pub fn status(&self) -> ChallengeStatus {
        self.state.effective()
    }

    /// Re-derives the timeline at `now`; the pause override is kept.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        let timeline = self.challenge.timeline(now);
        self.state.refresh(timeline.status);
        self.progress = timeline.progress;
        self.days_remaining = timeline.days_remaining;
        self.challenge.status = self.state.effective();
    }

    /// Returns `false` when the challenge is neither active nor paused
    pub fn toggle_pause(&mut self) -> bool {
        let changed = self.state.toggle_pause();
        if changed {
            self.challenge.status = self.state.effective();
        }
        changed
    }

    /// Progress shown on the card: elapsed share, or the stored completion
    /// rate when nothing has elapsed yet.
    pub fn display_progress(&self) -> u8 {
        if self.progress > 0 {
            self.progress
        } else {
            self.challenge.completion_rate
        }
    }

    /// Days left, shown only while the challenge is running
    pub fn visible_days_remaining(&self) -> Option<u32> {
        (self.status() == ChallengeStatus::Active && self.days_remaining > 0)
            .then_some(self.days_remaining)
    }
}

impl Fields for ChallengeRow {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        match path {
            "status" => Some(self.status().code().into()),
            "progress" => Some(self.progress.into()),
            "daysRemaining" => Some(self.days_remaining.into()),
            _ => self.challenge.field_value(path),
        }
    }
}
