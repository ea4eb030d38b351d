use crate::enums::ActivityType;
use crate::shared::query::{FieldValue, Fields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::record_id!(ActivityId);

/// Entry of the recent-activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
}

impl Activity {
    /// Name of whoever the entry is about: the user, else the team
    pub fn subject(&self) -> Option<&str> {
        self.user.as_deref().or(self.team.as_deref())
    }
}

impl Fields for Activity {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        match path {
            "id" => Some(self.id.0.into()),
            "type" => Some(self.kind.code().into()),
            "title" => Some(self.title.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "user" => self.user.as_deref().map(Into::into),
            "team" => self.team.as_deref().map(Into::into),
            "challenge" => self.challenge.as_deref().map(Into::into),
            "timestamp" => Some(self.timestamp.to_rfc3339().into()),
            "points" => self.points.map(Into::into),
            "goals" => self.goals.map(Into::into),
            _ => None,
        }
    }
}
