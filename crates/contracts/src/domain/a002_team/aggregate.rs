use crate::domain::a001_employee::{Employee, EmployeeId};
use crate::shared::palette::TEAM_COLORS;
use crate::shared::query::{split_path, FieldValue, Fields};
use crate::shared::team_stats::{calculate_team_stats, TeamStats};
use crate::shared::validation::{require_fields, FormError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::record_id!(TeamId);

/// Departments a team can be created for
pub const TEAM_DEPARTMENTS: [&str; 7] = [
    "Engineering",
    "Marketing",
    "Sales",
    "Human Resources",
    "Design",
    "Operations",
    "Mixed",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub description: String,
    /// Captain name as free text
    pub captain: String,
    /// Stored head count, independent of `members_list`
    pub members: u32,
    pub total_points: u64,
    pub average_engagement: u32,
    pub active_challenges: u32,
    pub created: NaiveDate,
    pub color: String,
    pub department: String,
    #[serde(default)]
    pub members_list: Vec<EmployeeId>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Fields for Team {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        match path {
            "id" => Some(self.id.0.into()),
            "name" => Some(self.name.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "captain" => Some(self.captain.as_str().into()),
            "members" => Some(self.members.into()),
            "totalPoints" => Some(self.total_points.into()),
            "averageEngagement" => Some(self.average_engagement.into()),
            "activeChallenges" => Some(self.active_challenges.into()),
            "created" => Some(self.created.into()),
            "color" => Some(self.color.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            _ => None,
        }
    }
}

/// Fields entered in the "Create Team" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub description: String,
    pub captain: String,
    pub department: String,
    pub color: String,
}

impl Default for NewTeam {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            captain: String::new(),
            department: String::new(),
            color: TEAM_COLORS[0].to_string(),
        }
    }
}

impl NewTeam {
    pub fn validate(&self) -> Result<(), FormError> {
        require_fields(&[
            ("Team name", &self.name),
            ("Description", &self.description),
            ("Captain", &self.captain),
            ("Department", &self.department),
        ])
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// New team with a single member and zeroed aggregates
    pub fn into_team(self, id: TeamId, today: NaiveDate) -> Team {
        Team {
            id,
            name: self.name,
            description: self.description,
            captain: self.captain,
            members: 1,
            total_points: 0,
            average_engagement: 0,
            active_challenges: 0,
            created: today,
            color: self.color,
            department: self.department,
            members_list: Vec::new(),
            achievements: Vec::new(),
        }
    }
}

/// Team as listed on the Teams page: stored aggregates plus the live view
/// computed from the employee collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRow {
    pub team: Team,
    pub live: TeamStats,
}

impl TeamRow {
    pub fn new(team: Team, employees: &[Employee]) -> Self {
        let live = calculate_team_stats(&team, employees);
        Self { team, live }
    }

    pub fn id(&self) -> TeamId {
        self.team.id
    }
}

impl Fields for TeamRow {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        match split_path(path) {
            ("live", Some(rest)) => self.live.field_value(rest),
            _ => self.team.field_value(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewTeam {
        NewTeam {
            name: "Ops Owls".into(),
            description: "Keeps the lights on".into(),
            captain: "Dana Reyes".into(),
            department: "Operations".into(),
            ..NewTeam::default()
        }
    }

    #[test]
    fn test_validate() {
        assert!(form().is_complete());
        let mut missing = form();
        missing.captain.clear();
        assert_eq!(missing.validate(), Err(FormError::MissingField { field: "Captain" }));
    }

    #[test]
    fn test_into_team_zeroes_aggregates() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let team = form().into_team(TeamId(6), today);
        assert_eq!(team.members, 1);
        assert_eq!(team.total_points, 0);
        assert_eq!(team.average_engagement, 0);
        assert_eq!(team.active_challenges, 0);
        assert_eq!(team.created, today);
        assert_eq!(team.color, "#3B82F6");
        assert!(team.members_list.is_empty());
        assert!(team.achievements.is_empty());
    }

    #[test]
    fn test_row_exposes_live_fields() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let row = TeamRow::new(form().into_team(TeamId(1), today), &[]);
        assert_eq!(row.field_value("live.memberCount"), Some(FieldValue::Number(0.0)));
        assert_eq!(row.field_value("members"), Some(FieldValue::Number(1.0)));
        assert_eq!(row.field_value("live.unknown"), None);
    }
}
