use crate::enums::EmployeeStatus;
use crate::shared::query::{FieldValue, Fields};
use crate::shared::validation::{require_fields, FormError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::record_id!(
    /// Employee identifier, referenced by `Team::members_list`
    EmployeeId
);

// ============================================================================
// Record
// ============================================================================

/// Company employee taking part in the wellness program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub join_date: NaiveDate,
    /// 0..=100
    pub engagement_score: u8,
    pub total_points: u32,
    pub weekly_goals: u32,
    /// Display only, never checked against `weekly_goals`
    pub completed_goals: u32,
    /// Team name as free text
    pub team: String,
    pub status: EmployeeStatus,
    pub last_active: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

impl Employee {
    /// Share of weekly goals completed, 0 when no goals are set
    pub fn goal_completion_percent(&self) -> f64 {
        if self.weekly_goals == 0 {
            return 0.0;
        }
        f64::from(self.completed_goals) / f64::from(self.weekly_goals) * 100.0
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

impl Fields for Employee {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        match path {
            "id" => Some(self.id.0.into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            "position" => Some(self.position.as_str().into()),
            "joinDate" => Some(self.join_date.into()),
            "engagementScore" => Some(self.engagement_score.into()),
            "totalPoints" => Some(self.total_points.into()),
            "weeklyGoals" => Some(self.weekly_goals.into()),
            "completedGoals" => Some(self.completed_goals.into()),
            "team" => Some(self.team.as_str().into()),
            "status" => Some(self.status.code().into()),
            "lastActive" => Some(self.last_active.into()),
            "phone" => self.phone.as_deref().map(Into::into),
            "manager" => self.manager.as_deref().map(Into::into),
            "birthday" => self.birthday.map(Into::into),
            "emergencyContact" => self.emergency_contact.as_deref().map(Into::into),
            _ => None,
        }
    }
}

// ============================================================================
// Add form
// ============================================================================

pub const UNASSIGNED_TEAM: &str = "Unassigned";
pub const DEFAULT_MANAGER: &str = "Sarah Johnson";
pub const DEFAULT_WEEKLY_GOALS: u32 = 4;

/// Fields entered in the "Add Employee" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub phone: String,
}

/// Placeholder metrics for an employee created from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeFiller {
    pub engagement_score: u8,
    pub total_points: u32,
    pub completed_goals: u32,
}

impl EmployeeFiller {
    /// Maps three samples from `[0, 1)` onto engagement 60..=99,
    /// points 500..=1499 and completed goals 0..=3.
    pub fn from_samples(engagement: f64, points: f64, goals: f64) -> Self {
        let pick = |sample: f64, span: f64| (sample.clamp(0.0, 0.999_999) * span).floor();
        Self {
            engagement_score: 60 + pick(engagement, 40.0) as u8,
            total_points: 500 + pick(points, 1000.0) as u32,
            completed_goals: pick(goals, 4.0) as u32,
        }
    }
}

impl NewEmployee {
    /// Presence check only; the email format is not validated here.
    pub fn validate(&self) -> Result<(), FormError> {
        require_fields(&[
            ("Name", &self.name),
            ("Email", &self.email),
            ("Department", &self.department),
            ("Position", &self.position),
        ])
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn into_employee(self, id: EmployeeId, today: NaiveDate, filler: EmployeeFiller) -> Employee {
        let phone = if self.phone.trim().is_empty() {
            None
        } else {
            Some(self.phone)
        };

        Employee {
            id,
            name: self.name,
            email: self.email,
            department: self.department,
            position: self.position,
            join_date: today,
            engagement_score: filler.engagement_score,
            total_points: filler.total_points,
            weekly_goals: DEFAULT_WEEKLY_GOALS,
            completed_goals: filler.completed_goals,
            team: UNASSIGNED_TEAM.to_string(),
            status: EmployeeStatus::Active,
            last_active: today,
            phone,
            manager: Some(DEFAULT_MANAGER.to_string()),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1),
            emergency_contact: Some("Emergency Contact - (555) 000-0000".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewEmployee {
        NewEmployee {
            name: "Nina Park".into(),
            email: "not-an-email".into(),
            department: "Design".into(),
            position: "Illustrator".into(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_validate_is_presence_only() {
        assert!(form().validate().is_ok());

        let mut missing = form();
        missing.position = "  ".into();
        assert_eq!(
            missing.validate(),
            Err(FormError::MissingField { field: "Position" })
        );
    }

    #[test]
    fn test_filler_ranges() {
        let low = EmployeeFiller::from_samples(0.0, 0.0, 0.0);
        assert_eq!((low.engagement_score, low.total_points, low.completed_goals), (60, 500, 0));

        let high = EmployeeFiller::from_samples(0.9999, 0.9999, 0.9999);
        assert_eq!((high.engagement_score, high.total_points, high.completed_goals), (99, 1499, 3));

        let clamped = EmployeeFiller::from_samples(1.0, 7.0, -1.0);
        assert_eq!((clamped.engagement_score, clamped.total_points, clamped.completed_goals), (99, 1499, 0));
    }

    #[test]
    fn test_into_employee_fills_defaults() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let filler = EmployeeFiller { engagement_score: 70, total_points: 800, completed_goals: 2 };
        let employee = form().into_employee(EmployeeId(7), today, filler);

        assert_eq!(employee.id, EmployeeId(7));
        assert_eq!(employee.team, UNASSIGNED_TEAM);
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(employee.join_date, today);
        assert_eq!(employee.last_active, today);
        assert_eq!(employee.weekly_goals, 4);
        assert_eq!(employee.phone, None);
        assert_eq!(employee.engagement_score, 70);
    }

    #[test]
    fn test_goal_completion_handles_zero_goals() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let filler = EmployeeFiller { engagement_score: 70, total_points: 800, completed_goals: 3 };
        let mut employee = form().into_employee(EmployeeId(1), today, filler);
        assert_eq!(employee.goal_completion_percent(), 75.0);
        employee.weekly_goals = 0;
        assert_eq!(employee.goal_completion_percent(), 0.0);
    }

    #[test]
    fn test_field_access() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let filler = EmployeeFiller { engagement_score: 70, total_points: 800, completed_goals: 3 };
        let employee = form().into_employee(EmployeeId(1), today, filler);
        assert_eq!(employee.field_value("status"), Some(FieldValue::Text("active".into())));
        assert_eq!(employee.field_value("totalPoints"), Some(FieldValue::Number(800.0)));
        assert_eq!(employee.field_value("phone"), None);
        assert_eq!(employee.field_value("unknown"), None);
    }
}
