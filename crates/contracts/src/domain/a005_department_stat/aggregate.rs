use crate::shared::query::{FieldValue, Fields};
use serde::{Deserialize, Serialize};

/// Per-department totals shown on the Reports page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStat {
    pub name: String,
    pub employee_count: u32,
    pub average_engagement: u32,
    pub total_points: u64,
    pub active_teams: u32,
    pub color: String,
}

impl Fields for DepartmentStat {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        match path {
            "name" => Some(self.name.as_str().into()),
            "employeeCount" => Some(self.employee_count.into()),
            "averageEngagement" => Some(self.average_engagement.into()),
            "totalPoints" => Some(self.total_points.into()),
            "activeTeams" => Some(self.active_teams.into()),
            "color" => Some(self.color.as_str().into()),
            _ => None,
        }
    }
}
