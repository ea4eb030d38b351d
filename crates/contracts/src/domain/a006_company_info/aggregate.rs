use serde::{Deserialize, Serialize};

/// Company profile shown in the sidebar and on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    /// Short text shown in the logo badge
    pub logo: String,
    pub plan: String,
    pub industry: String,
    pub total_employees: u32,
    pub active_employees: u32,
    pub total_teams: u32,
    pub active_challenges: u32,
    pub overall_engagement: u32,
    pub established_year: String,
    pub location: String,
}

impl CompanyInfo {
    /// Share of employees marked active, in percent
    pub fn active_share(&self) -> f64 {
        if self.total_employees == 0 {
            return 0.0;
        }
        f64::from(self.active_employees) / f64::from(self.total_employees) * 100.0
    }
}
