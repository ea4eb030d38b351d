//! Static seed data, embedded at compile time and parsed once.

use crate::domain::a001_employee::Employee;
use crate::domain::a002_team::Team;
use crate::domain::a003_challenge::Challenge;
use crate::domain::a004_activity::Activity;
use crate::domain::a005_department_stat::DepartmentStat;
use crate::domain::a006_company_info::CompanyInfo;
use crate::domain::a007_wellness_category::WellnessCategory;
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const COMPANY_INFO_JSON: &str = include_str!("company_info.json");
const EMPLOYEES_JSON: &str = include_str!("employees.json");
const TEAMS_JSON: &str = include_str!("teams.json");
const CHALLENGES_JSON: &str = include_str!("challenges.json");
const ACTIVITIES_JSON: &str = include_str!("activities.json");
const DEPARTMENT_STATS_JSON: &str = include_str!("department_stats.json");
const WELLNESS_CATEGORIES_JSON: &str = include_str!("wellness_categories.json");

static SEED: OnceCell<SeedData> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub company_info: CompanyInfo,
    pub employees: Vec<Employee>,
    pub teams: Vec<Team>,
    pub challenges: Vec<Challenge>,
    /// Newest first
    pub activities: Vec<Activity>,
    pub department_stats: Vec<DepartmentStat>,
    pub wellness_categories: Vec<WellnessCategory>,
}

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).with_context(|| format!("Failed to parse seed file {}.json", name))
}

/// Parses the embedded seed files
pub fn load() -> Result<SeedData> {
    Ok(SeedData {
        company_info: parse("company_info", COMPANY_INFO_JSON)?,
        employees: parse("employees", EMPLOYEES_JSON)?,
        teams: parse("teams", TEAMS_JSON)?,
        challenges: parse("challenges", CHALLENGES_JSON)?,
        activities: parse("activities", ACTIVITIES_JSON)?,
        department_stats: parse("department_stats", DEPARTMENT_STATS_JSON)?,
        wellness_categories: parse("wellness_categories", WELLNESS_CATEGORIES_JSON)?,
    })
}

/// Seed data parsed on first use and shared afterwards.
/// Pages clone what they need into their own state.
pub fn shared() -> Result<&'static SeedData> {
    SEED.get_or_try_init(load)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::EmployeeId;
    use crate::enums::{ActivityType, ChallengeStatus};

    #[test]
    fn test_seed_parses() {
        let seed = load().unwrap();
        assert_eq!(seed.company_info.name, "TechCorp Solutions");
        assert_eq!(seed.company_info.total_employees, 245);
        assert_eq!(seed.employees.len(), 6);
        assert_eq!(seed.teams.len(), 5);
        assert_eq!(seed.challenges.len(), 6);
        assert_eq!(seed.activities.len(), 5);
        assert_eq!(seed.department_stats.len(), 6);
        assert_eq!(seed.wellness_categories.len(), 5);
    }

    #[test]
    fn test_seed_records() {
        let seed = shared().unwrap();
        let john = &seed.employees[0];
        assert_eq!(john.name, "John Smith");
        assert_eq!(john.total_points, 2450);
        assert_eq!(john.phone.as_deref(), Some("+1 (555) 123-4567"));

        let alpha = &seed.teams[0];
        assert_eq!(alpha.members_list, vec![EmployeeId(1), EmployeeId(3), EmployeeId(5)]);

        assert_eq!(seed.challenges[3].status, ChallengeStatus::Completed);
        assert_eq!(seed.activities[0].kind, ActivityType::ChallengeCompleted);
        assert_eq!(seed.activities[3].goals, Some(5));
    }

    #[test]
    fn test_shared_is_parsed_once() {
        let a = shared().unwrap();
        let b = shared().unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
