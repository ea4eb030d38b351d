//! Live team statistics computed from the employees listed in a team.

use crate::domain::a001_employee::Employee;
use crate::domain::a002_team::Team;
use crate::shared::query::{FieldValue, Fields};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub average_engagement: u32,
    pub total_points: u64,
    pub member_count: usize,
}

impl Fields for TeamStats {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        match path {
            "averageEngagement" => Some(self.average_engagement.into()),
            "totalPoints" => Some(self.total_points.into()),
            "memberCount" => Some(self.member_count.into()),
            _ => None,
        }
    }
}

/// Resolves `team.members_list` against `employees` and aggregates the matches.
///
/// Ids that match no employee are skipped. The stored `members`,
/// `total_points` and `average_engagement` of the team are not consulted.
pub fn calculate_team_stats(team: &Team, employees: &[Employee]) -> TeamStats {
    let members: Vec<&Employee> = employees
        .iter()
        .filter(|e| team.members_list.contains(&e.id))
        .collect();

    if members.is_empty() {
        return TeamStats::default();
    }

    let engagement_sum: u64 = members.iter().map(|e| u64::from(e.engagement_score)).sum();
    let total_points: u64 = members.iter().map(|e| u64::from(e.total_points)).sum();
    let count = members.len() as u64;

    TeamStats {
        // integer half-up rounding of the mean
        average_engagement: ((2 * engagement_sum + count) / (2 * count)) as u32,
        total_points,
        member_count: members.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::{EmployeeFiller, EmployeeId, NewEmployee};
    use crate::domain::a002_team::TeamId;
    use chrono::NaiveDate;

    fn employee(id: u32, engagement: u8, points: u32) -> Employee {
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let form = NewEmployee {
            name: format!("Employee {}", id),
            email: format!("e{}@techcorp.com", id),
            department: "Engineering".into(),
            position: "Developer".into(),
            phone: String::new(),
        };
        let filler = EmployeeFiller {
            engagement_score: engagement,
            total_points: points,
            completed_goals: 0,
        };
        form.into_employee(EmployeeId(id), today, filler)
    }

    fn team(members: &[u32]) -> Team {
        Team {
            id: TeamId(1),
            name: "Alpha Warriors".into(),
            description: String::new(),
            captain: "John Smith".into(),
            members: 8,
            total_points: 12450,
            average_engagement: 91,
            active_challenges: 3,
            created: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            color: "#3B82F6".into(),
            department: "Engineering".into(),
            members_list: members.iter().copied().map(EmployeeId).collect(),
            achievements: vec![],
        }
    }

    #[test]
    fn test_two_members() {
        let employees = vec![employee(1, 95, 2450), employee(3, 88, 2300)];
        let stats = calculate_team_stats(&team(&[1, 3]), &employees);
        assert_eq!(
            stats,
            TeamStats {
                average_engagement: 92,
                total_points: 4750,
                member_count: 2
            }
        );
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let employees = vec![employee(1, 95, 2450), employee(3, 88, 2300)];
        let stats = calculate_team_stats(&team(&[1, 3, 5]), &employees);
        assert_eq!(stats.member_count, 2);
        assert_eq!(stats.total_points, 4750);
    }

    #[test]
    fn test_empty_team() {
        let employees = vec![employee(1, 95, 2450)];
        assert_eq!(calculate_team_stats(&team(&[]), &employees), TeamStats::default());
        assert_eq!(calculate_team_stats(&team(&[9]), &employees), TeamStats::default());
    }

    #[test]
    fn test_mean_rounds_half_up() {
        let employees = vec![employee(1, 90, 0), employee(2, 91, 0)];
        assert_eq!(calculate_team_stats(&team(&[1, 2]), &employees).average_engagement, 91);
    }
}
