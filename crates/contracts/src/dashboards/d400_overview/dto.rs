use crate::domain::a001_employee::Employee;
use crate::domain::a002_team::Team;
use crate::domain::a004_activity::Activity;
use crate::enums::{ChallengeStatus, SortDirection};
use crate::seed::SeedData;
use crate::shared::query::sort_by;
use serde::{Deserialize, Serialize};

pub const TOP_PERFORMERS: usize = 5;
pub const TOP_TEAMS: usize = 3;
pub const RECENT_ACTIVITIES: usize = 5;

/// Everything the overview dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: u32,
    pub active_employees: u32,
    pub total_teams: u32,
    pub active_challenges: u32,
    pub overall_engagement: u32,
    pub completed_challenges: usize,
    /// Mean stored completion rate over all challenges, rounded half up
    pub avg_challenge_completion: u32,
    /// Highest engagement first
    pub top_performers: Vec<Employee>,
    /// Highest stored average engagement first
    pub top_teams: Vec<Team>,
    pub recent_activities: Vec<Activity>,
}

impl DashboardStats {
    /// Headline numbers come from the company profile; the rest is computed
    /// from the seed collections using their stored statuses.
    pub fn build(seed: &SeedData) -> Self {
        let company = &seed.company_info;

        let completed_challenges = seed
            .challenges
            .iter()
            .filter(|c| c.status == ChallengeStatus::Completed)
            .count();

        let completion_sum: u64 = seed
            .challenges
            .iter()
            .map(|c| u64::from(c.completion_rate))
            .sum();

        Self {
            total_employees: company.total_employees,
            active_employees: company.active_employees,
            total_teams: company.total_teams,
            active_challenges: company.active_challenges,
            overall_engagement: company.overall_engagement,
            completed_challenges,
            avg_challenge_completion: rounded_mean(completion_sum, seed.challenges.len()),
            top_performers: top_performers(&seed.employees, TOP_PERFORMERS),
            top_teams: top_teams(&seed.teams, TOP_TEAMS),
            recent_activities: seed
                .activities
                .iter()
                .take(RECENT_ACTIVITIES)
                .cloned()
                .collect(),
        }
    }
}

/// Half-up rounded mean, 0 for an empty set
pub fn rounded_mean(sum: u64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let count = count as u64;
    ((2 * sum + count) / (2 * count)) as u32
}

/// First `limit` employees by engagement score, ties in seed order
pub fn top_performers(employees: &[Employee], limit: usize) -> Vec<Employee> {
    let mut sorted = sort_by(employees, "engagementScore", SortDirection::Desc);
    sorted.truncate(limit);
    sorted
}

/// First `limit` teams by stored average engagement, ties in seed order
pub fn top_teams(teams: &[Team], limit: usize) -> Vec<Team> {
    let mut sorted = sort_by(teams, "averageEngagement", SortDirection::Desc);
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_build_from_seed() {
        let stats = DashboardStats::build(seed::shared().unwrap());
        assert_eq!(stats.total_employees, 245);
        assert_eq!(stats.active_employees, 189);
        assert_eq!(stats.total_teams, 12);
        assert_eq!(stats.active_challenges, 8);
        assert_eq!(stats.overall_engagement, 87);
        assert_eq!(stats.completed_challenges, 1);
        // (67 + 78 + 72 + 84 + 0 + 0) / 6 = 50.17
        assert_eq!(stats.avg_challenge_completion, 50);
        assert_eq!(stats.recent_activities.len(), 5);
    }

    #[test]
    fn test_top_lists() {
        let stats = DashboardStats::build(seed::shared().unwrap());
        let names: Vec<&str> = stats.top_performers.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["John Smith", "Sarah Johnson", "James Wilson", "Mike Davis", "Alex Chen"]
        );
        let teams: Vec<&str> = stats.top_teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(teams, vec!["Alpha Warriors", "Sales Stars", "Beta Squad"]);
    }

    #[test]
    fn test_top_lists_keep_seed_order_on_ties() {
        let mut teams = seed::load().unwrap().teams;
        for team in &mut teams {
            team.average_engagement = 80;
        }
        let top: Vec<_> = top_teams(&teams, 2).iter().map(|t| t.id).collect();
        assert_eq!(top, vec![teams[0].id, teams[1].id]);

        let employees = seed::load().unwrap().employees;
        let top = top_performers(&employees, employees.len());
        assert_eq!(top.len(), employees.len());
        assert!(top
            .windows(2)
            .all(|pair| pair[0].engagement_score >= pair[1].engagement_score));
    }

    #[test]
    fn test_rounded_mean() {
        assert_eq!(rounded_mean(0, 0), 0);
        assert_eq!(rounded_mean(5, 2), 3);
        assert_eq!(rounded_mean(301, 6), 50);
    }
}
