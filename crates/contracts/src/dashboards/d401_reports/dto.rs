use crate::dashboards::d400_overview::dto::{rounded_mean, top_teams};
use crate::domain::a002_team::Team;
use crate::domain::a005_department_stat::DepartmentStat;
use crate::enums::{ActivityType, ChallengeStatus};
use crate::seed::SeedData;
use serde::{Deserialize, Serialize};

const DAILY_ENGAGEMENT: [u32; 7] = [85, 87, 89, 88, 90, 86, 88];
const WEEKLY_ENGAGEMENT: [u32; 8] = [86, 88, 87, 89, 88, 90, 87, 89];
const TEAM_COLLABORATION: u32 = 89;

/// Reporting window offered by the Reports page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "7")]
    Last7Days,
    #[default]
    #[serde(rename = "30")]
    Last30Days,
    #[serde(rename = "90")]
    Last90Days,
}

impl DateRange {
    pub fn code(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "7",
            DateRange::Last30Days => "30",
            DateRange::Last90Days => "90",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last90Days => "Last 3 months",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            DateRange::Last7Days => 7,
            DateRange::Last30Days => 30,
            DateRange::Last90Days => 90,
        }
    }

    pub fn all() -> Vec<DateRange> {
        vec![DateRange::Last7Days, DateRange::Last30Days, DateRange::Last90Days]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "7" => Some(DateRange::Last7Days),
            "30" => Some(DateRange::Last30Days),
            "90" => Some(DateRange::Last90Days),
            _ => None,
        }
    }
}

/// Measure used for the department breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMetric {
    #[default]
    Engagement,
    Points,
    Goals,
}

impl ReportMetric {
    pub fn code(&self) -> &'static str {
        match self {
            ReportMetric::Engagement => "engagement",
            ReportMetric::Points => "points",
            ReportMetric::Goals => "goals",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportMetric::Engagement => "Engagement",
            ReportMetric::Points => "Points",
            ReportMetric::Goals => "Goals Completed",
        }
    }

    pub fn all() -> Vec<ReportMetric> {
        vec![ReportMetric::Engagement, ReportMetric::Points, ReportMetric::Goals]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "engagement" => Some(ReportMetric::Engagement),
            "points" => Some(ReportMetric::Points),
            "goals" => Some(ReportMetric::Goals),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOverview {
    pub total_employees: u32,
    pub active_users: u32,
    pub overall_engagement: u32,
    pub total_points: u64,
    pub goals_completed: u64,
    pub active_challenges: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementTrends {
    pub daily: Vec<u32>,
    pub weekly: Vec<u32>,
    pub by_department: Vec<DepartmentStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessMetrics {
    /// Out of 10
    pub health_score: f64,
    pub steps_average: u32,
    /// Percent
    pub sleep_quality: u32,
    /// Out of 10, lower is better
    pub stress_level: f64,
    /// Out of 10
    pub work_life_balance: f64,
}

impl Default for WellnessMetrics {
    fn default() -> Self {
        Self {
            health_score: 8.4,
            steps_average: 7842,
            sleep_quality: 87,
            stress_level: 3.2,
            work_life_balance: 7.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSummary {
    pub active: usize,
    pub completed: usize,
    pub avg_completion: u32,
    pub total_participants: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub total: usize,
    /// Mean stored head count, rounded half up
    pub avg_size: u32,
    pub top_performing: Vec<Team>,
    pub collaboration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCount {
    pub kind: ActivityType,
    pub count: usize,
}

/// One bar of the department breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricBar {
    pub label: String,
    pub value: f64,
    /// Bar length relative to the largest value, 0..=100
    pub share: f64,
    pub color: String,
}

/// Analytics shown on the Reports page for one date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsAnalytics {
    pub range: DateRange,
    pub overview: ReportOverview,
    pub engagement: EngagementTrends,
    pub wellness: WellnessMetrics,
    pub challenges: ChallengeSummary,
    pub teams: TeamSummary,
    pub activity_counts: Vec<ActivityCount>,
    /// Completed goals per department, summed over the seed employees
    goals_by_department: Vec<(String, u64)>,
}

impl ReportsAnalytics {
    /// The seed data carries no history, so every range yields the same figures.
    pub fn build(seed: &SeedData, range: DateRange) -> Self {
        let company = &seed.company_info;

        let count_status = |status: ChallengeStatus| {
            seed.challenges.iter().filter(|c| c.status == status).count()
        };
        let active_challenges = count_status(ChallengeStatus::Active);

        let completion_sum: u64 = seed
            .challenges
            .iter()
            .map(|c| u64::from(c.completion_rate))
            .sum();
        let members_sum: u64 = seed.teams.iter().map(|t| u64::from(t.members)).sum();

        let mut goals_by_department: Vec<(String, u64)> = Vec::new();
        for employee in &seed.employees {
            let goals = u64::from(employee.completed_goals);
            match goals_by_department
                .iter_mut()
                .find(|(name, _)| *name == employee.department)
            {
                Some((_, total)) => *total += goals,
                None => goals_by_department.push((employee.department.clone(), goals)),
            }
        }

        Self {
            range,
            overview: ReportOverview {
                total_employees: company.total_employees,
                active_users: company.active_employees,
                overall_engagement: company.overall_engagement,
                total_points: seed.employees.iter().map(|e| u64::from(e.total_points)).sum(),
                goals_completed: seed
                    .employees
                    .iter()
                    .map(|e| u64::from(e.completed_goals))
                    .sum(),
                active_challenges,
            },
            engagement: EngagementTrends {
                daily: DAILY_ENGAGEMENT.to_vec(),
                weekly: WEEKLY_ENGAGEMENT.to_vec(),
                by_department: seed.department_stats.clone(),
            },
            wellness: WellnessMetrics::default(),
            challenges: ChallengeSummary {
                active: active_challenges,
                completed: count_status(ChallengeStatus::Completed),
                avg_completion: rounded_mean(completion_sum, seed.challenges.len()),
                total_participants: seed.challenges.iter().map(|c| u64::from(c.participants)).sum(),
            },
            teams: TeamSummary {
                total: seed.teams.len(),
                avg_size: rounded_mean(members_sum, seed.teams.len()),
                top_performing: top_teams(&seed.teams, 3),
                collaboration: TEAM_COLLABORATION,
            },
            activity_counts: ActivityType::all()
                .into_iter()
                .map(|kind| ActivityCount {
                    kind,
                    count: seed.activities.iter().filter(|a| a.kind == kind).count(),
                })
                .collect(),
            goals_by_department,
        }
    }

    /// Department breakdown for `metric`
    pub fn department_bars(&self, metric: ReportMetric) -> Vec<MetricBar> {
        let values: Vec<(String, f64, String)> = self
            .engagement
            .by_department
            .iter()
            .map(|dept| {
                let value = match metric {
                    ReportMetric::Engagement => f64::from(dept.average_engagement),
                    ReportMetric::Points => dept.total_points as f64,
                    ReportMetric::Goals => self
                        .goals_by_department
                        .iter()
                        .find(|(name, _)| *name == dept.name)
                        .map(|(_, goals)| *goals as f64)
                        .unwrap_or(0.0),
                };
                (dept.name.clone(), value, dept.color.clone())
            })
            .collect();

        // engagement is already a percentage, other metrics scale to the largest bar
        let max = match metric {
            ReportMetric::Engagement => 100.0,
            _ => values.iter().map(|(_, v, _)| *v).fold(0.0, f64::max),
        };

        values
            .into_iter()
            .map(|(label, value, color)| MetricBar {
                share: if max > 0.0 { value / max * 100.0 } else { 0.0 },
                label,
                value,
                color,
            })
            .collect()
    }

    pub fn activity_count(&self, kind: ActivityType) -> usize {
        self.activity_counts
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn analytics() -> ReportsAnalytics {
        ReportsAnalytics::build(seed::shared().unwrap(), DateRange::default())
    }

    #[test]
    fn test_overview() {
        let a = analytics();
        assert_eq!(a.range, DateRange::Last30Days);
        assert_eq!(a.overview.total_employees, 245);
        assert_eq!(a.overview.active_users, 189);
        assert_eq!(a.overview.total_points, 12750);
        assert_eq!(a.overview.goals_completed, 19);
        assert_eq!(a.overview.active_challenges, 3);
    }

    #[test]
    fn test_series_and_wellness() {
        let a = analytics();
        assert_eq!(a.engagement.daily, vec![85, 87, 89, 88, 90, 86, 88]);
        assert_eq!(a.engagement.weekly.len(), 8);
        assert_eq!(a.engagement.by_department.len(), 6);
        assert_eq!(a.wellness.steps_average, 7842);
        assert_eq!(a.wellness.health_score, 8.4);
    }

    #[test]
    fn test_challenge_and_team_summary() {
        let a = analytics();
        assert_eq!(a.challenges.active, 3);
        assert_eq!(a.challenges.completed, 1);
        assert_eq!(a.challenges.avg_completion, 50);
        assert_eq!(a.challenges.total_participants, 549);

        assert_eq!(a.teams.total, 5);
        // (8 + 6 + 5 + 4 + 6) / 5 = 5.8
        assert_eq!(a.teams.avg_size, 6);
        assert_eq!(a.teams.top_performing[0].name, "Alpha Warriors");
        assert_eq!(a.teams.collaboration, 89);
    }

    #[test]
    fn test_activity_counts() {
        let a = analytics();
        assert_eq!(a.activity_counts.len(), 5);
        assert_eq!(a.activity_count(ActivityType::ChallengeCompleted), 1);
        assert_eq!(a.activity_count(ActivityType::GoalCompleted), 1);
    }

    #[test]
    fn test_department_bars() {
        let a = analytics();
        let engagement = a.department_bars(ReportMetric::Engagement);
        assert_eq!(engagement[0].label, "Engineering");
        assert_eq!(engagement[0].share, 89.0);

        let points = a.department_bars(ReportMetric::Points);
        assert_eq!(points[0].share, 100.0);

        let goals = a.department_bars(ReportMetric::Goals);
        // John (3) and Mike (2)
        assert_eq!(goals[0].value, 5.0);
        // no seed employee in Operations
        assert_eq!(goals[5].value, 0.0);
    }

    #[test]
    fn test_date_range_codes() {
        for range in DateRange::all() {
            assert_eq!(DateRange::from_code(range.code()), Some(range));
        }
        assert_eq!(DateRange::Last90Days.days(), 90);
        assert_eq!(DateRange::from_code("365"), None);
    }
}
