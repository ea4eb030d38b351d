use contracts::dashboards::d400_overview::dto::rounded_mean;
use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_team::{NewTeam, TeamId, TeamRow};
use contracts::domain::common::next_record_id;
use contracts::enums::SortDirection;
use contracts::shared::list_view::ListView;
use contracts::shared::validation::FormError;
use chrono::NaiveDate;
use leptos::prelude::*;

pub const SEARCH_FIELDS: [&str; 4] = ["name", "description", "captain", "department"];
pub const FILTER_DEPARTMENT: &str = "department";
pub const VISIBLE_ACHIEVEMENTS: usize = 2;

/// `(preset, label)` pairs of the sort select
pub const SORT_PRESETS: [(&str, &str); 6] = [
    ("name-asc", "Name A-Z"),
    ("name-desc", "Name Z-A"),
    ("members-desc", "Most Members"),
    ("totalPoints-desc", "Highest Points"),
    ("averageEngagement-desc", "Best Performance"),
    ("created-desc", "Newest First"),
];

#[derive(Clone, Copy)]
pub struct TeamListState {
    pub list: RwSignal<ListView<TeamRow>>,
    /// Employees used for the live stats and the captain select
    pub employees: StoredValue<Vec<Employee>>,
    pub form: RwSignal<NewTeam>,
    pub show_create: RwSignal<bool>,
    pub show_success: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<TeamRow>>,
}

pub fn new_list_view() -> ListView<TeamRow> {
    ListView::new(&SEARCH_FIELDS, &[FILTER_DEPARTMENT], "name", SortDirection::Asc)
}

pub fn create_state() -> TeamListState {
    TeamListState {
        list: RwSignal::new(new_list_view()),
        employees: StoredValue::new(Vec::new()),
        form: RwSignal::new(NewTeam::default()),
        show_create: RwSignal::new(false),
        show_success: RwSignal::new(false),
        pending_delete: RwSignal::new(None),
    }
}

/// Stored figures summed over all teams, shown above the filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TeamOverview {
    pub total_teams: usize,
    pub total_members: u32,
    pub total_points: u64,
    pub average_engagement: u32,
}

pub fn overview(rows: &[TeamRow]) -> TeamOverview {
    let engagement_sum: u64 = rows.iter().map(|r| u64::from(r.team.average_engagement)).sum();
    TeamOverview {
        total_teams: rows.len(),
        total_members: rows.iter().map(|r| r.team.members).sum(),
        total_points: rows.iter().map(|r| r.team.total_points).sum(),
        average_engagement: rounded_mean(engagement_sum, rows.len()),
    }
}

pub fn add_team(
    list: &mut ListView<TeamRow>,
    form: NewTeam,
    today: NaiveDate,
    employees: &[Employee],
) -> Result<TeamRow, FormError> {
    form.validate()?;
    let id: TeamId = next_record_id(list.items().len());
    let row = TeamRow::new(form.into_team(id, today), employees);
    list.push(row.clone());
    Ok(row)
}

pub fn delete_team(list: &mut ListView<TeamRow>, id: TeamId) -> bool {
    list.remove_where(|row| row.id() == id) > 0
}

pub fn count_caption(list: &ListView<TeamRow>) -> String {
    format!(
        "{} total teams • {} shown",
        list.items().len(),
        list.visible().len()
    )
}

/// Achievements shown as badges on a card, plus the count left out
pub fn achievement_badges(achievements: &[String]) -> (Vec<String>, usize) {
    let shown: Vec<String> = achievements.iter().take(VISIBLE_ACHIEVEMENTS).cloned().collect();
    let hidden = achievements.len() - shown.len();
    (shown, hidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::indexed;
    use contracts::domain::a002_team::TEAM_DEPARTMENTS;
    use contracts::seed;
    use std::collections::HashSet;

    fn loaded() -> (ListView<TeamRow>, Vec<Employee>) {
        let data = seed::load().unwrap();
        let rows = data
            .teams
            .iter()
            .cloned()
            .map(|t| TeamRow::new(t, &data.employees))
            .collect();
        let mut list = new_list_view();
        list.finish_loading(rows);
        (list, data.employees)
    }

    fn names(list: &ListView<TeamRow>) -> Vec<String> {
        list.visible().iter().map(|r| r.team.name.clone()).collect()
    }

    #[test]
    fn test_overview_uses_stored_aggregates() {
        let (list, _) = loaded();
        let summary = overview(list.items());
        assert_eq!(summary.total_teams, 5);
        assert_eq!(summary.total_members, 29);
        assert_eq!(summary.total_points, 45000);
        assert_eq!(summary.average_engagement, 87);
        assert_eq!(overview(&[]), TeamOverview::default());
    }

    #[test]
    fn test_sort_presets() {
        let (mut list, _) = loaded();
        assert!(list.apply_sort_preset("members-desc"));
        assert_eq!(names(&list)[0], "Alpha Warriors");

        assert!(list.apply_sort_preset("created-desc"));
        assert_eq!(names(&list)[0], "Creative Force");

        assert!(list.apply_sort_preset("name-asc"));
        assert_eq!(list.sort_preset(), "name-asc");
        assert_eq!(names(&list)[0], "Alpha Warriors");
    }

    #[test]
    fn test_every_preset_is_accepted() {
        let (mut list, _) = loaded();
        for (preset, _) in SORT_PRESETS {
            assert!(list.apply_sort_preset(preset), "{}", preset);
            assert_eq!(list.sort_preset(), preset);
        }
    }

    #[test]
    fn test_department_filter_and_search() {
        let (mut list, _) = loaded();
        list.set_filter(FILTER_DEPARTMENT, "Mixed");
        assert_eq!(names(&list), vec!["Beta Squad"]);

        list.set_filter(FILTER_DEPARTMENT, "all");
        list.set_search_query("force");
        assert_eq!(names(&list), vec!["Creative Force", "Gamma Force"]);
    }

    #[test]
    fn test_create_and_delete() {
        let (mut list, employees) = loaded();
        let form = NewTeam {
            name: "Night Owls".into(),
            description: "Late shift wellness".into(),
            captain: "Mike Davis".into(),
            department: "Operations".into(),
            ..NewTeam::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();

        let row = add_team(&mut list, form, today, &employees).unwrap();
        assert_eq!(row.id(), TeamId(6));
        assert_eq!(row.team.members, 1);
        assert_eq!(row.live.member_count, 0);
        assert_eq!(list.items().len(), 6);

        assert!(delete_team(&mut list, TeamId(6)));
        assert_eq!(count_caption(&list), "5 total teams • 5 shown");
    }

    #[test]
    fn test_create_requires_all_fields() {
        let (mut list, employees) = loaded();
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let result = add_team(&mut list, NewTeam::default(), today, &employees);
        assert!(result.is_err());
        assert_eq!(list.items().len(), 5);
    }

    #[test]
    fn test_seed_departments_are_selectable() {
        let (list, _) = loaded();
        for row in list.items() {
            assert!(
                TEAM_DEPARTMENTS.contains(&row.team.department.as_str()),
                "{}",
                row.team.department
            );
        }
    }

    #[test]
    fn test_achievement_badges() {
        let (list, _) = loaded();
        let alpha = &list.items()[0].team;
        let (shown, hidden) = achievement_badges(&alpha.achievements);
        assert_eq!(shown, vec!["Best Team Q1 2024", "Innovation Award"]);
        assert_eq!(hidden, 1);

        let (shown, hidden) = achievement_badges(&[]);
        assert!(shown.is_empty());
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_render_keys_stay_unique_after_delete_then_add() {
        let (mut list, employees) = loaded();
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let form = NewTeam {
            name: "Night Owls".into(),
            description: "Late shift wellness".into(),
            captain: "Mike Davis".into(),
            department: "Operations".into(),
            ..NewTeam::default()
        };

        assert!(delete_team(&mut list, TeamId(2)));
        let row = add_team(&mut list, form, today, &employees).unwrap();
        // four rows left, so the new team reuses id 5
        assert_eq!(row.id(), TeamId(5));

        let ids: Vec<TeamId> = list.visible().iter().map(|r| r.id()).collect();
        assert!(ids.iter().collect::<HashSet<_>>().len() < ids.len());

        let keys: HashSet<(usize, TeamId)> = indexed(list.visible())
            .iter()
            .map(|(i, r)| (*i, r.id()))
            .collect();
        assert_eq!(keys.len(), list.visible().len());
    }
}
