use crate::shared::export::CsvExportable;
use contracts::domain::a001_employee::{Employee, EmployeeFiller, EmployeeId, NewEmployee};
use contracts::domain::common::next_record_id;
use contracts::enums::SortDirection;
use contracts::shared::list_view::ListView;
use contracts::shared::validation::FormError;
use chrono::NaiveDate;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const SEARCH_FIELDS: [&str; 4] = ["name", "email", "department", "position"];
pub const FILTER_DEPARTMENT: &str = "department";
pub const FILTER_STATUS: &str = "status";

/// Cards or table rows; remembered in browser storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

#[derive(Clone, Copy)]
pub struct EmployeeListState {
    pub list: RwSignal<ListView<Employee>>,
    pub view_mode: RwSignal<ViewMode>,
    pub form: RwSignal<NewEmployee>,
    pub show_add: RwSignal<bool>,
    pub show_success: RwSignal<bool>,
    /// Employee waiting for delete confirmation
    pub pending_delete: RwSignal<Option<Employee>>,
}

pub fn new_list_view() -> ListView<Employee> {
    ListView::new(
        &SEARCH_FIELDS,
        &[FILTER_DEPARTMENT, FILTER_STATUS],
        "name",
        SortDirection::Asc,
    )
}

pub fn create_state(view_mode: ViewMode) -> EmployeeListState {
    EmployeeListState {
        list: RwSignal::new(new_list_view()),
        view_mode: RwSignal::new(view_mode),
        form: RwSignal::new(NewEmployee::default()),
        show_add: RwSignal::new(false),
        show_success: RwSignal::new(false),
        pending_delete: RwSignal::new(None),
    }
}

/// Appends the employee described by `form`; the id is `len + 1`
pub fn add_employee(
    list: &mut ListView<Employee>,
    form: NewEmployee,
    today: NaiveDate,
    filler: EmployeeFiller,
) -> Result<Employee, FormError> {
    form.validate()?;
    let id: EmployeeId = next_record_id(list.items().len());
    let employee = form.into_employee(id, today, filler);
    list.push(employee.clone());
    Ok(employee)
}

pub fn delete_employee(list: &mut ListView<Employee>, id: EmployeeId) -> bool {
    list.remove_where(|e| e.id == id) > 0
}

/// "6 total employees • 2 shown"
pub fn count_caption(list: &ListView<Employee>) -> String {
    format!(
        "{} total employees • {} shown",
        list.items().len(),
        list.visible().len()
    )
}

impl CsvExportable for Employee {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Email",
            "Department",
            "Position",
            "Team",
            "Status",
            "Engagement",
            "Points",
            "Completed Goals",
            "Weekly Goals",
            "Join Date",
            "Last Active",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.department.clone(),
            self.position.clone(),
            self.team.clone(),
            self.status.code().to_string(),
            self.engagement_score.to_string(),
            self.total_points.to_string(),
            self.completed_goals.to_string(),
            self.weekly_goals.to_string(),
            self.join_date.to_string(),
            self.last_active.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use crate::shared::list_utils::indexed;
    use contracts::seed;
    use std::collections::HashSet;

    fn loaded() -> ListView<Employee> {
        let mut list = new_list_view();
        list.finish_loading(seed::load().unwrap().employees);
        list
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 20).unwrap()
    }

    fn form() -> NewEmployee {
        NewEmployee {
            name: "Nina Patel".to_string(),
            email: "nina.patel@techcorp.com".to_string(),
            department: "Engineering".to_string(),
            position: "QA Engineer".to_string(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_default_sort_is_name_ascending() {
        let list = loaded();
        let names: Vec<&str> = list.visible().iter().map(|e| e.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_search_and_department_filter() {
        let mut list = loaded();
        list.set_filter(FILTER_DEPARTMENT, "Engineering");
        assert!(list.visible().iter().all(|e| e.department == "Engineering"));

        list.set_search_query("JOHN");
        assert!(list
            .visible()
            .iter()
            .all(|e| e.name.to_lowercase().contains("john")
                || e.email.to_lowercase().contains("john")
                || e.position.to_lowercase().contains("john")));
    }

    #[test]
    fn test_add_appends_with_next_id() {
        let mut list = loaded();
        let before = list.items().len();
        let filler = EmployeeFiller::from_samples(0.0, 0.0, 0.0);

        let added = add_employee(&mut list, form(), today(), filler).unwrap();
        assert_eq!(added.id, EmployeeId(before as u32 + 1));
        assert_eq!(added.team, "Unassigned");
        assert_eq!(list.items().len(), before + 1);
        assert!(list.visible().iter().any(|e| e.name == "Nina Patel"));
    }

    #[test]
    fn test_add_rejects_incomplete_form() {
        let mut list = loaded();
        let before = list.items().len();
        let mut incomplete = form();
        incomplete.position = "  ".to_string();

        let result = add_employee(
            &mut list,
            incomplete,
            today(),
            EmployeeFiller::from_samples(0.5, 0.5, 0.5),
        );
        assert!(matches!(result, Err(FormError::MissingField { .. })));
        assert_eq!(list.items().len(), before);
    }

    #[test]
    fn test_delete_removes_from_both_collections() {
        let mut list = loaded();
        let target = list.items()[0].id;
        assert!(delete_employee(&mut list, target));
        assert!(list.items().iter().all(|e| e.id != target));
        assert!(list.visible().iter().all(|e| e.id != target));
        assert!(!delete_employee(&mut list, target));
    }

    #[test]
    fn test_delete_then_add_keeps_render_keys_unique() {
        let mut list = loaded();
        let filler = EmployeeFiller::from_samples(0.5, 0.5, 0.5);
        assert!(delete_employee(&mut list, EmployeeId(2)));
        let added = add_employee(&mut list, form(), today(), filler).unwrap();
        // five left, so the new id collides with the last seed employee
        assert_eq!(added.id, EmployeeId(6));
        assert_eq!(list.visible().iter().filter(|e| e.id == EmployeeId(6)).count(), 2);

        let keys: HashSet<(usize, EmployeeId)> = indexed(list.visible())
            .iter()
            .map(|(i, e)| (*i, e.id))
            .collect();
        assert_eq!(keys.len(), list.visible().len());
    }

    #[test]
    fn test_count_caption() {
        let mut list = loaded();
        list.set_search_query("no such person");
        assert_eq!(count_caption(&list), "6 total employees • 0 shown");
    }

    #[test]
    fn test_view_mode_storage_form() {
        assert_eq!(serde_json::to_string(&ViewMode::Table).unwrap(), "\"table\"");
        assert_eq!(
            serde_json::from_str::<ViewMode>("\"grid\"").unwrap(),
            ViewMode::Grid
        );
    }

    #[test]
    fn test_csv_has_row_per_employee() {
        let list = loaded();
        let csv = build_csv(list.visible());
        assert_eq!(csv.lines().count(), list.visible().len() + 1);
        assert!(csv.starts_with("ID,Name,Email"));
    }
}
