pub mod state;

use self::state::{
    add_employee, count_caption, create_state, delete_employee, EmployeeListState, ViewMode,
    FILTER_DEPARTMENT, FILTER_STATUS,
};
use crate::layout::global_context::use_app_context;
use crate::layout::toast_service::{use_toast, ToastService};
use crate::shared::clock;
use crate::shared::components::{FormField, FormSelect, LoadingSpinner, PageHeader, ProgressBar};
use crate::shared::config::AppConfig;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_options, indexed, FilterSelect, SearchInput, SortableHeader};
use crate::shared::loader::{spawn_delayed_load, LoadGuard};
use crate::shared::modal::{ConfirmModal, Modal, SuccessModal};
use crate::shared::storage::EMPLOYEE_VIEW_MODE_KEY;
use contracts::domain::a001_employee::{Employee, EmployeeFiller, NewEmployee};
use contracts::domain::a005_department_stat::DepartmentStat;
use contracts::seed;
use contracts::shared::formatting::{format_date, format_number, generate_initials, DateStyle};
use contracts::shared::list_view::FILTER_ALL;
use contracts::shared::palette::engagement_color;
use leptos::prelude::*;
use thaw::*;

fn department_stats() -> Vec<DepartmentStat> {
    seed::shared()
        .map(|data| data.department_stats.clone())
        .unwrap_or_default()
}

fn start_loading(state: EmployeeListState, toast: ToastService, guard: &LoadGuard, delay_ms: u32) {
    spawn_delayed_load(guard, delay_ms, "employees", move || match seed::shared() {
        Ok(data) => state
            .list
            .update(|list| list.finish_loading(data.employees.clone())),
        Err(e) => {
            log::error!("employees: seed data unavailable: {:#}", e);
            state.list.update(|list| list.finish_loading(Vec::new()));
            toast.error("Failed to load employees");
        }
    });
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let config = use_context::<AppConfig>().unwrap_or_default();

    let state = create_state(ctx.load_preference(EMPLOYEE_VIEW_MODE_KEY, ViewMode::Grid));
    let guard = LoadGuard::for_page();
    start_loading(state, toast, &guard, config.load_delay_ms);

    let departments = StoredValue::new(department_stats());
    let department_names = move || -> Vec<String> {
        departments.with_value(|d| d.iter().map(|s| s.name.clone()).collect())
    };

    let is_loading = Signal::derive(move || state.list.with(|l| l.is_loading()));
    let search = Signal::derive(move || state.list.with(|l| l.search_query().to_string()));
    let sort_field = Signal::derive(move || state.list.with(|l| l.sort_field().to_string()));
    let sort_direction = Signal::derive(move || state.list.with(|l| l.sort_direction()));
    let department_filter = Signal::derive(move || {
        state
            .list
            .with(|l| l.filter(FILTER_DEPARTMENT).unwrap_or(FILTER_ALL).to_string())
    });
    let status_filter = Signal::derive(move || {
        state
            .list
            .with(|l| l.filter(FILTER_STATUS).unwrap_or(FILTER_ALL).to_string())
    });
    let visible = move || state.list.with(|l| indexed(l.visible()));
    let has_visible = move || state.list.with(|l| !l.visible().is_empty());

    let on_search = Callback::new(move |q: String| state.list.update(|l| l.set_search_query(q)));
    let on_sort = Callback::new(move |field: String| state.list.update(|l| l.toggle_sort(&field)));
    let on_department = Callback::new(move |v: String| {
        state.list.update(|l| l.set_filter(FILTER_DEPARTMENT, v))
    });
    let on_status =
        Callback::new(move |v: String| state.list.update(|l| l.set_filter(FILTER_STATUS, v)));

    let set_view_mode = move |mode: ViewMode| {
        state.view_mode.set(mode);
        ctx.save_preference(EMPLOYEE_VIEW_MODE_KEY, &mode);
    };

    let handle_export = move || {
        let rows = state.list.with(|l| l.visible().to_vec());
        let filename = format!("employees_{}.csv", clock::today().format("%Y-%m-%d"));
        if let Err(e) = export_to_csv(&rows, &filename) {
            toast.error(e);
        }
    };

    let handle_add = move || {
        let form = state.form.get_untracked();
        let filler = EmployeeFiller::from_samples(
            clock::random_unit(),
            clock::random_unit(),
            clock::random_unit(),
        );
        let mut outcome = None;
        state.list.update(|l| {
            outcome = Some(add_employee(l, form, clock::today(), filler));
        });
        match outcome {
            Some(Ok(employee)) => {
                log::info!("employees: added {} (id {})", employee.name, employee.id);
                state.form.set(NewEmployee::default());
                state.show_add.set(false);
                state.show_success.set(true);
                toast.success("Employee added successfully!");
            }
            Some(Err(e)) => toast.error(e.to_string()),
            None => {}
        }
    };

    let handle_delete = move || {
        let Some(employee) = state.pending_delete.get_untracked() else {
            return;
        };
        let mut removed = false;
        state.list.update(|l| removed = delete_employee(l, employee.id));
        state.pending_delete.set(None);
        if removed {
            log::info!("employees: removed {} (id {})", employee.name, employee.id);
            toast.success("Employee removed successfully!");
        }
    };

    let ask_delete = Callback::new(move |employee: Employee| state.pending_delete.set(Some(employee)));

    view! {
        <div class="page">
            <PageHeader
                title="Employee Management"
                subtitle=Signal::derive(move || {
                    if is_loading.get() {
                        None
                    } else {
                        Some(state.list.with(count_caption))
                    }
                })
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle_export()>
                    {icon("download")}
                    " Export"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| state.show_add.set(true)>
                    {icon("user-plus")}
                    " Add Employee"
                </Button>
            </PageHeader>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <LoadingSpinner message="Loading employees..." /> }
            >
                <div class="department-strip">
                    {departments.get_value().into_iter().map(|dept| {
                        view! {
                            <div class="department-strip__item">
                                <div class="department-strip__dot" style=format!("background-color: {};", dept.color)></div>
                                <div class="department-strip__name">{dept.name.clone()}</div>
                                <div class="department-strip__count">{dept.employee_count}</div>
                                <div class="department-strip__caption">{format!("{}% engagement", dept.average_engagement)}</div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="filter-panel">
                    <SearchInput
                        value=search
                        on_change=on_search
                        placeholder="Search employees by name, email, department..."
                    />
                    <FilterSelect
                        value=department_filter
                        options=filter_options(
                            "All Departments",
                            &department_names().iter().map(String::as_str).collect::<Vec<_>>(),
                        )
                        on_change=on_department
                    />
                    <FilterSelect
                        value=status_filter
                        options=vec![
                            (FILTER_ALL.to_string(), "All Status".to_string()),
                            ("active".to_string(), "Active".to_string()),
                            ("inactive".to_string(), "Inactive".to_string()),
                        ]
                        on_change=on_status
                    />
                    <div class="view-toggle">
                        <button
                            class="view-toggle__button"
                            class:view-toggle__button--active=move || state.view_mode.get() == ViewMode::Grid
                            on:click=move |_| set_view_mode(ViewMode::Grid)
                        >
                            {icon("grid")}
                            " Grid"
                        </button>
                        <button
                            class="view-toggle__button"
                            class:view-toggle__button--active=move || state.view_mode.get() == ViewMode::Table
                            on:click=move |_| set_view_mode(ViewMode::Table)
                        >
                            {icon("list")}
                            " Table"
                        </button>
                    </div>
                </div>

                <Show when=has_visible fallback=move || view! { <EmptyState state=state /> }>
                    {move || match state.view_mode.get() {
                        ViewMode::Grid => view! {
                            <div class="card-grid">
                                <For
                                    each=visible
                                    key=|(i, e)| (*i, e.id)
                                    children=move |(_, employee)| view! { <EmployeeCard employee=employee on_delete=ask_delete /> }
                                />
                            </div>
                        }
                        .into_any(),
                        ViewMode::Table => view! {
                            <div class="table-wrapper">
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <SortableHeader label="Employee" sort_field="name" current_field=sort_field direction=sort_direction on_sort=on_sort />
                                            <SortableHeader label="Department & Role" sort_field="department" current_field=sort_field direction=sort_direction on_sort=on_sort />
                                            <SortableHeader label="Engagement" sort_field="engagementScore" current_field=sort_field direction=sort_direction on_sort=on_sort />
                                            <SortableHeader label="Points" sort_field="totalPoints" current_field=sort_field direction=sort_direction on_sort=on_sort />
                                            <th class="table__header-cell">"Team"</th>
                                            <th class="table__header-cell">"Status"</th>
                                            <th class="table__header-cell">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=visible
                                            key=|(i, e)| (*i, e.id)
                                            children=move |(_, employee)| view! { <EmployeeTableRow employee=employee on_delete=ask_delete /> }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_any(),
                    }}
                </Show>
            </Show>

            <Show when=move || state.show_add.get()>
                <Modal
                    title="Add New Employee"
                    on_close=Callback::new(move |_| state.show_add.set(false))
                    footer=move || view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| state.show_add.set(false)>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !state.form.with(NewEmployee::is_complete))
                            on_click=move |_| handle_add()
                        >
                            "Add Employee"
                        </Button>
                    }
                >
                    <div class="form">
                        <FormField
                            label="Full Name"
                            required=true
                            placeholder="Enter full name"
                            value=Signal::derive(move || state.form.with(|f| f.name.clone()))
                            on_input=Callback::new(move |v| state.form.update(|f| f.name = v))
                        />
                        <FormField
                            label="Email Address"
                            required=true
                            input_type="email"
                            placeholder="employee@company.com"
                            value=Signal::derive(move || state.form.with(|f| f.email.clone()))
                            on_input=Callback::new(move |v| state.form.update(|f| f.email = v))
                        />
                        <FormSelect
                            label="Department"
                            prompt="Select Department"
                            options=department_names()
                            value=Signal::derive(move || state.form.with(|f| f.department.clone()))
                            on_change=Callback::new(move |v| state.form.update(|f| f.department = v))
                        />
                        <FormField
                            label="Position"
                            required=true
                            placeholder="Job title"
                            value=Signal::derive(move || state.form.with(|f| f.position.clone()))
                            on_input=Callback::new(move |v| state.form.update(|f| f.position = v))
                        />
                        <FormField
                            label="Phone Number"
                            input_type="tel"
                            placeholder="+1 (555) 123-4567"
                            value=Signal::derive(move || state.form.with(|f| f.phone.clone()))
                            on_input=Callback::new(move |v| state.form.update(|f| f.phone = v))
                        />
                    </div>
                </Modal>
            </Show>

            {move || state.pending_delete.get().map(|employee| view! {
                <ConfirmModal
                    title="Remove Employee"
                    message=format!(
                        "Are you sure you want to remove \"{}\" from the company? This action cannot be undone.",
                        employee.name
                    )
                    confirm_label="Remove"
                    on_confirm=Callback::new(move |_| handle_delete())
                    on_cancel=Callback::new(move |_| state.pending_delete.set(None))
                />
            })}

            <Show when=move || state.show_success.get()>
                <SuccessModal
                    title="Employee Added Successfully!"
                    message="The new employee has been added to your company and will receive their wellness account details via email."
                    on_close=Callback::new(move |_| state.show_success.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn EmptyState(state: EmployeeListState) -> impl IntoView {
    let no_employees = move || state.list.with(|l| l.items().is_empty());

    view! {
        <div class="empty-state">
            <span class="empty-state__icon">{icon("users")}</span>
            <h3 class="empty-state__title">"No employees found"</h3>
            <p class="empty-state__text">
                {move || if no_employees() {
                    "Get started by adding your first employee."
                } else {
                    "Try adjusting your search or filter criteria."
                }}
            </p>
            <Show when=no_employees>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| state.show_add.set(true)>
                    "Add Your First Employee"
                </Button>
            </Show>
        </div>
    }
}

#[component]
fn EmployeeCard(employee: Employee, on_delete: Callback<Employee>) -> impl IntoView {
    let goals_percent = employee.goal_completion_percent();
    let goals = format!("{}/{}", employee.completed_goals, employee.weekly_goals);
    let last_active = format_date(Some(&employee.last_active.to_string()), DateStyle::Short);
    let for_delete = employee.clone();

    view! {
        <div class="employee-card">
            <div class="employee-card__header">
                <div class="avatar">{generate_initials(&employee.name)}</div>
                <div class="employee-card__identity">
                    <h3 class="employee-card__name">{employee.name.clone()}</h3>
                    <p class="employee-card__position">{employee.position.clone()}</p>
                    <p class="employee-card__department">{employee.department.clone()}</p>
                </div>
                <button
                    class="button button--icon button--danger"
                    title="Remove Employee"
                    on:click=move |_| on_delete.run(for_delete.clone())
                >
                    {icon("trash")}
                </button>
            </div>

            <div class="employee-card__metrics">
                <div class="metric metric--blue">
                    {icon("trending-up")}
                    <p class="metric__value">{format!("{}%", employee.engagement_score)}</p>
                    <p class="metric__label">"Engagement"</p>
                </div>
                <div class="metric metric--green">
                    {icon("award")}
                    <p class="metric__value">{format_number(Some(f64::from(employee.total_points)))}</p>
                    <p class="metric__label">"Points"</p>
                </div>
            </div>

            <div class="employee-card__goals">
                <div class="employee-card__row">
                    <span>"Weekly Goals:"</span>
                    <strong>{goals}</strong>
                </div>
                <ProgressBar percent=goals_percent color="#10B981".to_string() />
            </div>

            <div class="employee-card__details">
                <div class="employee-card__row">{icon("mail")}<span class="truncate">{employee.email.clone()}</span></div>
                <div class="employee-card__row"><span>"Team:"</span><strong>{employee.team.clone()}</strong></div>
                <div class="employee-card__row"><span>"Last active:"</span><span>{last_active}</span></div>
            </div>
        </div>
    }
}

#[component]
fn EmployeeTableRow(employee: Employee, on_delete: Callback<Employee>) -> impl IntoView {
    let score = employee.engagement_score;
    let status_badge = if employee.is_active() {
        BadgeColor::Success
    } else {
        BadgeColor::Danger
    };
    let for_delete = employee.clone();

    view! {
        <tr class="table__row">
            <td class="table__cell">
                <div class="table__person">
                    <div class="avatar avatar--small">{generate_initials(&employee.name)}</div>
                    <div>
                        <p class="table__primary">{employee.name.clone()}</p>
                        <p class="table__secondary">{employee.email.clone()}</p>
                    </div>
                </div>
            </td>
            <td class="table__cell">
                <p class="table__primary">{employee.department.clone()}</p>
                <p class="table__secondary">{employee.position.clone()}</p>
            </td>
            <td class="table__cell">
                <div class="table__engagement">
                    <ProgressBar percent=f64::from(score) color=engagement_color(u32::from(score)).to_string() />
                    <span>{format!("{}%", score)}</span>
                </div>
            </td>
            <td class="table__cell table__cell--points">
                {format_number(Some(f64::from(employee.total_points)))}
            </td>
            <td class="table__cell">{employee.team.clone()}</td>
            <td class="table__cell">
                <Badge appearance=BadgeAppearance::Tint color=status_badge>
                    {employee.status.code()}
                </Badge>
            </td>
            <td class="table__cell">
                <button class="table__link table__link--danger" on:click=move |_| on_delete.run(for_delete.clone())>
                    "Remove"
                </button>
            </td>
        </tr>
    }
}
