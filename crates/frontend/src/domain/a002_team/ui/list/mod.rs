pub mod state;

use self::state::{
    achievement_badges, add_team, count_caption, create_state, delete_team, overview, TeamListState,
    FILTER_DEPARTMENT, SORT_PRESETS,
};
use crate::layout::toast_service::{use_toast, ToastService};
use crate::shared::clock;
use crate::shared::components::{FormField, FormSelect, LoadingSpinner, PageHeader, ProgressBar, StatCard};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_options, indexed, FilterSelect, SearchInput};
use crate::shared::loader::{spawn_delayed_load, LoadGuard};
use crate::shared::modal::{ConfirmModal, Modal, SuccessModal};
use contracts::domain::a002_team::{NewTeam, TeamRow, TEAM_DEPARTMENTS};
use contracts::seed;
use contracts::shared::formatting::{format_date, format_number, DateStyle};
use contracts::shared::list_view::FILTER_ALL;
use contracts::shared::palette::TEAM_COLORS;
use leptos::prelude::*;
use thaw::*;

fn start_loading(state: TeamListState, toast: ToastService, guard: &LoadGuard, delay_ms: u32) {
    spawn_delayed_load(guard, delay_ms, "teams", move || match seed::shared() {
        Ok(data) => {
            state.employees.set_value(data.employees.clone());
            let rows = data
                .teams
                .iter()
                .cloned()
                .map(|team| TeamRow::new(team, &data.employees))
                .collect();
            state.list.update(|list| list.finish_loading(rows));
        }
        Err(e) => {
            log::error!("teams: seed data unavailable: {:#}", e);
            state.list.update(|list| list.finish_loading(Vec::new()));
            toast.error("Failed to load teams");
        }
    });
}

#[component]
#[allow(non_snake_case)]
pub fn TeamList() -> impl IntoView {
    let toast = use_toast();
    let config = use_context::<AppConfig>().unwrap_or_default();

    let state = create_state();
    let guard = LoadGuard::for_page();
    start_loading(state, toast, &guard, config.load_delay_ms);

    let is_loading = Signal::derive(move || state.list.with(|l| l.is_loading()));
    let search = Signal::derive(move || state.list.with(|l| l.search_query().to_string()));
    let department_filter = Signal::derive(move || {
        state
            .list
            .with(|l| l.filter(FILTER_DEPARTMENT).unwrap_or(FILTER_ALL).to_string())
    });
    let sort_preset = Signal::derive(move || state.list.with(|l| l.sort_preset()));
    let summary = Memo::new(move |_| state.list.with(|l| overview(l.items())));
    let visible = move || state.list.with(|l| indexed(l.visible()));
    let has_visible = move || state.list.with(|l| !l.visible().is_empty());

    let on_search = Callback::new(move |q: String| state.list.update(|l| l.set_search_query(q)));
    let on_department = Callback::new(move |v: String| {
        state.list.update(|l| l.set_filter(FILTER_DEPARTMENT, v))
    });
    let on_sort_preset = Callback::new(move |preset: String| {
        state.list.update(|l| {
            if !l.apply_sort_preset(&preset) {
                log::warn!("teams: unknown sort preset {}", preset);
            }
        })
    });

    let captain_names = move || -> Vec<String> {
        state.employees.with_value(|list| list.iter().map(|e| e.name.clone()).collect())
    };

    let handle_create = move || {
        let form = state.form.get_untracked();
        let mut outcome = None;
        state.list.update(|l| {
            outcome = Some(state
                .employees
                .with_value(|employees| add_team(l, form, clock::today(), employees)));
        });
        match outcome {
            Some(Ok(row)) => {
                log::info!("teams: created {} (id {})", row.team.name, row.id());
                state.form.set(NewTeam::default());
                state.show_create.set(false);
                state.show_success.set(true);
                toast.success("Team created successfully!");
            }
            Some(Err(e)) => toast.error(e.to_string()),
            None => {}
        }
    };

    let handle_delete = move || {
        let Some(row) = state.pending_delete.get_untracked() else {
            return;
        };
        let mut removed = false;
        state.list.update(|l| removed = delete_team(l, row.id()));
        state.pending_delete.set(None);
        if removed {
            log::info!("teams: deleted {} (id {})", row.team.name, row.id());
            toast.success("Team deleted successfully!");
        }
    };

    let ask_delete = Callback::new(move |row: TeamRow| state.pending_delete.set(Some(row)));

    view! {
        <div class="page">
            <PageHeader
                title="Team Management"
                subtitle=Signal::derive(move || {
                    if is_loading.get() {
                        None
                    } else {
                        Some(state.list.with(count_caption))
                    }
                })
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| state.show_create.set(true)>
                    {icon("plus")}
                    " Create Team"
                </Button>
            </PageHeader>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <LoadingSpinner message="Loading teams..." /> }
            >
                <div class="stat-grid">
                    <StatCard
                        label="Total Teams"
                        icon_name="users"
                        color="#3B82F6"
                        value=Signal::derive(move || summary.get().total_teams.to_string())
                    />
                    <StatCard
                        label="Total Members"
                        icon_name="user-plus"
                        color="#10B981"
                        value=Signal::derive(move || summary.get().total_members.to_string())
                    />
                    <StatCard
                        label="Total Points"
                        icon_name="award"
                        color="#8B5CF6"
                        value=Signal::derive(move || format_number(Some(summary.get().total_points as f64)))
                    />
                    <StatCard
                        label="Avg Engagement"
                        icon_name="trending-up"
                        color="#F59E0B"
                        value=Signal::derive(move || format!("{}%", summary.get().average_engagement))
                    />
                </div>

                <div class="filter-panel">
                    <SearchInput value=search on_change=on_search placeholder="Search teams..." />
                    <FilterSelect
                        value=department_filter
                        options=filter_options("All Departments", &TEAM_DEPARTMENTS)
                        on_change=on_department
                    />
                    <FilterSelect
                        value=sort_preset
                        options=SORT_PRESETS
                            .iter()
                            .map(|(value, label)| (value.to_string(), label.to_string()))
                            .collect()
                        on_change=on_sort_preset
                    />
                </div>

                <Show
                    when=has_visible
                    fallback=move || view! {
                        <div class="empty-state">
                            <span class="empty-state__icon">{icon("users")}</span>
                            <h3 class="empty-state__title">"No teams found"</h3>
                            <p class="empty-state__text">
                                {move || if state.list.with(|l| l.items().is_empty()) {
                                    "Create your first team to get started."
                                } else {
                                    "Try adjusting your search or filter criteria."
                                }}
                            </p>
                        </div>
                    }
                >
                    <div class="card-grid">
                        <For
                            each=visible
                            key=|(i, row)| (*i, row.id())
                            children=move |(_, row)| view! { <TeamCard row=row on_delete=ask_delete /> }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || state.show_create.get()>
                <Modal
                    title="Create New Team"
                    on_close=Callback::new(move |_| state.show_create.set(false))
                    footer=move || view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| state.show_create.set(false)>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !state.form.with(NewTeam::is_complete))
                            on_click=move |_| handle_create()
                        >
                            "Create Team"
                        </Button>
                    }
                >
                    <div class="form">
                        <FormField
                            label="Team Name"
                            required=true
                            placeholder="Enter team name"
                            value=Signal::derive(move || state.form.with(|f| f.name.clone()))
                            on_input=Callback::new(move |v| state.form.update(|f| f.name = v))
                        />
                        <FormField
                            label="Description"
                            required=true
                            placeholder="Describe the team's focus"
                            value=Signal::derive(move || state.form.with(|f| f.description.clone()))
                            on_input=Callback::new(move |v| state.form.update(|f| f.description = v))
                        />
                        <FormSelect
                            label="Team Captain"
                            prompt="Select Captain"
                            options=captain_names()
                            value=Signal::derive(move || state.form.with(|f| f.captain.clone()))
                            on_change=Callback::new(move |v| state.form.update(|f| f.captain = v))
                        />
                        <FormSelect
                            label="Department"
                            prompt="Select Department"
                            options=TEAM_DEPARTMENTS.iter().map(|d| d.to_string()).collect()
                            value=Signal::derive(move || state.form.with(|f| f.department.clone()))
                            on_change=Callback::new(move |v| state.form.update(|f| f.department = v))
                        />
                        <div class="form__group">
                            <span class="form__label">"Team Color"</span>
                            <div class="color-picker">
                                {TEAM_COLORS.iter().map(|color| {
                                    let color = color.to_string();
                                    let swatch = color.clone();
                                    let title = color.clone();
                                    let style = format!("background-color: {};", color);
                                    view! {
                                        <button
                                            class="color-picker__swatch"
                                            class:color-picker__swatch--selected=move || state.form.with(|f| f.color == swatch)
                                            style=style
                                            title=title
                                            on:click=move |_| {
                                                let picked = color.clone();
                                                state.form.update(|f| f.color = picked);
                                            }
                                        ></button>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </Modal>
            </Show>

            {move || state.pending_delete.get().map(|row| view! {
                <ConfirmModal
                    title="Delete Team"
                    message=format!(
                        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                        row.team.name
                    )
                    on_confirm=Callback::new(move |_| handle_delete())
                    on_cancel=Callback::new(move |_| state.pending_delete.set(None))
                />
            })}

            <Show when=move || state.show_success.get()>
                <SuccessModal
                    title="Team Created Successfully!"
                    message="Your new team is ready. Invite members to start earning points together."
                    on_close=Callback::new(move |_| state.show_success.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn TeamCard(row: TeamRow, on_delete: Callback<TeamRow>) -> impl IntoView {
    let team = row.team.clone();
    let live = row.live;
    let border = format!("border-left-color: {};", team.color);
    let badge = format!("background-color: {};", team.color);
    let created = format_date(Some(&team.created.to_string()), DateStyle::Short);
    let (achievements, hidden_achievements) = achievement_badges(&team.achievements);

    view! {
        <div class="team-card" style=border>
            <div class="team-card__header">
                <div class="team-card__badge" style=badge>{icon("users")}</div>
                <div class="team-card__identity">
                    <h3 class="team-card__name">{team.name.clone()}</h3>
                    <p class="team-card__description">{team.description.clone()}</p>
                    <p class="team-card__department">{team.department.clone()}</p>
                </div>
                <button
                    class="button button--icon button--danger"
                    title="Delete Team"
                    on:click=move |_| on_delete.run(row.clone())
                >
                    {icon("trash")}
                </button>
            </div>

            <div class="team-card__metrics">
                <div class="metric metric--blue">
                    <p class="metric__value">{team.members}</p>
                    <p class="metric__label">"Members"</p>
                </div>
                <div class="metric metric--green">
                    <p class="metric__value">{format_number(Some(team.total_points as f64))}</p>
                    <p class="metric__label">"Points"</p>
                </div>
                <div class="metric metric--purple">
                    <p class="metric__value">{team.active_challenges}</p>
                    <p class="metric__label">"Challenges"</p>
                </div>
            </div>

            <div class="team-card__details">
                <div class="team-card__row"><span>"Captain:"</span><strong>{team.captain.clone()}</strong></div>
                <div class="team-card__row"><span>"Created:"</span><strong>{created}</strong></div>
                <div class="team-card__row">
                    <span>"Engagement:"</span>
                    <strong>{format!("{}%", team.average_engagement)}</strong>
                </div>
                <ProgressBar percent=f64::from(team.average_engagement) color=team.color.clone() />
            </div>

            <div class="team-card__live" title="Computed from the current employee list">
                <span class="team-card__live-label">"Live:"</span>
                <span>{format!("{} listed members", live.member_count)}</span>
                <span>{format!("{}% avg engagement", live.average_engagement)}</span>
                <span>{format!("{} pts", format_number(Some(live.total_points as f64)))}</span>
            </div>

            {(!achievements.is_empty()).then(move || view! {
                <div class="team-card__achievements">
                    {achievements.into_iter().map(|a| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                            {icon("star")}
                            {a}
                        </Badge>
                    }).collect_view()}
                    {(hidden_achievements > 0).then(|| view! {
                        <span class="team-card__more">{format!("+{} more", hidden_achievements)}</span>
                    })}
                </div>
            })}
        </div>
    }
}
