use crate::layout::global_context::use_app_context;
use crate::layout::toast_service::{use_toast, ToastService};
use crate::routes::Page;
use crate::shared::clock;
use crate::shared::components::{LoadingSpinner, ProgressBar, StatCard};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::loader::{spawn_delayed_load, LoadGuard};
use chrono::{DateTime, Utc};
use contracts::dashboards::d400_overview::DashboardStats;
use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_team::Team;
use contracts::domain::a004_activity::Activity;
use contracts::seed;
use contracts::shared::formatting::{format_number, format_percentage, generate_initials, relative_time};
use contracts::shared::palette::engagement_color;
use leptos::prelude::*;
use thaw::*;

fn start_loading(stats: RwSignal<Option<DashboardStats>>, toast: ToastService, guard: &LoadGuard, delay_ms: u32) {
    spawn_delayed_load(guard, delay_ms, "dashboard", move || match seed::shared() {
        Ok(data) => stats.set(Some(DashboardStats::build(data))),
        Err(e) => {
            log::error!("dashboard: seed data unavailable: {:#}", e);
            toast.error("Failed to load dashboard data");
        }
    });
}

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let config = use_context::<AppConfig>().unwrap_or_default();

    let stats = RwSignal::new(None::<DashboardStats>);
    let guard = LoadGuard::for_page();
    start_loading(stats, toast, &guard, config.load_delay_ms);

    let stat = move |read: fn(&DashboardStats) -> String| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(read).unwrap_or_default()))
    };
    let caption = move |read: fn(&DashboardStats) -> String| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(read)))
    };
    let go_to = move |page: Page| Callback::new(move |_: ()| ctx.navigate(page));

    view! {
        <Show
            when=move || stats.with(Option::is_some)
            fallback=|| view! { <LoadingSpinner message="Loading dashboard..." /> }
        >
            <div class="page">
                <div class="stat-grid">
                    <StatCard
                        label="Total Employees"
                        icon_name="users"
                        color="#3B82F6"
                        value=stat(|s| format_number(Some(f64::from(s.total_employees))))
                        subtitle=caption(|s| format!("{} active", s.active_employees))
                        on_click=go_to(Page::Employees)
                    />
                    <StatCard
                        label="Active Teams"
                        icon_name="trophy"
                        color="#10B981"
                        value=stat(|s| s.total_teams.to_string())
                        on_click=go_to(Page::Teams)
                    />
                    <StatCard
                        label="Active Challenges"
                        icon_name="target"
                        color="#8B5CF6"
                        value=stat(|s| s.active_challenges.to_string())
                        subtitle=caption(|s| format!("{} completed", s.completed_challenges))
                        on_click=go_to(Page::Challenges)
                    />
                    <StatCard
                        label="Engagement Rate"
                        icon_name="trending-up"
                        color="#F59E0B"
                        value=stat(|s| format_percentage(Some(f64::from(s.overall_engagement)), 0))
                        subtitle=caption(|s| format!("{}% avg challenge completion", s.avg_challenge_completion))
                        on_click=go_to(Page::Reports)
                    />
                </div>

                <div class="dashboard-grid">
                    <section class="panel">
                        <div class="panel__header">
                            <h3 class="panel__title">"Top Performers"</h3>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate(Page::Employees)>
                                "View all"
                            </Button>
                        </div>
                        <div class="panel__body">
                            {move || stats.with(|s| {
                                s.as_ref()
                                    .map(|s| s.top_performers.clone())
                                    .unwrap_or_default()
                                    .into_iter()
                                    .zip(1..)
                                    .map(|(employee, rank)| view! { <PerformerRow rank=rank employee=employee /> })
                                    .collect_view()
                            })}
                        </div>
                    </section>

                    <section class="panel">
                        <div class="panel__header">
                            <h3 class="panel__title">"Top Teams"</h3>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate(Page::Teams)>
                                "View all"
                            </Button>
                        </div>
                        <div class="panel__body">
                            {move || stats.with(|s| {
                                s.as_ref()
                                    .map(|s| s.top_teams.clone())
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|team| view! { <TopTeamRow team=team /> })
                                    .collect_view()
                            })}
                        </div>
                    </section>
                </div>

                <div class="dashboard-grid">
                    <section class="panel">
                        <div class="panel__header">
                            <h3 class="panel__title">"Recent Activity"</h3>
                        </div>
                        <div class="panel__body">
                            {move || {
                                let now = clock::now();
                                stats.with(|s| {
                                    s.as_ref()
                                        .map(|s| s.recent_activities.clone())
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|activity| view! { <ActivityRow activity=activity now=now /> })
                                        .collect_view()
                                })
                            }}
                        </div>
                    </section>

                    <section class="panel">
                        <div class="panel__header">
                            <h3 class="panel__title">"Quick Actions"</h3>
                        </div>
                        <div class="quick-actions">
                            {Page::all()
                                .into_iter()
                                .filter(|page| *page != Page::Dashboard)
                                .map(|page| view! {
                                    <button class="quick-actions__item" on:click=move |_| ctx.navigate(page)>
                                        {icon(page.icon_name())}
                                        <span class="quick-actions__title">{page.title()}</span>
                                        <span class="quick-actions__caption">{page.menu_caption()}</span>
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </section>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn PerformerRow(rank: usize, employee: Employee) -> impl IntoView {
    let score = u32::from(employee.engagement_score);
    let color = engagement_color(score).to_string();
    let avatar_style = format!("background-color: {};", color);
    let details = format!("{} • {}", employee.department, employee.position);
    let points = format!("{} pts", format_number(Some(f64::from(employee.total_points))));

    view! {
        <div class="ranked-row">
            <span class="ranked-row__rank">{format!("#{}", rank)}</span>
            <div class="avatar" style=avatar_style>{generate_initials(&employee.name)}</div>
            <div class="ranked-row__identity">
                <p class="ranked-row__name">{employee.name.clone()}</p>
                <p class="ranked-row__details">{details}</p>
            </div>
            <div class="ranked-row__score">
                <p class="ranked-row__value">{format!("{}%", score)}</p>
                <p class="ranked-row__details">{points}</p>
                <ProgressBar percent=f64::from(score) color=color />
            </div>
        </div>
    }
}

#[component]
fn TopTeamRow(team: Team) -> impl IntoView {
    let badge_style = format!("background-color: {};", team.color);
    let details = format!("{} members • {}", team.members, team.department);
    let points = format!("{} pts", format_number(Some(team.total_points as f64)));

    view! {
        <div class="ranked-row">
            <div class="team-card__badge" style=badge_style>{icon("users")}</div>
            <div class="ranked-row__identity">
                <p class="ranked-row__name">{team.name.clone()}</p>
                <p class="ranked-row__details">{details}</p>
            </div>
            <div class="ranked-row__score">
                <p class="ranked-row__value">{format!("{}%", team.average_engagement)}</p>
                <p class="ranked-row__details">{points}</p>
            </div>
        </div>
    }
}

#[component]
fn ActivityRow(activity: Activity, now: DateTime<Utc>) -> impl IntoView {
    let timestamp = activity.timestamp.to_rfc3339();
    let when = relative_time(Some(&timestamp), now);
    let subject = activity.subject().map(str::to_string);

    view! {
        <div class="activity-row">
            <span class="activity-row__icon" title=activity.kind.display_name()>
                {icon(activity.kind.icon_name())}
            </span>
            <div class="activity-row__content">
                <p class="activity-row__title">{activity.title.clone()}</p>
                <p class="activity-row__description">{activity.description.clone()}</p>
                {subject.map(|name| view! { <p class="activity-row__subject">{name}</p> })}
            </div>
            <div class="activity-row__meta">
                <span class="activity-row__time">{when}</span>
                {activity.points.map(|points| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                        {format!("+{} pts", points)}
                    </Badge>
                })}
            </div>
        </div>
    }
}
