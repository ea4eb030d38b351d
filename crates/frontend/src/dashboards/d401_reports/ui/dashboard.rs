use super::state::{create_state, export_filename, format_metric_value, ReportsState};
use crate::layout::toast_service::{use_toast, ToastService};
use crate::shared::components::{LoadingSpinner, PageHeader, ProgressBar, StatCard};
use crate::shared::config::AppConfig;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::FilterSelect;
use crate::shared::loader::{spawn_delayed_load, LoadGuard};
use contracts::dashboards::d401_reports::dto::MetricBar;
use contracts::dashboards::d401_reports::{DateRange, ReportMetric, ReportsAnalytics};
use contracts::enums::ActivityType;
use contracts::seed;
use contracts::shared::formatting::{format_number, format_percentage};
use contracts::shared::palette::engagement_color;
use leptos::prelude::*;
use thaw::*;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Drops the current figures and rebuilds them for `state.range` after the
/// simulated delay. A newer call supersedes an older one.
fn start_loading(state: ReportsState, toast: ToastService, guard: &LoadGuard, delay_ms: u32) {
    let range = state.range.get_untracked();
    state.analytics.set(None);
    spawn_delayed_load(guard, delay_ms, "reports", move || match seed::shared() {
        Ok(data) => state.analytics.set(Some(ReportsAnalytics::build(data, range))),
        Err(e) => {
            log::error!("reports: seed data unavailable: {:#}", e);
            toast.error("Failed to load reports");
        }
    });
}

#[component]
#[allow(non_snake_case)]
pub fn ReportsDashboard() -> impl IntoView {
    let toast = use_toast();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let delay_ms = config.load_delay_ms;

    let state = create_state();
    let guard = LoadGuard::for_page();
    start_loading(state, toast, &guard, delay_ms);

    let on_range = Callback::new(move |code: String| {
        let Some(range) = DateRange::from_code(&code) else {
            log::warn!("reports: unknown date range {}", code);
            return;
        };
        if range == state.range.get_untracked() {
            return;
        }
        log::info!("reports: range {}", range.display_name());
        state.range.set(range);
        start_loading(state, toast, &guard, delay_ms);
    });
    let on_metric = Callback::new(move |code: String| match ReportMetric::from_code(&code) {
        Some(metric) => state.metric.set(metric),
        None => log::warn!("reports: unknown metric {}", code),
    });

    let range_code = Signal::derive(move || state.range.get().code().to_string());
    let metric_code = Signal::derive(move || state.metric.get().code().to_string());
    let bars = Memo::new(move |_| {
        let metric = state.metric.get();
        state
            .analytics
            .with(|a| a.as_ref().map(|a| a.department_bars(metric)).unwrap_or_default())
    });

    let handle_export = move || {
        let filename = export_filename(state.range.get_untracked(), state.metric.get_untracked());
        if let Err(e) = bars.with_untracked(|rows| export_to_csv(rows, &filename)) {
            toast.error(e);
            return;
        }
        toast.success("Report exported successfully!");
    };

    let figure = move |read: fn(&ReportsAnalytics) -> String| {
        Signal::derive(move || state.analytics.with(|a| a.as_ref().map(read).unwrap_or_default()))
    };

    view! {
        <div class="page">
            <PageHeader title="Reports & Analytics" subtitle=Signal::derive(move || {
                Some(format!("Showing {}", state.range.get().display_name().to_lowercase()))
            })>
                <FilterSelect
                    value=range_code
                    options=DateRange::all()
                        .into_iter()
                        .map(|r| (r.code().to_string(), r.display_name().to_string()))
                        .collect()
                    on_change=on_range
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || state.analytics.with(Option::is_none))
                    on_click=move |_| handle_export()
                >
                    {icon("download")}
                    " Export"
                </Button>
            </PageHeader>

            <Show
                when=move || state.analytics.with(Option::is_some)
                fallback=|| view! { <LoadingSpinner message="Loading reports..." /> }
            >
                <div class="stat-grid">
                    <StatCard
                        label="Total Employees"
                        icon_name="users"
                        color="#3B82F6"
                        value=figure(|a| format_number(Some(f64::from(a.overview.total_employees))))
                    />
                    <StatCard
                        label="Active Users"
                        icon_name="activity"
                        color="#10B981"
                        value=figure(|a| format_number(Some(f64::from(a.overview.active_users))))
                    />
                    <StatCard
                        label="Engagement"
                        icon_name="trending-up"
                        color="#8B5CF6"
                        value=figure(|a| format_percentage(Some(f64::from(a.overview.overall_engagement)), 0))
                    />
                    <StatCard
                        label="Total Points"
                        icon_name="award"
                        color="#F59E0B"
                        value=figure(|a| format_number(Some(a.overview.total_points as f64)))
                    />
                    <StatCard
                        label="Goals Completed"
                        icon_name="check-circle"
                        color="#06B6D4"
                        value=figure(|a| a.overview.goals_completed.to_string())
                    />
                    <StatCard
                        label="Active Challenges"
                        icon_name="target"
                        color="#EF4444"
                        value=figure(|a| a.overview.active_challenges.to_string())
                    />
                </div>

                <div class="dashboard-grid">
                    <section class="panel">
                        <div class="panel__header">
                            <h3 class="panel__title">"Department Breakdown"</h3>
                            <FilterSelect
                                value=metric_code
                                options=ReportMetric::all()
                                    .into_iter()
                                    .map(|m| (m.code().to_string(), m.display_name().to_string()))
                                    .collect()
                                on_change=on_metric
                            />
                        </div>
                        <div class="panel__body">
                            {move || {
                                let metric = state.metric.get();
                                bars.get()
                                    .into_iter()
                                    .map(|bar| view! { <DepartmentBar bar=bar metric=metric /> })
                                    .collect_view()
                            }}
                        </div>
                    </section>

                    <section class="panel">
                        <div class="panel__header">
                            <h3 class="panel__title">"Engagement Trends"</h3>
                        </div>
                        <div class="panel__body">
                            <h4 class="panel__subtitle">"Daily"</h4>
                            {move || state.analytics.with(|a| {
                                let daily = a.as_ref().map(|a| a.engagement.daily.clone()).unwrap_or_default();
                                view! { <TrendSeries labels=WEEKDAYS.iter().map(|d| d.to_string()).collect() values=daily /> }
                            })}
                            <h4 class="panel__subtitle">"Weekly"</h4>
                            {move || state.analytics.with(|a| {
                                let weekly = a.as_ref().map(|a| a.engagement.weekly.clone()).unwrap_or_default();
                                let labels = (1..=weekly.len()).map(|w| format!("W{}", w)).collect();
                                view! { <TrendSeries labels=labels values=weekly /> }
                            })}
                        </div>
                    </section>
                </div>

                <div class="dashboard-grid">
                    <section class="panel">
                        <div class="panel__header">
                            <h3 class="panel__title">"Wellness Metrics"</h3>
                        </div>
                        <div class="panel__body metric-list">
                            <MetricLine label="Health Score" value=figure(|a| format!("{}/10", a.wellness.health_score)) />
                            <MetricLine label="Average Daily Steps" value=figure(|a| format_number(Some(f64::from(a.wellness.steps_average)))) />
                            <MetricLine label="Sleep Quality" value=figure(|a| format!("{}%", a.wellness.sleep_quality)) />
                            <MetricLine label="Stress Level" value=figure(|a| format!("{}/10", a.wellness.stress_level)) />
                            <MetricLine label="Work-Life Balance" value=figure(|a| format!("{}/10", a.wellness.work_life_balance)) />
                        </div>
                    </section>

                    <section class="panel">
                        <div class="panel__header">
                            <h3 class="panel__title">"Challenges"</h3>
                        </div>
                        <div class="panel__body metric-list">
                            <MetricLine label="Active" value=figure(|a| a.challenges.active.to_string()) />
                            <MetricLine label="Completed" value=figure(|a| a.challenges.completed.to_string()) />
                            <MetricLine label="Average Completion" value=figure(|a| format!("{}%", a.challenges.avg_completion)) />
                            <MetricLine label="Total Participants" value=figure(|a| format_number(Some(a.challenges.total_participants as f64))) />
                        </div>
                    </section>

                    <section class="panel">
                        <div class="panel__header">
                            <h3 class="panel__title">"Teams"</h3>
                        </div>
                        <div class="panel__body metric-list">
                            <MetricLine label="Total Teams" value=figure(|a| a.teams.total.to_string()) />
                            <MetricLine label="Average Size" value=figure(|a| format!("{} members", a.teams.avg_size)) />
                            <MetricLine label="Collaboration" value=figure(|a| format!("{}%", a.teams.collaboration)) />
                            {move || state.analytics.with(|a| {
                                a.as_ref()
                                    .map(|a| a.teams.top_performing.clone())
                                    .unwrap_or_default()
                                    .into_iter()
                                    .zip(1..)
                                    .map(|(team, rank)| {
                                        let dot = format!("background-color: {};", team.color);
                                        view! {
                                            <div class="ranked-row">
                                                <span class="ranked-row__rank">{format!("#{}", rank)}</span>
                                                <span class="color-dot" style=dot></span>
                                                <span class="ranked-row__name">{team.name.clone()}</span>
                                                <span class="ranked-row__value">{format!("{}%", team.average_engagement)}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })}
                        </div>
                    </section>
                </div>

                <section class="panel">
                    <div class="panel__header">
                        <h3 class="panel__title">"Activity Breakdown"</h3>
                    </div>
                    <div class="activity-counts">
                        {ActivityType::all()
                            .into_iter()
                            .map(|kind| view! {
                                <div class="activity-counts__item">
                                    <span class="activity-row__icon">{icon(kind.icon_name())}</span>
                                    <span class="activity-counts__label">{kind.display_name()}</span>
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                        {move || state.analytics.with(|a| {
                                            a.as_ref().map(|a| a.activity_count(kind)).unwrap_or(0)
                                        })}
                                    </Badge>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn DepartmentBar(bar: MetricBar, metric: ReportMetric) -> impl IntoView {
    let value = format_metric_value(metric, bar.value);
    view! {
        <div class="bar-row">
            <div class="bar-row__header">
                <span class="bar-row__label">{bar.label.clone()}</span>
                <span class="bar-row__value">{value}</span>
            </div>
            <ProgressBar percent=bar.share color=bar.color.clone() />
        </div>
    }
}

/// Column chart of percentage values, one labelled column per entry
#[component]
fn TrendSeries(labels: Vec<String>, values: Vec<u32>) -> impl IntoView {
    view! {
        <div class="trend-series">
            {labels
                .into_iter()
                .zip(values)
                .map(|(label, value)| {
                    let style = format!(
                        "height: {}%; background-color: {};",
                        value.min(100),
                        engagement_color(value)
                    );
                    let title = format!("{}: {}%", label, value);
                    view! {
                        <div class="trend-series__column" title=title>
                            <div class="trend-series__bar" style=style></div>
                            <span class="trend-series__label">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MetricLine(#[prop(into)] label: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="metric-line">
            <span class="metric-line__label">{label}</span>
            <strong class="metric-line__value">{move || value.get()}</strong>
        </div>
    }
}
