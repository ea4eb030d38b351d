pub mod state;

use self::state::{
    add_challenge, count_caption, create_state, delete_challenge, status_counts, toggle_pause,
    ChallengeListState, FILTER_CATEGORY, FILTER_STATUS, SORT_PRESETS,
};
use crate::layout::toast_service::{use_toast, ToastService};
use crate::shared::clock;
use crate::shared::components::{FormField, FormSelect, LoadingSpinner, PageHeader, ProgressBar, StatCard};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_options, indexed, FilterSelect, SearchInput};
use crate::shared::loader::{spawn_delayed_load, LoadGuard};
use crate::shared::modal::{ConfirmModal, Modal, SuccessModal};
use contracts::domain::a003_challenge::{ChallengeId, ChallengeRow, NewChallenge};
use contracts::enums::{ChallengeDifficulty, ChallengeStatus};
use contracts::seed;
use contracts::shared::formatting::{format_date, format_number, DateStyle};
use contracts::shared::list_view::FILTER_ALL;
use contracts::shared::palette::status_color;
use leptos::prelude::*;
use thaw::*;

fn start_loading(state: ChallengeListState, toast: ToastService, guard: &LoadGuard, delay_ms: u32) {
    spawn_delayed_load(guard, delay_ms, "challenges", move || match seed::shared() {
        Ok(data) => {
            state.categories.set_value(data.wellness_categories.clone());
            let now = clock::now();
            let rows = data
                .challenges
                .iter()
                .cloned()
                .map(|challenge| ChallengeRow::new(challenge, now))
                .collect();
            state.list.update(|list| list.finish_loading(rows));
        }
        Err(e) => {
            log::error!("challenges: seed data unavailable: {:#}", e);
            state.list.update(|list| list.finish_loading(Vec::new()));
            toast.error("Failed to load challenges");
        }
    });
}

fn status_badge_color(status: ChallengeStatus) -> BadgeColor {
    match status {
        ChallengeStatus::Active => BadgeColor::Success,
        ChallengeStatus::Completed => BadgeColor::Informative,
        ChallengeStatus::Upcoming => BadgeColor::Brand,
        ChallengeStatus::Paused => BadgeColor::Warning,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ChallengeList() -> impl IntoView {
    let toast = use_toast();
    let config = use_context::<AppConfig>().unwrap_or_default();

    let state = create_state();
    let guard = LoadGuard::for_page();
    start_loading(state, toast, &guard, config.load_delay_ms);

    let is_loading = Signal::derive(move || state.list.with(|l| l.is_loading()));
    let search = Signal::derive(move || state.list.with(|l| l.search_query().to_string()));
    let category_filter = Signal::derive(move || {
        state
            .list
            .with(|l| l.filter(FILTER_CATEGORY).unwrap_or(FILTER_ALL).to_string())
    });
    let status_filter = Signal::derive(move || {
        state
            .list
            .with(|l| l.filter(FILTER_STATUS).unwrap_or(FILTER_ALL).to_string())
    });
    let sort_preset = Signal::derive(move || state.list.with(|l| l.sort_preset()));
    let counts = Memo::new(move |_| state.list.with(|l| status_counts(l.items())));
    let total = Memo::new(move |_| state.list.with(|l| l.items().len()));
    let visible = move || state.list.with(|l| indexed(l.visible()));
    let has_visible = move || state.list.with(|l| !l.visible().is_empty());

    let category_names = move || -> Vec<String> {
        state
            .categories
            .with_value(|list| list.iter().map(|c| c.name.clone()).collect())
    };

    let on_search = Callback::new(move |q: String| state.list.update(|l| l.set_search_query(q)));
    let on_category = Callback::new(move |v: String| {
        state.list.update(|l| l.set_filter(FILTER_CATEGORY, v))
    });
    let on_status =
        Callback::new(move |v: String| state.list.update(|l| l.set_filter(FILTER_STATUS, v)));
    let on_sort_preset = Callback::new(move |preset: String| {
        state.list.update(|l| {
            if !l.apply_sort_preset(&preset) {
                log::warn!("challenges: unknown sort preset {}", preset);
            }
        })
    });

    let handle_create = move || {
        let form = state.form.get_untracked();
        let mut outcome = None;
        state.list.update(|l| {
            outcome = Some(
                state
                    .categories
                    .with_value(|categories| add_challenge(l, form, categories, clock::now())),
            );
        });
        match outcome {
            Some(Ok(row)) => {
                log::info!(
                    "challenges: created {} (id {}, {})",
                    row.challenge.title,
                    row.id(),
                    row.status().code()
                );
                state.form.set(NewChallenge::default());
                state.show_create.set(false);
                state.show_success.set(true);
                toast.success("Challenge created successfully!");
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
        state.list.update(|l| removed = delete_challenge(l, row.id()));
        state.pending_delete.set(None);
        if removed {
            log::info!("challenges: deleted {} (id {})", row.challenge.title, row.id());
            toast.success("Challenge deleted successfully!");
        }
    };

    let on_toggle = Callback::new(move |id: ChallengeId| {
        let mut changed = None;
        state.list.update(|l| changed = toggle_pause(l, id));
        match changed {
            Some(status) => {
                log::info!("challenges: {} is now {}", id, status.code());
                toast.success("Challenge status updated!");
            }
            None => log::debug!("challenges: pause toggle ignored for {}", id),
        }
    });
    let ask_delete = Callback::new(move |row: ChallengeRow| state.pending_delete.set(Some(row)));

    let status_options = std::iter::once((FILTER_ALL.to_string(), "All Status".to_string()))
        .chain(
            ChallengeStatus::all()
                .into_iter()
                .map(|s| (s.code().to_string(), s.display_name().to_string())),
        )
        .collect::<Vec<_>>();
    let status_options = StoredValue::new(status_options);

    view! {
        <div class="page">
            <PageHeader
                title="Wellness Challenges"
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
                    " Create Challenge"
                </Button>
            </PageHeader>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <LoadingSpinner message="Loading challenges..." /> }
            >
                <div class="stat-grid">
                    <StatCard
                        label="Total Challenges"
                        icon_name="target"
                        color="#3B82F6"
                        value=Signal::derive(move || total.get().to_string())
                    />
                    <StatCard
                        label="Active"
                        icon_name="activity"
                        color="#10B981"
                        value=Signal::derive(move || counts.get().active.to_string())
                        subtitle=Signal::derive(move || {
                            let paused = counts.get().paused;
                            (paused > 0).then(|| format!("{} paused", paused))
                        })
                    />
                    <StatCard
                        label="Completed"
                        icon_name="check-circle"
                        color="#8B5CF6"
                        value=Signal::derive(move || counts.get().completed.to_string())
                    />
                    <StatCard
                        label="Upcoming"
                        icon_name="calendar"
                        color="#F59E0B"
                        value=Signal::derive(move || counts.get().upcoming.to_string())
                    />
                </div>

                <div class="filter-panel">
                    <SearchInput value=search on_change=on_search placeholder="Search challenges..." />
                    <FilterSelect
                        value=category_filter
                        options=filter_options(
                            "All Categories",
                            &category_names().iter().map(String::as_str).collect::<Vec<_>>(),
                        )
                        on_change=on_category
                    />
                    <FilterSelect value=status_filter options=status_options.get_value() on_change=on_status />
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
                            <span class="empty-state__icon">{icon("target")}</span>
                            <h3 class="empty-state__title">"No challenges found"</h3>
                            <p class="empty-state__text">
                                {move || if total.get() == 0 {
                                    "Create your first wellness challenge to engage your team."
                                } else {
                                    "Try adjusting your search or filter criteria."
                                }}
                            </p>
                        </div>
                    }
                >
                    <div class="card-grid">
                        // status is part of the key so a pause toggle re-renders the card
                        <For
                            each=visible
                            key=|(i, row)| (*i, row.id(), row.status())
                            children=move |(_, row)| view! {
                                <ChallengeCard row=row on_toggle=on_toggle on_delete=ask_delete />
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || state.show_create.get()>
                <Modal
                    title="Create New Challenge"
                    on_close=Callback::new(move |_| state.show_create.set(false))
                    footer=move || view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| state.show_create.set(false)>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !state.form.with(NewChallenge::is_complete))
                            on_click=move |_| handle_create()
                        >
                            "Create Challenge"
                        </Button>
                    }
                >
                    <div class="form">
                        <FormField
                            label="Challenge Title"
                            required=true
                            placeholder="Enter challenge title"
                            value=Signal::derive(move || state.form.with(|f| f.title.clone()))
                            on_input=Callback::new(move |v| state.form.update(|f| f.title = v))
                        />
                        <FormField
                            label="Description"
                            required=true
                            placeholder="What should participants do?"
                            value=Signal::derive(move || state.form.with(|f| f.description.clone()))
                            on_input=Callback::new(move |v| state.form.update(|f| f.description = v))
                        />
                        <FormSelect
                            label="Category"
                            prompt="Select Category"
                            options=category_names()
                            value=Signal::derive(move || state.form.with(|f| f.category.clone()))
                            on_change=Callback::new(move |v| state.form.update(|f| f.category = v))
                        />
                        <div class="form__row">
                            <FormField
                                label="Start Date"
                                required=true
                                input_type="date"
                                value=Signal::derive(move || state.form.with(|f| f.start_date.clone()))
                                on_input=Callback::new(move |v| state.form.update(|f| f.start_date = v))
                            />
                            <FormField
                                label="End Date"
                                required=true
                                input_type="date"
                                value=Signal::derive(move || state.form.with(|f| f.end_date.clone()))
                                on_input=Callback::new(move |v| state.form.update(|f| f.end_date = v))
                            />
                        </div>
                        <div class="form__row">
                            <FormField
                                label="Points"
                                input_type="number"
                                value=Signal::derive(move || state.form.with(|f| f.points.to_string()))
                                on_input=Callback::new(move |v: String| {
                                    state.form.update(|f| f.points = v.trim().parse().unwrap_or(0))
                                })
                            />
                            <FormSelect
                                label="Difficulty"
                                prompt="Select Difficulty"
                                options=ChallengeDifficulty::all().iter().map(|d| d.code().to_string()).collect()
                                value=Signal::derive(move || state.form.with(|f| f.difficulty.code().to_string()))
                                on_change=Callback::new(move |v: String| {
                                    if let Some(difficulty) = ChallengeDifficulty::from_code(&v) {
                                        state.form.update(|f| f.difficulty = difficulty);
                                    }
                                })
                            />
                        </div>
                    </div>
                </Modal>
            </Show>

            {move || state.pending_delete.get().map(|row| view! {
                <ConfirmModal
                    title="Delete Challenge"
                    message=format!(
                        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                        row.challenge.title
                    )
                    on_confirm=Callback::new(move |_| handle_delete())
                    on_cancel=Callback::new(move |_| state.pending_delete.set(None))
                />
            })}

            <Show when=move || state.show_success.get()>
                <SuccessModal
                    title="Challenge Created Successfully!"
                    message="Your new wellness challenge is live. Participants can join it right away."
                    on_close=Callback::new(move |_| state.show_success.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn ChallengeCard(
    row: ChallengeRow,
    on_toggle: Callback<ChallengeId>,
    on_delete: Callback<ChallengeRow>,
) -> impl IntoView {
    let id = row.id();
    let status = row.status();
    let challenge = row.challenge.clone();
    let border = format!("border-top-color: {};", challenge.color);
    let dates = format!(
        "{} - {}",
        format_date(Some(&challenge.start_date.to_string()), DateStyle::Relative),
        format_date(Some(&challenge.end_date.to_string()), DateStyle::Short),
    );
    let progress = f64::from(row.display_progress());
    let progress_label = format!("{}%", row.display_progress());
    let days_left = row.visible_days_remaining();
    let can_toggle = matches!(status, ChallengeStatus::Active | ChallengeStatus::Paused);

    view! {
        <div class="challenge-card" style=border>
            <div class="challenge-card__header">
                <div>
                    <h3 class="challenge-card__title">{challenge.title.clone()}</h3>
                    <p class="challenge-card__category">{challenge.category.clone()}</p>
                </div>
                <Badge appearance=BadgeAppearance::Tint color=status_badge_color(status)>
                    <span style=format!("color: {};", status_color(status.code()))>{status.display_name()}</span>
                </Badge>
            </div>

            <p class="challenge-card__description">{challenge.description.clone()}</p>

            <div class="challenge-card__meta">
                <span>{icon("calendar")}{dates}</span>
                <span>{icon("users")}{format!("{} participants", format_number(Some(f64::from(challenge.participants))))}</span>
                <span>{icon("award")}{format!("{} pts", challenge.points)}</span>
                <span>{icon("zap")}{challenge.difficulty.code()}</span>
            </div>

            <div class="challenge-card__progress">
                <div class="challenge-card__row">
                    <span>"Progress"</span>
                    <strong>{progress_label}</strong>
                </div>
                <ProgressBar percent=progress color=challenge.color.clone() />
                {days_left.map(|days| view! {
                    <p class="challenge-card__days">{icon("clock")}{format!("{} days remaining", days)}</p>
                })}
            </div>

            <div class="challenge-card__actions">
                {can_toggle.then(|| {
                    let (label, icon_name) = if status == ChallengeStatus::Paused {
                        ("Resume", "play")
                    } else {
                        ("Pause", "pause")
                    };
                    view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_toggle.run(id)>
                            {icon(icon_name)}
                            {format!(" {}", label)}
                        </Button>
                    }
                })}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_delete.run(row.clone())>
                    {icon("trash")}
                    " Delete"
                </Button>
            </div>
        </div>
    }
}
