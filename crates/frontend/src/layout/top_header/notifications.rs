//! Bell button with a dropdown of the most recent activities.

use crate::shared::clock;
use crate::shared::icons::icon;
use contracts::domain::a004_activity::Activity;
use contracts::seed;
use contracts::shared::formatting::relative_time;
use leptos::prelude::*;

pub const NOTIFICATION_COUNT: usize = 5;

fn recent_activities() -> Vec<Activity> {
    match seed::shared() {
        Ok(data) => data
            .activities
            .iter()
            .take(NOTIFICATION_COUNT)
            .cloned()
            .collect(),
        Err(e) => {
            log::error!("Notifications: seed data unavailable: {:#}", e);
            Vec::new()
        }
    }
}

#[component]
pub fn NotificationsDropdown() -> impl IntoView {
    let items = StoredValue::new(recent_activities());
    let is_open = RwSignal::new(false);
    // everything counts as unread until the panel has been opened once
    let seen = RwSignal::new(false);

    let unread = move || {
        if seen.get() {
            0
        } else {
            items.with_value(|list| list.len())
        }
    };

    let toggle = move |_| {
        is_open.update(|open| *open = !*open);
        seen.set(true);
    };

    view! {
        <div class="notifications-dropdown">
            <button class="top-header__icon-btn" on:click=toggle title="Notifications">
                {icon("bell")}
                <Show when=move || { unread() > 0 }>
                    <span class="notifications-dropdown__badge">{unread}</span>
                </Show>
            </button>

            <Show when=move || is_open.get()>
                <div class="notifications-dropdown__menu">
                    <div class="notifications-dropdown__title">"Notifications"</div>
                    {move || {
                        let list = items.get_value();
                        if list.is_empty() {
                            view! {
                                <div class="notifications-dropdown__empty">"No notifications"</div>
                            }.into_any()
                        } else {
                            let now = clock::now();
                            list.into_iter().map(|activity| {
                                let when = relative_time(Some(&activity.timestamp.to_rfc3339()), now);
                                view! {
                                    <div class="notifications-dropdown__item">
                                        {icon(activity.kind.icon_name())}
                                        <div class="notifications-dropdown__item-text">
                                            <div class="notifications-dropdown__item-title">{activity.title.clone()}</div>
                                            <div class="notifications-dropdown__item-desc">{activity.description.clone()}</div>
                                            <div class="notifications-dropdown__item-time">{when}</div>
                                        </div>
                                    </div>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
