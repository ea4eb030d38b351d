//! Top bar: sidebar toggle, title and description of the active page,
//! notifications and the signed-in admin.

pub mod notifications;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::shared::formatting::generate_initials;
use leptos::prelude::*;
use notifications::NotificationsDropdown;

pub const ADMIN_NAME: &str = "Sarah Johnson";
pub const ADMIN_ROLE: &str = "Wellness Admin";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title="Toggle navigation"
                >
                    {icon("menu")}
                </button>
                <div>
                    <h1 class="top-header__title">{move || ctx.active.get().title()}</h1>
                    <div class="top-header__subtitle">{move || ctx.active.get().description()}</div>
                </div>
            </div>

            <div class="top-header__actions">
                <NotificationsDropdown />

                <div class="top-header__user">
                    <div class="top-header__avatar">{generate_initials(ADMIN_NAME)}</div>
                    <div class="top-header__user-text">
                        <span class="top-header__user-name">{ADMIN_NAME}</span>
                        <span class="top-header__user-role">{ADMIN_ROLE}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
