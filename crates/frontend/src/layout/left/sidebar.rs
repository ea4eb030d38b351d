//! Sidebar: company block, one item per page and the collapse toggle.
//! Collapsed, only the icons stay visible.

use crate::layout::global_context::use_app_context;
use crate::routes::Page;
use crate::shared::icons::icon;
use contracts::domain::a006_company_info::CompanyInfo;
use contracts::seed;
use leptos::prelude::*;

fn company_info() -> Option<CompanyInfo> {
    match seed::shared() {
        Ok(data) => Some(data.company_info.clone()),
        Err(e) => {
            log::error!("Sidebar: seed data unavailable: {:#}", e);
            None
        }
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let is_open = move || ctx.sidebar_open.get();

    let company = company_info().map(|info| {
        let caption = format!("{} · {}", info.plan, info.industry);
        let name = info.name;
        view! {
            <div class="app-sidebar__company">
                <div class="app-sidebar__logo">{info.logo}</div>
                <Show when=is_open>
                    <div class="app-sidebar__company-text">
                        <div class="app-sidebar__company-name">{name.clone()}</div>
                        <div class="app-sidebar__company-caption">{caption.clone()}</div>
                    </div>
                </Show>
            </div>
        }
    });

    view! {
        <div class="app-sidebar__content">
            {company}

            <nav class="app-sidebar__menu">
                {Page::all().into_iter().map(|page| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.get() == page
                            title=page.title()
                            on:click=move |_| ctx.navigate(page)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(page.icon_name())}
                                <Show when=is_open>
                                    <div class="app-sidebar__item-text">
                                        <span>{page.title()}</span>
                                        <span class="app-sidebar__item-caption">{page.menu_caption()}</span>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </nav>

            <button
                class="app-sidebar__toggle"
                on:click=move |_| ctx.toggle_sidebar()
                title=move || if is_open() { "Collapse sidebar" } else { "Expand sidebar" }
            >
                {move || if is_open() { icon("chevron-left") } else { icon("chevron-right") }}
            </button>
        </div>
    }
}
