use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::dashboards::d401_reports::ui::ReportsDashboard;
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::domain::a002_team::ui::list::TeamList;
use crate::domain::a003_challenge::ui::list::ChallengeList;
use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::routes::Page;
use leptos::prelude::*;

/// Maps a page to its view. Each call mounts a fresh page, so switching
/// away drops the page state and cancels its pending load.
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Employees => view! { <EmployeeList /> }.into_any(),
        Page::Teams => view! { <TeamList /> }.into_any(),
        Page::Challenges => view! { <ChallengeList /> }.into_any(),
        Page::Reports => view! { <ReportsDashboard /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <div class="app-page">
                        {move || render_page(ctx.active.get())}
                    </div>
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
