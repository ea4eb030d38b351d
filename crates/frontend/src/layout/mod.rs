pub mod global_context;
pub mod left;
pub mod toast_service;
pub mod top_header;

use leptos::prelude::*;
use toast_service::ToastHost;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |           content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-main">
                <TopHeader />
                <main class="app-content">
                    {center()}
                </main>
            </div>

            <ToastHost />
        </div>
    }
}
