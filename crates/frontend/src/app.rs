use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_location();
    log::info!("Starting with {:?}", config);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(&config));

    provide_context(ToastService::new(config.toast_duration_ms));
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
