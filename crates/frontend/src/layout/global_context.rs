use crate::routes::Page;
use crate::shared::config::AppConfig;
use crate::shared::storage::{
    get_from_storage, set_to_storage, BrowserStorage, LAST_PAGE_KEY, SIDEBAR_OPEN_KEY,
};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

/// Application-wide UI state: the active page and the sidebar
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
    storage: StoredValue<BrowserStorage>,
}

impl AppGlobalContext {
    pub fn new(config: &AppConfig) -> Self {
        let storage = BrowserStorage::new(config.storage_prefix.clone());
        let sidebar_open = get_from_storage(&storage, SIDEBAR_OPEN_KEY, true);
        Self {
            active: RwSignal::new(Page::Dashboard),
            sidebar_open: RwSignal::new(sidebar_open),
            storage: StoredValue::new(storage),
        }
    }

    /// Picks the initial page from `?active=` (or the last visited page) and
    /// keeps the query string in sync with the active page afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: BTreeMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        let initial = match params.get("active") {
            Some(key) => Page::from_key(key),
            None => {
                let last: String = self
                    .storage
                    .with_value(|s| get_from_storage(s, LAST_PAGE_KEY, String::new()));
                Page::from_key(&last)
            }
        };
        self.active.set(initial);

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            this.storage
                .with_value(|s| set_to_storage(s, LAST_PAGE_KEY, &page.key()));

            // keep the config overrides, replace only `active`
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let mut params: BTreeMap<String, String> =
                serde_qs::from_str(current_search.trim_start_matches('?')).unwrap_or_default();
            params.insert("active".to_string(), page.key().to_string());

            let new_url = format!("?{}", serde_qs::to_string(&params).unwrap_or_default());
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::info!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
        let open = self.sidebar_open.get_untracked();
        self.storage
            .with_value(|s| set_to_storage(s, SIDEBAR_OPEN_KEY, &open));
    }

    /// Persists a UI preference under this app's storage namespace
    pub fn save_preference<T: serde::Serialize>(&self, key: &str, value: &T) -> bool {
        self.storage.with_value(|s| set_to_storage(s, key, value))
    }

    pub fn load_preference<T: serde::de::DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.storage.with_value(|s| get_from_storage(s, key, default))
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
