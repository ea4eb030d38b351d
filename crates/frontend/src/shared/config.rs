//! Runtime settings of the dashboard.
//!
//! Defaults can be overridden from the page query string, e.g. `?delay=0&toast=5000`.

use serde::Deserialize;

pub const DEFAULT_LOAD_DELAY_MS: u32 = 1000;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
pub const DEFAULT_STORAGE_PREFIX: &str = "wellness";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated loading time of every page
    pub load_delay_ms: u32,
    pub toast_duration_ms: u32,
    /// Namespace for keys written to browser storage
    pub storage_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    delay: Option<u32>,
    toast: Option<u32>,
    prefix: Option<String>,
}

impl AppConfig {
    /// Defaults with the overrides found in `search` (with or without the leading `?`).
    /// Unknown parameters such as `active` are ignored; a malformed query keeps the defaults.
    pub fn from_query(search: &str) -> Self {
        let overrides: QueryOverrides =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|e| {
                log::warn!("Ignoring config overrides in query string: {}", e);
                QueryOverrides::default()
            });

        let defaults = Self::default();
        Self {
            load_delay_ms: overrides.delay.unwrap_or(defaults.load_delay_ms),
            toast_duration_ms: overrides.toast.unwrap_or(defaults.toast_duration_ms),
            storage_prefix: overrides
                .prefix
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.storage_prefix),
        }
    }

    /// Reads the overrides from the current page URL
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_query("");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.load_delay_ms, 1000);
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_query("?active=teams&delay=0&toast=5000");
        assert_eq!(config.load_delay_ms, 0);
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.storage_prefix, "wellness");
    }

    #[test]
    fn test_malformed_keeps_defaults() {
        let config = AppConfig::from_query("delay=soon");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_blank_prefix_ignored() {
        assert_eq!(AppConfig::from_query("prefix=demo").storage_prefix, "demo");
        assert_eq!(AppConfig::from_query("prefix=").storage_prefix, "wellness");
    }
}
