//! Simulated page loading.
//!
//! Every page waits a fixed delay before installing its seed data. A load
//! that finishes after the page was unmounted, or after a newer load was
//! started, is discarded.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// Tracks the mounted state of a page and the most recent load it started
#[derive(Debug, Clone)]
pub struct LoadGuard {
    mounted: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

/// Handle of one started load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadGuard {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Starts a new load, superseding any load still in flight
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.mounted.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    /// Guard that is unmounted together with the current reactive owner
    pub fn for_page() -> Self {
        let guard = Self::new();
        let on_unmount = guard.clone();
        on_cleanup(move || on_unmount.unmount());
        guard
    }
}

/// Waits `delay_ms`, then runs `on_ready` unless the load was superseded
/// or the page is gone.
pub fn spawn_delayed_load<F>(guard: &LoadGuard, delay_ms: u32, page: &'static str, on_ready: F)
where
    F: FnOnce() + 'static,
{
    let ticket = guard.begin();
    let guard = guard.clone();
    log::debug!("{}: loading ({} ms)", page, delay_ms);

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if guard.is_current(ticket) {
            on_ready();
            log::info!("{}: data ready", page);
        } else {
            log::debug!("{}: discarded stale load", page);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_load_wins() {
        let guard = LoadGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_unmount_discards_load() {
        let guard = LoadGuard::new();
        let ticket = guard.begin();
        guard.clone().unmount();
        assert!(!guard.is_current(ticket));
    }
}
