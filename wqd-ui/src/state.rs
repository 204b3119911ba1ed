//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`,
//! and the injected collaborators with `use_context::<Services>()`.

use crate::browser::{AlertNotifier, BrowserGeolocator};
use dioxus::prelude::*;
use std::rc::Rc;
use wqd_api::{BackendConfig, HttpBackend};
use wqd_samples::SampleForm;
use wqd_store::{execute, Action, DashboardStore, Effect, Geolocator, Notifier};
use wqd_utils::clock::{Clock, SystemClock};

/// Shared reactive state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Filter, view data and in-flight flags
    pub store: Signal<DashboardStore>,
    /// Text of the sample form as typed
    pub form: Signal<SampleForm>,
}

/// Backend and environment capabilities, swappable for tests or other hosts.
#[derive(Clone)]
pub struct Services {
    pub backend: HttpBackend,
    pub clock: Rc<dyn Clock>,
    pub geolocator: Rc<dyn Geolocator>,
    pub notifier: Rc<dyn Notifier>,
}

impl Services {
    /// Browser clock, geolocation and alerts against the given backend.
    pub fn browser(config: BackendConfig) -> Self {
        Self {
            backend: HttpBackend::new(config),
            clock: Rc::new(SystemClock),
            geolocator: Rc::new(BrowserGeolocator),
            notifier: Rc::new(AlertNotifier),
        }
    }
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(DashboardStore::new()),
            form: Signal::new(SampleForm::default()),
        }
    }

    /// Apply an action to the store and perform its effects.
    ///
    /// Requests run as tasks of the current scope and dispatch their
    /// completion when they resolve; notifications are shown immediately.
    pub fn dispatch(self, services: &Services, action: Action) {
        let mut store = self.store;
        let effects = store.write().dispatch(action);
        for effect in effects {
            match effect {
                Effect::Notify(message) => services.notifier.notify(&message),
                request => {
                    let services = services.clone();
                    spawn(async move {
                        if let Some(done) = execute(&services.backend, request).await {
                            self.dispatch(&services, done);
                        }
                    });
                }
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
