//! Browser implementations of the dashboard capabilities.
//!
//! Geolocation goes through `navigator.geolocation.getCurrentPosition`, wrapped
//! in a `Promise` so it can be awaited. Notifications use `window.alert`, which
//! blocks until the user dismisses it.

use js_sys::{Function, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::GeolocationPosition;
use wqd_samples::Location;
use wqd_store::{Geolocator, LocateFuture, Notifier};

/// `navigator.geolocation`, when the browser offers it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeolocator;

impl Geolocator for BrowserGeolocator {
    fn locate(&self) -> LocateFuture<'_> {
        Box::pin(current_position())
    }
}

async fn current_position() -> Option<Location> {
    let geolocation = web_sys::window()?.navigator().geolocation().ok()?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position = match JsFuture::from(promise).await {
        Ok(position) => position,
        Err(e) => {
            log::warn!("Geolocation unavailable: {:?}", e);
            return None;
        }
    };
    let position: GeolocationPosition = position.dyn_into().ok()?;
    let coords = position.coords();
    Some(Location {
        lat: coords.latitude(),
        lon: coords.longitude(),
    })
}

/// `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window()
            .map(|window| window.alert_with_message(message).is_ok())
            .unwrap_or(false);
        if !shown {
            log::warn!("Could not show alert: {}", message);
        }
    }
}
