//! Environment capabilities the dashboard depends on.
//!
//! The browser provides geolocation and a blocking alert; tests substitute
//! their own.

use std::future::Future;
use std::pin::Pin;
use wqd_samples::Location;

pub type LocateFuture<'a> = Pin<Box<dyn Future<Output = Option<Location>> + 'a>>;

/// Current device position, when the platform can provide one.
pub trait Geolocator {
    /// Resolves to `None` when positioning is unsupported, denied or fails.
    fn locate(&self) -> LocateFuture<'_>;
}

/// Blocking user-facing message ("Sample saved", backend errors).
pub trait Notifier {
    fn notify(&self, message: &str);
}
