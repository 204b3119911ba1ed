//! Shared Dioxus components and browser capabilities for the water quality dashboard.
//!
//! This crate provides:
//! - `browser`: geolocation and blocking alerts via `web-sys`
//! - `state`: reactive `AppState` and the injected `Services`
//! - `components`: the form, table, summary cards, clustering panel and filter

pub mod browser;
pub mod components;
pub mod state;
