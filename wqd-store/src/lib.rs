//! Dashboard state for the water quality UI.
//!
//! One [`DashboardStore`] owns the scenario filter and the state of every view
//! (sample table, summary cards, clustering panel). Views never fetch on
//! their own: a refresh is an [`Action`] and the store answers with one fetch
//! [`Effect`] per view. The browser app performs effects with spawned tasks;
//! [`Dashboard`] performs them sequentially for tests and native callers.

pub mod capabilities;
mod dashboard;
mod effects;
pub mod store;

pub use capabilities::{Geolocator, LocateFuture, Notifier};
pub use dashboard::Dashboard;
pub use effects::execute;
pub use store::{
    Action, ClusterView, DashboardStore, Effect, SamplesView, SummariesView, Ticket,
    SAVED_MESSAGE,
};
