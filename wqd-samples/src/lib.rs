//! Core types for water quality field samples.
//!
//! - `scenario`: the sampling-context tag shared by every record
//! - `sample`: the sample payload sent to the backend and the stored record it returns
//! - `summary`: backend-computed per-scenario aggregates and their card formatting
//! - `cluster`: clustering request and the opaque result document
//! - `form`: raw form text to typed sample conversion
//! - `display`: table row formatting for listed samples

pub mod cluster;
pub mod display;
pub mod form;
pub mod sample;
pub mod scenario;
pub mod summary;

pub use cluster::{ClusterRequest, ClusterResult, DEFAULT_CLUSTER_COUNT};
pub use display::SampleRow;
pub use form::{FormError, FormField, SampleForm};
pub use sample::{Location, MetalsMap, NewSample, Sample, SampleId, SampleList};
pub use scenario::Scenario;
pub use summary::{ScenarioSummary, SummaryCard};
