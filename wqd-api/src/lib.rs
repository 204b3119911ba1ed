//! Typed client for the water quality sample backend.
//!
//! The backend contract is the [`Backend`] trait:
//!
//! | Operation | Request |
//! |---|---|
//! | [`Backend::create_sample`] | `POST /samples` |
//! | [`Backend::list_samples`] | `GET /samples?scenario=<tag>` |
//! | [`Backend::summaries`] | `GET /summaries` |
//! | [`Backend::cluster`] | `POST /cluster` |
//!
//! [`HttpBackend`] implements it over `reqwest`, which compiles both natively
//! (CLI) and to `wasm32-unknown-unknown` (browser `fetch`). Tests substitute
//! their own implementation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use wqd_api::{Backend, BackendConfig, HttpBackend};
//!
//! # async fn demo() -> Result<(), wqd_api::ApiError> {
//! let backend = HttpBackend::new(BackendConfig::new("http://localhost:8000")?);
//! let summaries = backend.summaries().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod http;

pub use config::BackendConfig;
pub use error::ApiError;
pub use http::HttpBackend;

use wqd_samples::{
    ClusterRequest, ClusterResult, NewSample, Sample, SampleList, Scenario, ScenarioSummary,
};

/// Operations the dashboard performs against the sample service.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Persist a new sample; returns the stored record with its `id`.
    async fn create_sample(&self, sample: &NewSample) -> Result<Sample, ApiError>;

    /// List samples, optionally restricted to one scenario.
    async fn list_samples(&self, scenario: Option<Scenario>) -> Result<SampleList, ApiError>;

    /// Per-scenario aggregates.
    async fn summaries(&self) -> Result<Vec<ScenarioSummary>, ApiError>;

    /// Run a clustering pass on the backend.
    async fn cluster(&self, request: &ClusterRequest) -> Result<ClusterResult, ApiError>;
}
