//! Backend location.
//!
//! Resolution order: an explicit URL, then the `WQD_BACKEND_URL` variable,
//! then [`DEFAULT_BACKEND_URL`]. The browser app has no process environment,
//! so it reads the variable at compile time ([`BackendConfig::from_build_env`]).

use crate::error::ApiError;
use reqwest::Url;

/// Used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_VAR: &str = "WQD_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
}

impl BackendConfig {
    /// Parse a base URL. A trailing slash is added so relative paths nest under it.
    pub fn new(url: &str) -> Result<Self, ApiError> {
        let trimmed = url.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::InvalidBaseUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }
        Ok(Self { base_url })
    }

    /// Pick the first non-empty candidate, falling back to the default.
    pub fn resolve(explicit: Option<&str>, env_value: Option<&str>) -> Result<Self, ApiError> {
        let url = explicit
            .filter(|s| !s.trim().is_empty())
            .or(env_value.filter(|s| !s.trim().is_empty()))
            .unwrap_or(DEFAULT_BACKEND_URL);
        log::info!("Using backend at {}", url);
        Self::new(url)
    }

    /// Resolve from the runtime process environment.
    pub fn from_env(explicit: Option<&str>) -> Result<Self, ApiError> {
        let env_value = std::env::var(BACKEND_URL_VAR).ok();
        Self::resolve(explicit, env_value.as_deref())
    }

    /// Resolve from `WQD_BACKEND_URL` as it was set when the crate was built.
    pub fn from_build_env() -> Result<Self, ApiError> {
        Self::resolve(None, option_env!("WQD_BACKEND_URL"))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a backend path such as `"samples"`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:8000/").expect("default backend URL is valid"),
        }
    }
}
