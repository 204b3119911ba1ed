/// Error types for backend calls
use thiserror::Error;

/// Shown when the backend rejects a request without a `detail` message.
pub const GENERIC_FAILURE: &str = "Failed";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, TLS or body read failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Backend returned {status}: {}", .detail.as_deref().unwrap_or(GENERIC_FAILURE))]
    Status { status: u16, detail: Option<String> },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid backend URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// Text for the blocking message shown to the user: the backend's
    /// `detail` when it sent one, otherwise [`GENERIC_FAILURE`]. Transport and
    /// decode details only go to the log.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { detail, .. } => {
                detail.clone().unwrap_or_else(|| GENERIC_FAILURE.to_string())
            }
            other => {
                log::warn!("{}", other);
                GENERIC_FAILURE.to_string()
            }
        }
    }
}

/// Pull the `detail` message out of an error body like `{"detail": "..."}`.
///
/// Non-string details (validation error lists) are returned as compact JSON.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
