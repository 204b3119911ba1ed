use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cluster count requested by the dashboard.
pub const DEFAULT_CLUSTER_COUNT: u32 = 3;

/// Body of `POST /cluster`. A `None` scenario clusters across all scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRequest {
    pub scenario: Option<Scenario>,
    pub k: u32,
}

impl ClusterRequest {
    pub fn new(scenario: Option<Scenario>) -> Self {
        Self {
            scenario,
            k: DEFAULT_CLUSTER_COUNT,
        }
    }
}

/// Clustering output. The shape is owned by the backend, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterResult(pub Value);

impl ClusterResult {
    /// Two-space indented JSON, keys in the order the backend sent them.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_for_all_scenarios() {
        let body = serde_json::to_string(&ClusterRequest::new(None)).unwrap();
        assert_eq!(body, r#"{"scenario":null,"k":3}"#);

        let body = serde_json::to_string(&ClusterRequest::new(Some(Scenario::Upstream))).unwrap();
        assert_eq!(body, r#"{"scenario":"upstream","k":3}"#);
    }

    #[test]
    fn test_pretty_prints_result() {
        let raw = r#"{"clusters":[{"label":0,"size":2}],"k":3}"#;
        let result: ClusterResult = serde_json::from_str(raw).unwrap();
        let expected = "{\n  \"clusters\": [\n    {\n      \"label\": 0,\n      \"size\": 2\n    }\n  ],\n  \"k\": 3\n}";
        assert_eq!(result.pretty(), expected);
    }

    #[test]
    fn test_pretty_keeps_backend_key_order() {
        let raw = r#"{"zeta":1,"alpha":2}"#;
        let result: ClusterResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.pretty(), "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}");
    }
}
