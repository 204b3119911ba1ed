use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sampling context a field sample was collected under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Dry,
    Monsoon,
    Upstream,
    Downstream,
    Industrial,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown scenario: {0} (expected one of dry, monsoon, upstream, downstream, industrial)")]
pub struct ParseScenarioError(pub String);

impl Scenario {
    /// Every scenario, in the order the selectors list them.
    pub const ALL: [Scenario; 5] = [
        Scenario::Dry,
        Scenario::Monsoon,
        Scenario::Upstream,
        Scenario::Downstream,
        Scenario::Industrial,
    ];

    /// Wire tag, e.g. `"dry"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Dry => "dry",
            Scenario::Monsoon => "monsoon",
            Scenario::Upstream => "upstream",
            Scenario::Downstream => "downstream",
            Scenario::Industrial => "industrial",
        }
    }

    /// Human-readable label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Dry => "Dry",
            Scenario::Monsoon => "Monsoon",
            Scenario::Upstream => "Upstream",
            Scenario::Downstream => "Downstream",
            Scenario::Industrial => "Industrial",
        }
    }

    /// Parse a filter select value. The empty string means "all scenarios".
    pub fn parse_filter(value: &str) -> Result<Option<Scenario>, ParseScenarioError> {
        if value.is_empty() {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ParseScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| ParseScenarioError(s.to_string()))
    }
}
