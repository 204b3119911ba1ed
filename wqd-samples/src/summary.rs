use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Per-scenario aggregates computed by the backend (`GET /summaries`).
///
/// An average is `None` when no sample in the scenario contributed to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub scenario: Scenario,
    pub count: u64,
    #[serde(default)]
    pub avg_ph: Option<f64>,
    #[serde(default)]
    pub avg_do: Option<f64>,
    #[serde(default)]
    pub avg_turbidity: Option<f64>,
}

/// Display text for one summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub scenario: Scenario,
    pub count: String,
    pub avg_ph: String,
    pub avg_do: String,
    pub avg_turbidity: String,
}

/// Two-decimal average, or `-` when undefined.
pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => "-".to_string(),
    }
}

impl From<&ScenarioSummary> for SummaryCard {
    fn from(summary: &ScenarioSummary) -> Self {
        Self {
            scenario: summary.scenario,
            count: format!("{} samples", summary.count),
            avg_ph: format!("avg pH: {}", format_average(summary.avg_ph)),
            avg_do: format!("avg DO: {}", format_average(summary.avg_do)),
            avg_turbidity: format!("avg Turb: {}", format_average(summary.avg_turbidity)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scenario_renders_dashes() {
        let summaries: Vec<ScenarioSummary> =
            serde_json::from_str(r#"[{"scenario":"dry","count":0,"avg_ph":null}]"#).unwrap();
        let card = SummaryCard::from(&summaries[0]);
        assert_eq!(card.count, "0 samples");
        assert_eq!(card.avg_ph, "avg pH: -");
        assert_eq!(card.avg_do, "avg DO: -");
        assert_eq!(card.avg_turbidity, "avg Turb: -");
    }

    #[test]
    fn test_averages_round_to_two_decimals() {
        let summary = ScenarioSummary {
            scenario: Scenario::Monsoon,
            count: 3,
            avg_ph: Some(7.0),
            avg_do: Some(6.456),
            avg_turbidity: Some(12.3),
        };
        let card = SummaryCard::from(&summary);
        assert_eq!(card.count, "3 samples");
        assert_eq!(card.avg_ph, "avg pH: 7.00");
        assert_eq!(card.avg_do, "avg DO: 6.46");
        assert_eq!(card.avg_turbidity, "avg Turb: 12.30");
    }
}
