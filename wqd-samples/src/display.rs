use crate::sample::Sample;
use chrono::FixedOffset;
use wqd_utils::timestamps::{format_display, format_local};

/// Column headers of the samples table.
pub const COLUMNS: [&str; 8] = ["Scenario", "Site", "Time", "Lat", "Lon", "pH", "DO", "Turb"];

/// One listed sample, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    /// Row identity (the backend id).
    pub key: String,
    pub scenario: String,
    pub site: String,
    pub time: String,
    pub lat: String,
    pub lon: String,
    pub ph: String,
    pub dissolved_oxygen: String,
    pub turbidity: String,
}

/// A measurement, or `-` when absent.
pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl SampleRow {
    /// Format a sample with timestamps shown in `offset`.
    pub fn with_offset(sample: &Sample, offset: &FixedOffset) -> Self {
        Self::build(sample, format_display(&sample.sample.collected_at, offset))
    }

    /// Format a sample with timestamps in the local time zone.
    pub fn local(sample: &Sample) -> Self {
        Self::build(sample, format_local(&sample.sample.collected_at))
    }

    fn build(sample: &Sample, time: String) -> Self {
        let s = &sample.sample;
        Self {
            key: sample.id.to_string(),
            scenario: s.scenario.to_string(),
            site: s.site_name.clone().unwrap_or_default(),
            time,
            lat: s.location.lat.to_string(),
            lon: s.location.lon.to_string(),
            ph: format_optional(s.ph),
            dissolved_oxygen: format_optional(s.dissolved_oxygen_mg_l),
            turbidity: format_optional(s.turbidity_ntu),
        }
    }

    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 8] {
        [
            self.scenario.as_str(),
            self.site.as_str(),
            self.time.as_str(),
            self.lat.as_str(),
            self.lon.as_str(),
            self.ph.as_str(),
            self.dissolved_oxygen.as_str(),
            self.turbidity.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{Location, NewSample, SampleId};
    use crate::scenario::Scenario;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_row_formatting() {
        let sample = Sample {
            id: SampleId::Number(7),
            sample: NewSample {
                scenario: Scenario::Upstream,
                site_name: None,
                collected_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
                location: Location { lat: 12.5, lon: -3.0 },
                ph: Some(7.0),
                dissolved_oxygen_mg_l: None,
                turbidity_ntu: Some(3.25),
                metals_mg_l: None,
                notes: None,
                files: None,
            },
        };
        let utc = FixedOffset::east_opt(0).unwrap();
        let row = SampleRow::with_offset(&sample, &utc);
        assert_eq!(row.key, "7");
        assert_eq!(
            row.cells(),
            ["upstream", "", "5/1/2024, 8:30:00 AM", "12.5", "-3", "7", "-", "3.25"]
        );
    }
}
