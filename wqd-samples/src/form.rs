//! Raw sample form state and its conversion into a [`NewSample`] payload.
//!
//! Every input is held as the text the user typed. Conversion happens once,
//! at submit time:
//! - empty optional text and numbers become `None` (serialized as `null`)
//! - metals text that is not a JSON object of numbers becomes `None`
//! - an unusable timestamp, coordinate or measurement is a [`FormError`]

use crate::sample::{Location, MetalsMap, NewSample};
use crate::scenario::Scenario;
use serde_json::Value;
use thiserror::Error;
use wqd_utils::clock::Clock;
use wqd_utils::timestamps::{parse_timestamp, to_iso};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0}")]
    InvalidTimestamp(String),

    #[error("{field} must be a number (got {value:?})")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("{field} must be a number (got {value:?})")]
    InvalidMeasurement { field: &'static str, value: String },
}

/// Text inputs of the sample form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    SiteName,
    Latitude,
    Longitude,
    CollectedAt,
    Ph,
    DissolvedOxygen,
    Turbidity,
    Metals,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::SiteName,
        FormField::Latitude,
        FormField::Longitude,
        FormField::CollectedAt,
        FormField::Ph,
        FormField::DissolvedOxygen,
        FormField::Turbidity,
        FormField::Metals,
        FormField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::SiteName => "Site name",
            FormField::Latitude => "Latitude",
            FormField::Longitude => "Longitude",
            FormField::CollectedAt => "Collected at (ISO)",
            FormField::Ph => "pH",
            FormField::DissolvedOxygen => "Dissolved Oxygen (mg/L)",
            FormField::Turbidity => "Turbidity (NTU)",
            FormField::Metals => "Metals (JSON, mg/L)",
            FormField::Notes => "Notes",
        }
    }

    /// Measurements are entered through numeric inputs.
    pub fn is_measurement(&self) -> bool {
        matches!(
            self,
            FormField::Ph | FormField::DissolvedOxygen | FormField::Turbidity
        )
    }

    /// Metals and notes get a multi-line text area.
    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Metals | FormField::Notes)
    }
}

/// Sample form as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleForm {
    pub scenario: Scenario,
    pub site_name: String,
    pub lat: String,
    pub lon: String,
    pub collected_at: String,
    pub ph: String,
    pub dissolved_oxygen_mg_l: String,
    pub turbidity_ntu: String,
    pub metals_mg_l: String,
    pub notes: String,
}

impl Default for SampleForm {
    fn default() -> Self {
        Self {
            scenario: Scenario::Dry,
            site_name: String::new(),
            lat: String::new(),
            lon: String::new(),
            collected_at: String::new(),
            ph: String::new(),
            dissolved_oxygen_mg_l: String::new(),
            turbidity_ntu: String::new(),
            metals_mg_l: "{}".to_string(),
            notes: String::new(),
        }
    }
}

impl SampleForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::SiteName => &self.site_name,
            FormField::Latitude => &self.lat,
            FormField::Longitude => &self.lon,
            FormField::CollectedAt => &self.collected_at,
            FormField::Ph => &self.ph,
            FormField::DissolvedOxygen => &self.dissolved_oxygen_mg_l,
            FormField::Turbidity => &self.turbidity_ntu,
            FormField::Metals => &self.metals_mg_l,
            FormField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::SiteName => &mut self.site_name,
            FormField::Latitude => &mut self.lat,
            FormField::Longitude => &mut self.lon,
            FormField::CollectedAt => &mut self.collected_at,
            FormField::Ph => &mut self.ph,
            FormField::DissolvedOxygen => &mut self.dissolved_oxygen_mg_l,
            FormField::Turbidity => &mut self.turbidity_ntu,
            FormField::Metals => &mut self.metals_mg_l,
            FormField::Notes => &mut self.notes,
        };
        *slot = value;
    }

    /// "Now" button: stamp the collection time from the clock.
    pub fn stamp_now(&mut self, clock: &dyn Clock) {
        self.collected_at = to_iso(&clock.now());
    }

    /// "Use GPS" button: fill coordinates with six decimals.
    pub fn apply_location(&mut self, location: Location) {
        self.lat = format!("{:.6}", location.lat);
        self.lon = format!("{:.6}", location.lon);
    }

    /// Build the submission payload.
    pub fn to_new_sample(&self) -> Result<NewSample, FormError> {
        let collected_at = parse_timestamp(&self.collected_at)
            .map_err(|e| FormError::InvalidTimestamp(e.to_string()))?;
        let location = Location {
            lat: parse_coordinate("Latitude", &self.lat)?,
            lon: parse_coordinate("Longitude", &self.lon)?,
        };

        Ok(NewSample {
            scenario: self.scenario,
            site_name: optional_text(&self.site_name),
            collected_at,
            location,
            ph: parse_optional_number("pH", &self.ph)?,
            dissolved_oxygen_mg_l: parse_optional_number(
                "Dissolved oxygen",
                &self.dissolved_oxygen_mg_l,
            )?,
            turbidity_ntu: parse_optional_number("Turbidity", &self.turbidity_ntu)?,
            metals_mg_l: parse_metals(&self.metals_mg_l),
            notes: optional_text(&self.notes),
            files: None,
        })
    }
}

/// Empty text is absent.
fn optional_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, FormError> {
    parse_finite(raw).ok_or_else(|| FormError::InvalidCoordinate {
        field,
        value: raw.to_string(),
    })
}

/// Empty (or blank) input is `None`; anything else must be a finite number.
pub fn parse_optional_number(field: &'static str, raw: &str) -> Result<Option<f64>, FormError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_finite(raw)
        .map(Some)
        .ok_or_else(|| FormError::InvalidMeasurement {
            field,
            value: raw.to_string(),
        })
}

/// Parse the metals text. Any JSON object is kept as entered; other JSON and
/// malformed input yield `None` instead of an error.
pub fn parse_metals(raw: &str) -> Option<MetalsMap> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(metals)) => Some(metals),
        Ok(Value::Null) => None,
        Ok(other) => {
            log::warn!("Ignoring metals input that is not an object: {}", other);
            None
        }
        Err(e) => {
            log::warn!("Ignoring malformed metals input: {}", e);
            None
        }
    }
}
