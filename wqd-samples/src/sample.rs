use crate::scenario::Scenario;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Metal symbol to concentration in mg/L, e.g. `{"Pb": 0.01}`.
///
/// Values are kept as the JSON the user entered (numbers, nulls, notes), in
/// entry order.
pub type MetalsMap = Map<String, Value>;

/// Sampling coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// A field sample as submitted to `POST /samples`.
///
/// Absent optional values serialize as explicit `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSample {
    pub scenario: Scenario,
    pub site_name: Option<String>,
    /// Collection time, sent as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    #[serde(with = "iso_timestamp")]
    pub collected_at: DateTime<Utc>,
    pub location: Location,
    pub ph: Option<f64>,
    pub dissolved_oxygen_mg_l: Option<f64>,
    pub turbidity_ntu: Option<f64>,
    pub metals_mg_l: Option<MetalsMap>,
    pub notes: Option<String>,
    /// Reserved by the backend; this client always sends `null`.
    pub files: Option<Value>,
}

/// Backend-assigned sample identity. Backends hand out either integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleId::Number(n) => write!(f, "{}", n),
            SampleId::Text(s) => f.write_str(s),
        }
    }
}

/// A persisted sample as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: SampleId,
    #[serde(flatten)]
    pub sample: NewSample,
}

/// Response body of `GET /samples`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleList {
    pub items: Vec<Sample>,
    pub count: u64,
}

mod iso_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};
    use wqd_utils::timestamps::{parse_timestamp, to_iso};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_iso(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
