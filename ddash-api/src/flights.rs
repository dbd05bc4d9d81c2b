use serde::{Deserialize, Serialize};

/// A departure/arrival clock value. Some exports emit these as numbers
/// (e.g. 1536.0 for 15:36) and some as strings; the table layer displays
/// whichever form arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClockValue {
    Number(f64),
    Text(String),
}

impl ClockValue {
    pub fn display(&self) -> String {
        match self {
            ClockValue::Number(v) => {
                if v.fract() == 0.0 {
                    format!("{}", *v as i64)
                } else {
                    format!("{v}")
                }
            }
            ClockValue::Text(s) => s.clone(),
        }
    }
}

/// One flight record from the `/flights` endpoint.
/// Delays are in minutes and signed: negative means early.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRow {
    #[serde(rename = "FL_DATE")]
    pub fl_date: String,
    #[serde(rename = "DEP_DELAY")]
    pub dep_delay: f64,
    #[serde(rename = "ARR_DELAY")]
    pub arr_delay: f64,
    #[serde(rename = "AIR_TIME")]
    pub air_time: f64,
    #[serde(rename = "DISTANCE")]
    pub distance: f64,
    #[serde(rename = "DEP_TIME")]
    pub dep_time: ClockValue,
    #[serde(rename = "ARR_TIME")]
    pub arr_time: ClockValue,
}
