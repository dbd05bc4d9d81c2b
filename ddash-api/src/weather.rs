use serde::{Deserialize, Serialize};

/// Exact-case match for the "Yes"/"No" flag strings the API emits.
/// The upstream datasets never use other casings, so "yes" is not a match.
pub fn is_yes(value: &str) -> bool {
    value == "Yes"
}

/// A rain indicator as it appears on the wire: either a 0/1 numeric flag
/// or the literal strings "Yes"/"No", depending on which export produced
/// the record. Normalized to a boolean via [`RainFlag::as_bool`] and never
/// compared raw downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RainFlag {
    Number(f64),
    Text(String),
}

impl RainFlag {
    /// Coerce to a boolean: numeric 1 or the exact string "Yes" mean rain.
    pub fn as_bool(&self) -> bool {
        match self {
            RainFlag::Number(v) => *v == 1.0,
            RainFlag::Text(s) => is_yes(s),
        }
    }

    /// Display form for tables: numeric flags map to "Yes"/"No",
    /// strings pass through untouched.
    pub fn display(&self) -> String {
        match self {
            RainFlag::Number(v) => {
                if *v == 1.0 {
                    "Yes".to_string()
                } else {
                    "No".to_string()
                }
            }
            RainFlag::Text(s) => s.clone(),
        }
    }
}

/// One daily weather observation from the `/weather` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRow {
    #[serde(rename = "MinTemp")]
    pub min_temp: f64,
    #[serde(rename = "MaxTemp")]
    pub max_temp: f64,
    #[serde(rename = "Rainfall")]
    pub rainfall: f64,
    #[serde(rename = "Evaporation")]
    pub evaporation: f64,
    #[serde(rename = "Sunshine")]
    pub sunshine: f64,
    #[serde(rename = "WindGustDir")]
    pub wind_gust_dir: String,
    #[serde(rename = "WindGustSpeed")]
    pub wind_gust_speed: f64,
    #[serde(rename = "WindDir9am")]
    pub wind_dir_9am: String,
    #[serde(rename = "WindDir3pm")]
    pub wind_dir_3pm: String,
    #[serde(rename = "WindSpeed9am")]
    pub wind_speed_9am: f64,
    #[serde(rename = "WindSpeed3pm")]
    pub wind_speed_3pm: f64,
    #[serde(rename = "Humidity9am")]
    pub humidity_9am: f64,
    #[serde(rename = "Humidity3pm")]
    pub humidity_3pm: f64,
    #[serde(rename = "Pressure9am")]
    pub pressure_9am: f64,
    #[serde(rename = "Pressure3pm")]
    pub pressure_3pm: f64,
    #[serde(rename = "Cloud9am")]
    pub cloud_9am: f64,
    #[serde(rename = "Cloud3pm")]
    pub cloud_3pm: f64,
    #[serde(rename = "Temp9am")]
    pub temp_9am: f64,
    #[serde(rename = "Temp3pm")]
    pub temp_3pm: f64,
    #[serde(rename = "RainToday")]
    pub rain_today: RainFlag,
    #[serde(rename = "RISK_MM")]
    pub risk_mm: f64,
    #[serde(rename = "RainTomorrow")]
    pub rain_tomorrow: RainFlag,
}
