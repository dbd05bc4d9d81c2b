//! Aggregates and chart series for the weather dataset.

use ddash_api::weather::WeatherRow;

use crate::{mean, rate, Aggregate, CountBucket, SERIES_PREFIX_LEN};

/// Overview card values for the weather dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    pub avg_max_temp: Aggregate,
    pub avg_rainfall: Aggregate,
    pub avg_wind_speed_3pm: Aggregate,
    /// Percentage of rows whose coerced rain-tomorrow flag is true.
    pub rain_tomorrow_pct: Aggregate,
}

pub fn summarize(rows: &[WeatherRow]) -> WeatherSummary {
    WeatherSummary {
        avg_max_temp: mean(rows, |r| r.max_temp),
        avg_rainfall: mean(rows, |r| r.rainfall),
        avg_wind_speed_3pm: mean(rows, |r| r.wind_speed_3pm),
        rain_tomorrow_pct: rate(rows, |r| r.rain_tomorrow.as_bool()),
    }
}

/// Yes/no tally of the coerced rain-tomorrow flag, feeding the
/// rain-prediction pie projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainTally {
    pub yes: usize,
    pub no: usize,
}

pub fn rain_tomorrow_tally(rows: &[WeatherRow]) -> RainTally {
    rows.iter().fold(RainTally { yes: 0, no: 0 }, |mut acc, row| {
        if row.rain_tomorrow.as_bool() {
            acc.yes += 1;
        } else {
            acc.no += 1;
        }
        acc
    })
}

pub fn rain_prediction_buckets(rows: &[WeatherRow]) -> Vec<CountBucket> {
    let tally = rain_tomorrow_tally(rows);
    vec![
        CountBucket {
            name: "Rain".to_string(),
            count: tally.yes,
        },
        CountBucket {
            name: "No Rain".to_string(),
            count: tally.no,
        },
    ]
}

/// One day of the temperature trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperaturePoint {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub morning: f64,
    pub afternoon: f64,
}

pub fn temperature_series(rows: &[WeatherRow]) -> Vec<TemperaturePoint> {
    rows.iter()
        .take(SERIES_PREFIX_LEN)
        .enumerate()
        .map(|(index, row)| TemperaturePoint {
            name: format!("Day {}", index + 1),
            min: row.min_temp,
            max: row.max_temp,
            morning: row.temp_9am,
            afternoon: row.temp_3pm,
        })
        .collect()
}

/// One day of the rainfall-and-humidity chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallPoint {
    pub name: String,
    pub rainfall: f64,
    pub humidity_9am: f64,
    pub humidity_3pm: f64,
}

pub fn rainfall_series(rows: &[WeatherRow]) -> Vec<RainfallPoint> {
    rows.iter()
        .take(SERIES_PREFIX_LEN)
        .enumerate()
        .map(|(index, row)| RainfallPoint {
            name: format!("Day {}", index + 1),
            rainfall: row.rainfall,
            humidity_9am: row.humidity_9am,
            humidity_3pm: row.humidity_3pm,
        })
        .collect()
}

/// One day of the wind-speed chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WindPoint {
    pub name: String,
    pub gust: f64,
    pub morning: f64,
    pub afternoon: f64,
}

pub fn wind_series(rows: &[WeatherRow]) -> Vec<WindPoint> {
    rows.iter()
        .take(SERIES_PREFIX_LEN)
        .enumerate()
        .map(|(index, row)| WindPoint {
            name: format!("Day {}", index + 1),
            gust: row.wind_gust_speed,
            morning: row.wind_speed_9am,
            afternoon: row.wind_speed_3pm,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{rain_tomorrow_tally, summarize, temperature_series};
    use crate::Aggregate;
    use ddash_api::weather::{RainFlag, WeatherRow};

    fn day(max_temp: f64, rainfall: f64, rain_tomorrow: RainFlag) -> WeatherRow {
        WeatherRow {
            min_temp: 10.0,
            max_temp,
            rainfall,
            evaporation: 4.0,
            sunshine: 8.0,
            wind_gust_dir: "NW".to_string(),
            wind_gust_speed: 35.0,
            wind_dir_9am: "W".to_string(),
            wind_dir_3pm: "NW".to_string(),
            wind_speed_9am: 10.0,
            wind_speed_3pm: 18.0,
            humidity_9am: 70.0,
            humidity_3pm: 40.0,
            pressure_9am: 1018.0,
            pressure_3pm: 1014.0,
            cloud_9am: 4.0,
            cloud_3pm: 5.0,
            temp_9am: 15.0,
            temp_3pm: 21.0,
            rain_today: RainFlag::Text("No".to_string()),
            risk_mm: 0.0,
            rain_tomorrow,
        }
    }

    #[test]
    fn test_overview_averages() {
        let rows = vec![
            day(20.0, 0.0, RainFlag::Number(0.0)),
            day(30.0, 10.0, RainFlag::Text("Yes".to_string())),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.avg_max_temp, Aggregate::Value(25.0));
        assert_eq!(summary.avg_rainfall, Aggregate::Value(5.0));
        assert_eq!(summary.rain_tomorrow_pct, Aggregate::Value(50.0));
    }

    #[test]
    fn test_rain_tally_mixes_representations() {
        let rows = vec![
            day(20.0, 0.0, RainFlag::Number(1.0)),
            day(21.0, 0.0, RainFlag::Text("Yes".to_string())),
            day(22.0, 0.0, RainFlag::Text("No".to_string())),
            // lowercase "yes" does not count
            day(23.0, 0.0, RainFlag::Text("yes".to_string())),
        ];
        let tally = rain_tomorrow_tally(&rows);
        assert_eq!(tally.yes, 2);
        assert_eq!(tally.no, 2);
    }

    #[test]
    fn test_temperature_series_caps_at_twenty() {
        let rows: Vec<WeatherRow> = (0..30)
            .map(|i| day(i as f64, 0.0, RainFlag::Number(0.0)))
            .collect();
        let series = temperature_series(&rows);
        assert_eq!(series.len(), 20);
        assert_eq!(series[0].name, "Day 1");
        assert_eq!(series[19].name, "Day 20");
        assert_eq!(series[19].max, 19.0);
    }

    #[test]
    fn test_empty_rows() {
        let summary = summarize(&[]);
        assert_eq!(summary.avg_max_temp, Aggregate::Empty);
        assert_eq!(summary.rain_tomorrow_pct, Aggregate::Empty);
        assert!(temperature_series(&[]).is_empty());
    }
}
