//! Aggregates and chart series for the flights dataset.

use ddash_api::flights::FlightRow;

use crate::{mean, rate, Aggregate, ScatterPoint, SERIES_PREFIX_LEN};

/// Delay threshold (minutes, strict) above which a flight counts as late.
pub const LATE_THRESHOLD_MIN: f64 = 15.0;

/// Delay threshold (minutes, strict) above which a flight counts as delayed.
pub const DELAYED_THRESHOLD_MIN: f64 = 30.0;

/// Three-tier delay classification, evaluated strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Delayed,
    Late,
    OnTime,
}

impl FlightStatus {
    pub fn label(self) -> &'static str {
        match self {
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Late => "Late",
            FlightStatus::OnTime => "On Time",
        }
    }
}

/// Classify a flight by its departure and arrival delays. The thresholds
/// are strict: exactly 15 or exactly 30 minutes is still on time / late.
pub fn classify(dep_delay: f64, arr_delay: f64) -> FlightStatus {
    if dep_delay > DELAYED_THRESHOLD_MIN || arr_delay > DELAYED_THRESHOLD_MIN {
        FlightStatus::Delayed
    } else if dep_delay > LATE_THRESHOLD_MIN || arr_delay > LATE_THRESHOLD_MIN {
        FlightStatus::Late
    } else {
        FlightStatus::OnTime
    }
}

/// True if either delay exceeds the looser 15-minute threshold. This is
/// the predicate behind the overview delay percentage.
pub fn is_delayed(row: &FlightRow) -> bool {
    row.dep_delay > LATE_THRESHOLD_MIN || row.arr_delay > LATE_THRESHOLD_MIN
}

/// Overview card values for the flights dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub avg_dep_delay: Aggregate,
    pub avg_arr_delay: Aggregate,
    pub avg_air_time: Aggregate,
    pub avg_distance: Aggregate,
    pub delayed_pct: Aggregate,
}

pub fn summarize(rows: &[FlightRow]) -> FlightSummary {
    FlightSummary {
        avg_dep_delay: mean(rows, |r| r.dep_delay),
        avg_arr_delay: mean(rows, |r| r.arr_delay),
        avg_air_time: mean(rows, |r| r.air_time),
        avg_distance: mean(rows, |r| r.distance),
        delayed_pct: rate(rows, is_delayed),
    }
}

/// One bar pair of the delay-comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayPoint {
    pub name: String,
    pub departure: f64,
    pub arrival: f64,
}

pub fn delay_series(rows: &[FlightRow]) -> Vec<DelayPoint> {
    rows.iter()
        .take(SERIES_PREFIX_LEN)
        .enumerate()
        .map(|(index, row)| DelayPoint {
            name: format!("Flight {}", index + 1),
            departure: row.dep_delay,
            arrival: row.arr_delay,
        })
        .collect()
}

/// Distance-vs-airtime scatter over the full loaded row set.
pub fn distance_air_time_points(rows: &[FlightRow]) -> Vec<ScatterPoint> {
    rows.iter()
        .map(|row| ScatterPoint {
            x: row.distance,
            y: row.air_time,
            z: 1.0,
            label: format!("Flight on {}", row.fl_date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        classify, delay_series, distance_air_time_points, summarize, FlightStatus,
    };
    use crate::Aggregate;
    use ddash_api::flights::{ClockValue, FlightRow};

    fn flight(dep_delay: f64, arr_delay: f64) -> FlightRow {
        FlightRow {
            fl_date: "2024-01-15".to_string(),
            dep_delay,
            arr_delay,
            air_time: 120.0,
            distance: 800.0,
            dep_time: ClockValue::Number(900.0),
            arr_time: ClockValue::Number(1100.0),
        }
    }

    #[test]
    fn test_classification_tiers() {
        assert_eq!(classify(40.0, 5.0), FlightStatus::Delayed);
        assert_eq!(classify(5.0, 40.0), FlightStatus::Delayed);
        assert_eq!(classify(20.0, 5.0), FlightStatus::Late);
        assert_eq!(classify(5.0, 20.0), FlightStatus::Late);
        assert_eq!(classify(5.0, 5.0), FlightStatus::OnTime);
        assert_eq!(classify(-10.0, -5.0), FlightStatus::OnTime);
    }

    #[test]
    fn test_classification_boundaries_are_strict() {
        assert_eq!(classify(15.0, 15.0), FlightStatus::OnTime);
        assert_eq!(classify(30.0, 0.0), FlightStatus::Late);
        assert_eq!(classify(30.0, 30.0), FlightStatus::Late);
        assert_eq!(classify(30.1, 0.0), FlightStatus::Delayed);
        assert_eq!(classify(15.1, 0.0), FlightStatus::Late);
    }

    #[test]
    fn test_delay_percentage() {
        let rows = vec![flight(40.0, 5.0), flight(5.0, 5.0)];
        let summary = summarize(&rows);
        assert_eq!(summary.delayed_pct, Aggregate::Value(50.0));
        assert_eq!(classify(rows[0].dep_delay, rows[0].arr_delay).label(), "Delayed");
        assert_eq!(classify(rows[1].dep_delay, rows[1].arr_delay).label(), "On Time");
    }

    #[test]
    fn test_average_delays_keep_sign() {
        let rows = vec![flight(-10.0, -2.0), flight(20.0, 6.0)];
        let summary = summarize(&rows);
        assert_eq!(summary.avg_dep_delay, Aggregate::Value(5.0));
        assert_eq!(summary.avg_arr_delay, Aggregate::Value(2.0));
    }

    #[test]
    fn test_delay_series_prefix_but_scatter_full() {
        let rows: Vec<FlightRow> = (0..25).map(|i| flight(i as f64, 0.0)).collect();
        assert_eq!(delay_series(&rows).len(), 20);
        assert_eq!(distance_air_time_points(&rows).len(), 25);
    }

    #[test]
    fn test_scatter_point_shape() {
        let rows = vec![flight(0.0, 0.0)];
        let points = distance_air_time_points(&rows);
        assert_eq!(points[0].x, 800.0);
        assert_eq!(points[0].y, 120.0);
        assert_eq!(points[0].label, "Flight on 2024-01-15");
    }
}
