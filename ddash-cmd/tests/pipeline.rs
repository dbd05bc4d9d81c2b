//! End-to-end pipeline tests: raw API JSON -> typed rows -> aggregates ->
//! rendered table text, without a network.

use ddash_api::flights::FlightRow;
use ddash_api::houses::HousePriceRow;
use ddash_api::loader::assign_house_ids;
use ddash_api::weather::WeatherRow;
use ddash_cmd::render::{fmt_aggregate, render_table};
use ddash_data::{flights, houses, weather};
use ddash_table::columns::{
    flight_columns, house_columns, weather_columns, FLIGHT_FILTER_KEY,
};
use ddash_table::{filter_rows, find_column, sort_rows, SortDirection};

fn weather_rows() -> Vec<WeatherRow> {
    serde_json::from_str(
        r#"[
            {"MinTemp": 13.4, "MaxTemp": 20.0, "Rainfall": 0.0,
             "Evaporation": 4.2, "Sunshine": 8.1,
             "WindGustDir": "W", "WindGustSpeed": 44.0,
             "WindDir9am": "W", "WindDir3pm": "WNW", "WindSpeed9am": 20.0,
             "WindSpeed3pm": 24.0, "Humidity9am": 71.0, "Humidity3pm": 22.0,
             "Pressure9am": 1007.7, "Pressure3pm": 1007.1, "Cloud9am": 8.0,
             "Cloud3pm": 5.0, "Temp9am": 16.9, "Temp3pm": 21.8,
             "RainToday": "No", "RISK_MM": 0.0, "RainTomorrow": 0},
            {"MinTemp": 7.4, "MaxTemp": 30.0, "Rainfall": 10.0,
             "Evaporation": 5.6, "Sunshine": 9.7,
             "WindGustDir": "WNW", "WindGustSpeed": 44.0,
             "WindDir9am": "NNW", "WindDir3pm": "WSW", "WindSpeed9am": 4.0,
             "WindSpeed3pm": 16.0, "Humidity9am": 44.0, "Humidity3pm": 25.0,
             "Pressure9am": 1010.6, "Pressure3pm": 1007.8, "Cloud9am": 2.0,
             "Cloud3pm": 1.0, "Temp9am": 17.2, "Temp3pm": 24.3,
             "RainToday": 1, "RISK_MM": 3.6, "RainTomorrow": "Yes"}
        ]"#,
    )
    .unwrap()
}

fn flight_rows() -> Vec<FlightRow> {
    serde_json::from_str(
        r#"[
            {"FL_DATE": "2013-01-04", "DEP_DELAY": 45.0, "ARR_DELAY": 50.0,
             "AIR_TIME": 120.0, "DISTANCE": 800.0,
             "DEP_TIME": 915.0, "ARR_TIME": "11:35"},
            {"FL_DATE": "2013-01-05", "DEP_DELAY": -5.0, "ARR_DELAY": -10.0,
             "AIR_TIME": 100.0, "DISTANCE": 600.0,
             "DEP_TIME": "08:30", "ARR_TIME": 1010.0}
        ]"#,
    )
    .unwrap()
}

fn house_rows() -> Vec<HousePriceRow> {
    serde_json::from_str(
        r#"[
            {"price": 300000.0, "area": 2000.0, "bedrooms": 4,
             "bathrooms": 2, "stories": 2, "mainroad": "Yes",
             "guestroom": "No", "basement": "Yes", "hotwaterheating": "No",
             "airconditioning": "Yes", "parking": "Yes", "prefarea": "Yes",
             "furnishingstatus": "furnished"},
            {"price": 100000.0, "area": 1000.0, "bedrooms": 2,
             "bathrooms": 1, "stories": 1, "mainroad": "Yes",
             "guestroom": "No", "basement": "No", "hotwaterheating": "No",
             "airconditioning": "No", "parking": "No", "prefarea": "No",
             "furnishingstatus": "unfurnished"}
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_weather_overview_from_json() {
    let rows = weather_rows();
    let summary = weather::summarize(&rows);
    assert_eq!(
        fmt_aggregate(summary.avg_max_temp, |v| format!("{v:.1}°C")),
        "25.0°C"
    );
    assert_eq!(
        fmt_aggregate(summary.avg_rainfall, |v| format!("{v:.1} mm")),
        "5.0 mm"
    );
    // one Yes (dual numeric form counts too) out of two rows
    assert_eq!(
        fmt_aggregate(summary.rain_tomorrow_pct, |v| format!("{v:.1}%")),
        "50.0%"
    );
}

#[test]
fn test_weather_table_renders_dual_rain_forms() {
    let rows = weather_rows();
    let table = render_table(&rows, &weather_columns());
    // RainToday arrives as "No" on row one and as the number 1 on row two;
    // both render as Yes/No text
    let lines: Vec<&str> = table.lines().collect();
    assert!(lines[2].contains("20.0°C"));
    assert!(lines[2].ends_with("No"));
    assert!(lines[3].ends_with("Yes"));
}

#[test]
fn test_flight_overview_and_badges() {
    let rows = flight_rows();
    let summary = flights::summarize(&rows);
    assert_eq!(
        fmt_aggregate(summary.avg_dep_delay, |v| format!("{v:.1} min")),
        "20.0 min"
    );
    assert_eq!(
        fmt_aggregate(summary.delayed_pct, |v| format!("{v:.1}%")),
        "50.0%"
    );

    let table = render_table(&rows, &flight_columns());
    assert!(table.contains("+45 min"));
    assert!(table.contains("-5 min"));
    assert!(table.contains("Delayed"));
    assert!(table.contains("On Time"));
    // mixed clock representations both pass through
    assert!(table.contains("915"));
    assert!(table.contains("08:30"));
}

#[test]
fn test_flight_filter_and_sort() {
    let rows = flight_rows();
    let columns = flight_columns();
    let date = find_column(&columns, FLIGHT_FILTER_KEY).unwrap();

    let hits = filter_rows(&rows, date, "01-04");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].fl_date, "2013-01-04");

    let mut rows = rows;
    let dep = find_column(&columns, "DEP_DELAY").unwrap();
    sort_rows(&mut rows, dep, SortDirection::Ascending);
    assert_eq!(rows[0].dep_delay, -5.0);
}

#[test]
fn test_house_overview_uses_mean_of_means() {
    let rows = house_rows();
    let summary = houses::summarize(&rows);
    // mean(price) / mean(area) = 200000 / 1500, not the per-row mean (125)
    assert_eq!(summary.avg_price_per_sqft.value().map(|v| v.round()), Some(133.0));
    assert_eq!(
        fmt_aggregate(summary.avg_price, |v| format!("{v:.0}")),
        "200000"
    );
    assert_eq!(summary.total_properties, 2);
}

#[test]
fn test_house_table_has_ids_and_currency() {
    let mut rows = house_rows();
    assign_house_ids(&mut rows);
    let table = render_table(&rows, &house_columns());
    let lines: Vec<&str> = table.lines().collect();
    assert!(lines[2].starts_with('1'));
    assert!(lines[3].starts_with('2'));
    assert!(table.contains("$300,000"));
    assert!(table.contains("furnished"));
}
