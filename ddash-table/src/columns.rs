//! Per-dataset column sets.
//!
//! Mirrors the dashboard tables: accessors read exactly one field (or, for
//! the derived flight status column, the two delay fields of the same row).

use ddash_api::flights::FlightRow;
use ddash_api::houses::HousePriceRow;
use ddash_api::weather::WeatherRow;
use ddash_data::flights::classify;

use crate::{CellFormat, CellValue, Column};

/// Designated free-text filter column per dataset.
pub const WEATHER_FILTER_KEY: &str = "RainToday";
pub const FLIGHT_FILTER_KEY: &str = "FL_DATE";
pub const HOUSE_FILTER_KEY: &str = "furnishingstatus";

const CELSIUS: CellFormat = CellFormat::FixedDecimal {
    precision: 1,
    suffix: "°C",
};
const MILLIMETERS: CellFormat = CellFormat::FixedDecimal {
    precision: 1,
    suffix: " mm",
};
const KMH: CellFormat = CellFormat::FixedDecimal {
    precision: 1,
    suffix: " km/h",
};
const MINUTES: CellFormat = CellFormat::FixedDecimal {
    precision: 0,
    suffix: " min",
};
const MILES: CellFormat = CellFormat::FixedDecimal {
    precision: 0,
    suffix: " miles",
};

pub fn weather_columns() -> Vec<Column<WeatherRow>> {
    vec![
        Column::new("MinTemp", "Min Temp", true, CELSIUS, |r| {
            CellValue::Number(r.min_temp)
        }),
        Column::new("MaxTemp", "Max Temp", true, CELSIUS, |r| {
            CellValue::Number(r.max_temp)
        }),
        Column::new("Rainfall", "Rainfall", true, MILLIMETERS, |r| {
            CellValue::Number(r.rainfall)
        }),
        Column::new("WindGustSpeed", "Wind Gust", true, KMH, |r| {
            CellValue::Number(r.wind_gust_speed)
        }),
        Column::new(
            "Humidity9am",
            "Humidity 9am",
            true,
            CellFormat::Percentage,
            |r| CellValue::Number(r.humidity_9am),
        ),
        Column::new(
            "Humidity3pm",
            "Humidity 3pm",
            true,
            CellFormat::Percentage,
            |r| CellValue::Number(r.humidity_3pm),
        ),
        Column::new("RainToday", "Rain Today", true, CellFormat::Indicator, |r| {
            CellValue::Text(r.rain_today.display())
        }),
        Column::new(
            "RainTomorrow",
            "Rain Tomorrow",
            true,
            CellFormat::Indicator,
            |r| CellValue::Text(r.rain_tomorrow.display()),
        ),
    ]
}

pub fn flight_columns() -> Vec<Column<FlightRow>> {
    vec![
        Column::new("FL_DATE", "Flight Date", true, CellFormat::Plain, |r| {
            CellValue::Text(r.fl_date.clone())
        }),
        Column::new("DEP_TIME", "Departure Time", true, CellFormat::Plain, |r| {
            CellValue::Text(r.dep_time.display())
        }),
        Column::new("ARR_TIME", "Arrival Time", true, CellFormat::Plain, |r| {
            CellValue::Text(r.arr_time.display())
        }),
        Column::new(
            "DEP_DELAY",
            "Departure Delay",
            true,
            CellFormat::SignedMinutes,
            |r| CellValue::Number(r.dep_delay),
        ),
        Column::new(
            "ARR_DELAY",
            "Arrival Delay",
            true,
            CellFormat::SignedMinutes,
            |r| CellValue::Number(r.arr_delay),
        ),
        Column::new("AIR_TIME", "Air Time", true, MINUTES, |r| {
            CellValue::Number(r.air_time)
        }),
        Column::new("DISTANCE", "Distance", true, MILES, |r| {
            CellValue::Number(r.distance)
        }),
        Column::new("status", "Status", false, CellFormat::Badge, |r| {
            CellValue::Text(classify(r.dep_delay, r.arr_delay).label().to_string())
        }),
    ]
}

pub fn house_columns() -> Vec<Column<HousePriceRow>> {
    vec![
        Column::new("id", "ID", true, CellFormat::Plain, |r| {
            CellValue::Int(r.id.map(i64::from).unwrap_or_default())
        }),
        Column::new("price", "Price", true, CellFormat::Currency, |r| {
            CellValue::Number(r.price)
        }),
        Column::new("area", "Area (sq ft)", true, CellFormat::Plain, |r| {
            CellValue::Number(r.area)
        }),
        Column::new(
            "furnishingstatus",
            "Furnishing",
            true,
            CellFormat::Badge,
            |r| CellValue::Text(r.furnishingstatus.clone()),
        ),
        Column::new("bedrooms", "Beds", true, CellFormat::Plain, |r| {
            CellValue::Int(r.bedrooms as i64)
        }),
        Column::new("bathrooms", "Baths", true, CellFormat::Plain, |r| {
            CellValue::Int(r.bathrooms as i64)
        }),
        Column::new("stories", "Stories", true, CellFormat::Plain, |r| {
            CellValue::Int(r.stories as i64)
        }),
        Column::new("mainroad", "Main Road", true, CellFormat::Indicator, |r| {
            CellValue::Text(r.mainroad.clone())
        }),
        Column::new("prefarea", "Preferred Area", true, CellFormat::Indicator, |r| {
            CellValue::Text(r.prefarea.clone())
        }),
        Column::new(
            "airconditioning",
            "AC",
            true,
            CellFormat::Indicator,
            |r| CellValue::Text(r.airconditioning.clone()),
        ),
    ]
}
