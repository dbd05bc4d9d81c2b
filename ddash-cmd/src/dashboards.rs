//! Dataset dashboard drivers: view-state machine -> loader -> aggregates ->
//! rendered table.

use std::future::Future;

use anyhow::bail;
use log::info;

use ddash_api::Session;
use ddash_data::{flights, houses, weather};
use ddash_table::columns::{
    flight_columns, house_columns, weather_columns, FLIGHT_FILTER_KEY, HOUSE_FILTER_KEY,
    WEATHER_FILTER_KEY,
};
use ddash_table::{filter_rows, find_column, render_cell, sort_rows, CellFormat, CellValue, Column, SortDirection};
use ddash_view::{DashboardView, ViewState};

use crate::render::{fmt_aggregate, render_table};
use crate::TableOpts;

/// Drive one view through its initial load and, when requested, the
/// one-shot full-data transition. Returns the loaded rows or the error
/// message the view ended in.
async fn load_rows<T, F, Fut>(opts: &TableOpts, load: F) -> anyhow::Result<Vec<T>>
where
    T: Clone,
    F: Fn(usize) -> Fut,
    Fut: Future<Output = ddash_api::Result<Vec<T>>>,
{
    let mut view: DashboardView<T> = DashboardView::new();

    if let Some(ticket) = view.activate() {
        let result = load(ticket.limit).await;
        view.complete(ticket, result);
    }

    if opts.full {
        if let Some(ticket) = view.open_raw_data() {
            info!("Loading full dataset ({} rows)", ticket.limit);
            let result = load(ticket.limit).await;
            view.complete(ticket, result);
        }
    }

    match view.state() {
        ViewState::Ready => Ok(view.rows().to_vec()),
        ViewState::Error(msg) => bail!("{msg}"),
        // unreachable in this driver: activate always issues a ticket
        _ => bail!("load did not complete"),
    }
}

/// Apply the filter and sort flags over the dataset's column set.
fn shape_rows<R: Clone>(
    mut rows: Vec<R>,
    columns: &[Column<R>],
    filter_key: &str,
    opts: &TableOpts,
) -> anyhow::Result<Vec<R>> {
    if let Some(query) = &opts.filter {
        let column = match find_column(columns, filter_key) {
            Some(c) => c,
            None => bail!("no filter column {filter_key}"),
        };
        rows = filter_rows(&rows, column, query);
    }
    if let Some(key) = &opts.sort {
        let column = match find_column(columns, key) {
            Some(c) if c.sortable => c,
            Some(_) => bail!("column {key} is not sortable"),
            None => bail!("unknown column key {key}"),
        };
        let direction = if opts.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        sort_rows(&mut rows, column, direction);
    }
    Ok(rows)
}

fn usd(value: f64) -> String {
    render_cell(CellFormat::Currency, &CellValue::Number(value))
}

pub async fn run_weather(session: &Session, opts: &TableOpts) -> anyhow::Result<()> {
    let rows = load_rows(opts, |limit| session.weather(limit)).await?;
    if rows.is_empty() {
        println!("No weather data available.");
        return Ok(());
    }
    info!("Loaded {} weather rows", rows.len());

    let summary = weather::summarize(&rows);
    println!(
        "Average Max Temperature: {}",
        fmt_aggregate(summary.avg_max_temp, |v| format!("{v:.1}°C"))
    );
    println!(
        "Average Rainfall: {}",
        fmt_aggregate(summary.avg_rainfall, |v| format!("{v:.1} mm"))
    );
    println!(
        "Average Wind Speed: {}",
        fmt_aggregate(summary.avg_wind_speed_3pm, |v| format!("{v:.1} km/h"))
    );
    println!(
        "Rain Tomorrow Probability: {}",
        fmt_aggregate(summary.rain_tomorrow_pct, |v| format!("{v:.1}%"))
    );
    println!();

    let columns = weather_columns();
    let rows = shape_rows(rows, &columns, WEATHER_FILTER_KEY, opts)?;
    print!("{}", render_table(&rows, &columns));
    Ok(())
}

pub async fn run_flights(session: &Session, opts: &TableOpts) -> anyhow::Result<()> {
    let rows = load_rows(opts, |limit| session.flights(limit)).await?;
    info!("Loaded {} flight rows", rows.len());

    let summary = flights::summarize(&rows);
    println!(
        "Average Departure Delay: {}",
        fmt_aggregate(summary.avg_dep_delay, |v| format!("{v:.1} min"))
    );
    println!(
        "Average Arrival Delay: {}",
        fmt_aggregate(summary.avg_arr_delay, |v| format!("{v:.1} min"))
    );
    println!(
        "Average Air Time: {}",
        fmt_aggregate(summary.avg_air_time, |v| format!("{v:.0} min"))
    );
    println!(
        "Delayed Flights: {}",
        fmt_aggregate(summary.delayed_pct, |v| format!("{v:.1}%"))
    );
    println!();

    let columns = flight_columns();
    let rows = shape_rows(rows, &columns, FLIGHT_FILTER_KEY, opts)?;
    print!("{}", render_table(&rows, &columns));
    Ok(())
}

pub async fn run_houses(session: &Session, opts: &TableOpts) -> anyhow::Result<()> {
    let rows = load_rows(opts, |limit| session.houses(limit)).await?;
    info!("Loaded {} house-price rows", rows.len());

    let summary = houses::summarize(&rows);
    println!(
        "Average Home Price: {}",
        fmt_aggregate(summary.avg_price, usd)
    );
    println!(
        "Average Price per Sq Ft: {}",
        fmt_aggregate(summary.avg_price_per_sqft, usd)
    );
    println!(
        "Average Bedrooms: {}",
        fmt_aggregate(summary.avg_bedrooms, |v| format!("{v:.1}"))
    );
    println!("Total Properties: {}", summary.total_properties);
    println!();

    let columns = house_columns();
    let rows = shape_rows(rows, &columns, HOUSE_FILTER_KEY, opts)?;
    print!("{}", render_table(&rows, &columns));
    Ok(())
}

/// One overview line per dataset. The three fetches run concurrently and
/// fail independently: one broken endpoint does not hide the others.
pub async fn run_summary(session: &Session) -> anyhow::Result<()> {
    let (weather_rows, flight_rows, house_rows) = tokio::join!(
        session.weather(ddash_view::PAGE_LIMIT),
        session.flights(ddash_view::PAGE_LIMIT),
        session.houses(ddash_view::PAGE_LIMIT),
    );

    match weather_rows {
        Ok(rows) => {
            let summary = weather::summarize(&rows);
            println!(
                "weather: {} rows, avg max temp {}",
                rows.len(),
                fmt_aggregate(summary.avg_max_temp, |v| format!("{v:.1}°C"))
            );
        }
        Err(err) => println!("weather: failed: {err}"),
    }
    match flight_rows {
        Ok(rows) => {
            let summary = flights::summarize(&rows);
            println!(
                "flights: {} rows, {} delayed",
                rows.len(),
                fmt_aggregate(summary.delayed_pct, |v| format!("{v:.1}%"))
            );
        }
        Err(err) => println!("flights: failed: {err}"),
    }
    match house_rows {
        Ok(rows) => {
            let summary = houses::summarize(&rows);
            println!(
                "houses: {} rows, avg price {}",
                rows.len(),
                fmt_aggregate(summary.avg_price, usd)
            );
        }
        Err(err) => println!("houses: failed: {err}"),
    }
    Ok(())
}
