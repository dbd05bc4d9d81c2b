//! Command implementations for the dashboard CLI.
//!
//! Each dataset subcommand drives the full pipeline: view-state machine ->
//! session loader -> aggregation -> table rendering.

use clap::{Args, Subcommand};
use ddash_api::{ApiClient, Session};

pub mod dashboards;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Show the weather dashboard (overview aggregates + data table)
    Weather(TableOpts),

    /// Show the flights dashboard
    Flights(TableOpts),

    /// Show the house-price dashboard
    Houses(TableOpts),

    /// Fetch all three datasets concurrently and print one overview each
    Summary,
}

/// Table flags shared by the dataset subcommands.
#[derive(Args)]
pub struct TableOpts {
    /// Also load the full dataset (the one-shot raw-data transition)
    #[arg(long)]
    pub full: bool,

    /// Case-insensitive substring filter on the dataset's search column
    #[arg(long)]
    pub filter: Option<String>,

    /// Sort the table by a column key (e.g. DEP_DELAY, price, MaxTemp)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub descending: bool,
}

pub async fn run(base_url: String, command: Command) -> anyhow::Result<()> {
    let session = Session::new(ApiClient::new(base_url));
    match command {
        Command::Weather(opts) => dashboards::run_weather(&session, &opts).await,
        Command::Flights(opts) => dashboards::run_flights(&session, &opts).await,
        Command::Houses(opts) => dashboards::run_houses(&session, &opts).await,
        Command::Summary => dashboards::run_summary(&session).await,
    }
}
