//! Dashboard CLI - weather, flights, and house-price dashboards in the
//! terminal.

use clap::Parser;
use ddash_api::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(
    name = "ddash-cli",
    version,
    about = "Analytics dashboards for the weather, flights, and house-price datasets"
)]
struct Cli {
    /// Base URL of the dataset API (falls back to $DDASH_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: ddash_cmd::Command,
}

fn resolve_base_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("DDASH_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let base_url = resolve_base_url(cli.base_url);
    ddash_cmd::run(base_url, cli.command).await
}
