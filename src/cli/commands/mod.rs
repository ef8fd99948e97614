//! Command implementations for the tide fetcher CLI
//!
//! Each command is implemented in its own module; this module dispatches to
//! the appropriate handler based on the parsed arguments.

pub mod fetch;
pub mod shared;
pub mod stations;

use crate::Result;
use crate::cli::args::{Args, Commands};
use crate::models::FetchStats;

/// Main command runner for the tide fetcher
///
/// Dispatches to the appropriate subcommand handler:
/// - `fetch`: full archiving run (stations, readings, summary)
/// - `stations`: station listing without writing the archive
pub async fn run(args: Args) -> Result<FetchStats> {
    match args.get_command() {
        Commands::Fetch(fetch_args) => fetch::run_fetch(fetch_args).await,
        Commands::Stations(stations_args) => stations::run_stations(stations_args).await,
    }
}
