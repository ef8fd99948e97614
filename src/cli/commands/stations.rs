//! Stations command implementation for the tide fetcher CLI
//!
//! Lists the monitoring stations the API currently reports, in list order,
//! without fetching readings or writing any files. Useful for previewing
//! what a fetch run would archive.

use super::shared::setup_logging;
use crate::app::services::api_client::{ApiClient, TideApi};
use crate::cli::args::{OutputFormat, StationsArgs};
use crate::models::{FetchStats, StationSummary};
use crate::Result;
use tracing::{debug, info};

/// Stations command runner
pub async fn run_stations(args: StationsArgs) -> Result<FetchStats> {
    setup_logging(args.get_log_level())?;

    debug!("Command line arguments: {:?}", args);

    let config = args.to_config()?;
    let client = ApiClient::new(&config)?;

    info!("Fetching station list from {}", config.api_base_url);
    let stations = client.list_stations().await?;
    info!("Found {} stations", stations.len());

    let summaries: Vec<StationSummary> = stations.iter().map(StationSummary::from).collect();

    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Human => {
            println!("{} stations", summaries.len());
            for summary in &summaries {
                println!("  {:<12} {}", summary.id, summary.label);
            }
        }
    }

    Ok(FetchStats {
        stations_found: stations.len(),
        ..Default::default()
    })
}
