//! Fetch command implementation for the tide fetcher CLI
//!
//! Runs the complete archiving workflow: configuration, API client
//! construction, the sequential fetch pipeline, and the final report.

use super::shared::{print_fetch_report, setup_logging};
use crate::app::services::api_client::ApiClient;
use crate::app::services::pipeline::run_pipeline;
use crate::cli::args::FetchArgs;
use crate::clock::SystemClock;
use crate::models::FetchStats;
use crate::Result;
use tracing::{debug, info};

/// Fetch command runner
///
/// 1. Set up logging and build the run configuration
/// 2. Run the fetch pipeline against the live API with the system clock
/// 3. Print the summary report
pub async fn run_fetch(args: FetchArgs) -> Result<FetchStats> {
    setup_logging(args.get_log_level())?;

    info!("Starting tide fetcher");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config()?;
    debug!("Run configuration: {:?}", config);

    let client = ApiClient::new(&config)?;
    let stats = run_pipeline(&config, &client, &SystemClock, args.show_progress()).await?;

    if !args.quiet {
        print_fetch_report(&config, &stats);
    }

    Ok(stats)
}
