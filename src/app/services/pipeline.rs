//! Sequential fetch-then-save pipeline.
//!
//! Lists stations once, then fetches and saves each station's readings in
//! list order, one at a time. A per-station failure is logged and skipped;
//! the run finishes by writing the dropdown summary for every listed station
//! regardless of how many individual fetches failed.

use crate::app::services::api_client::TideApi;
use crate::app::services::archive_writer;
use crate::clock::Clock;
use crate::models::{FetchStats, Station, StationFailure};
use crate::{Error, FetchConfig, Result};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run the full fetch pipeline
///
/// 1. List all monitoring stations (fatal on failure)
/// 2. For each station, fetch readings from `config.start_date` through the
///    clock's current UTC date and save the payload (failures logged,
///    pipeline continues)
/// 3. Write the `{id, label}` summary for the complete station list
pub async fn run_pipeline<A, C>(
    config: &FetchConfig,
    api: &A,
    clock: &C,
    show_progress: bool,
) -> Result<FetchStats>
where
    A: TideApi,
    C: Clock,
{
    let start_time = Instant::now();

    info!("Fetching tide stations from {}", config.api_base_url);
    let stations = api.list_stations().await?;
    info!("Found {} stations", stations.len());

    let mut stats = FetchStats {
        stations_found: stations.len(),
        ..Default::default()
    };

    let end_date = clock.today_utc();
    debug!(
        "Requesting readings from {} through {}",
        config.start_date, end_date
    );

    let progress = show_progress.then(|| create_progress_bar(stations.len() as u64));

    for station in &stations {
        debug!("Fetching readings for station {}", station.notation);
        if let Some(pb) = &progress {
            pb.set_message(station.notation.clone());
        }

        match fetch_and_save(config, api, station, end_date).await {
            Ok(path) => {
                debug!("Saved {} to {}", station.notation, path.display());
                stats.readings_saved += 1;
            }
            Err(e) => {
                warn!("Failed to fetch/save station {}: {}", station.notation, e);
                stats.stations_failed += 1;
                stats.failures.push(StationFailure {
                    station_id: station.notation.clone(),
                    message: e.to_string(),
                });
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    // The summary covers every listed station, failed fetches included, so
    // the dropdown stays complete even for stations without fresh readings.
    let summary_path = archive_writer::write_stations_summary(config, &stations)?;
    info!("Wrote station summary to {}", summary_path.display());

    stats.processing_time = start_time.elapsed();
    Ok(stats)
}

/// Fetch one station's readings and persist them
async fn fetch_and_save<A: TideApi>(
    config: &FetchConfig,
    api: &A,
    station: &Station,
    end_date: NaiveDate,
) -> Result<PathBuf> {
    let payload = api
        .fetch_readings(&station.notation, config.start_date, end_date)
        .await
        .map_err(|e| Error::station_readings(&station.notation, e))?;

    archive_writer::save_station_payload(config, &station.notation, &payload)
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}
