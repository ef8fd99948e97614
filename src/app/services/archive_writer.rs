//! Filesystem persistence for fetched payloads.
//!
//! Writes one `<notation>.json` per station containing the raw readings
//! payload, plus the `stations.json` summary read by the web-page dropdown.
//! All files are UTF-8, 2-space-indented JSON, overwritten in place on every
//! run. Writes are not atomic; a crash mid-write can leave a truncated file.

use crate::models::{Station, StationSummary};
use crate::{Error, FetchConfig, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write one station's raw readings payload to `<output_dir>/<station_id>.json`
///
/// Creates the output directory if it does not exist and overwrites any
/// existing file of the same name. Returns the path written.
pub fn save_station_payload(
    config: &FetchConfig,
    station_id: &str,
    payload: &Value,
) -> Result<PathBuf> {
    ensure_output_dir(config)?;

    let path = config.station_payload_path(station_id);
    write_json_file(&path, payload)?;

    debug!("Saved readings payload to {}", path.display());
    Ok(path)
}

/// Write the ordered `{id, label}` summary for all stations
///
/// One entry per station, in list order, regardless of whether that
/// station's readings were fetched successfully. An empty station list
/// produces an empty JSON array. Returns the path written.
pub fn write_stations_summary(config: &FetchConfig, stations: &[Station]) -> Result<PathBuf> {
    ensure_output_dir(config)?;

    let summary: Vec<StationSummary> = stations.iter().map(StationSummary::from).collect();
    let path = config.stations_summary_path();
    write_json_file(&path, &summary)?;

    debug!("Saved summary of {} stations to {}", summary.len(), path.display());
    Ok(path)
}

fn ensure_output_dir(config: &FetchConfig) -> Result<()> {
    fs::create_dir_all(&config.output_dir).map_err(|e| {
        Error::io(
            format!(
                "Failed to create output directory '{}'",
                config.output_dir.display()
            ),
            e,
        )
    })
}

fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization(format!("Failed to serialize '{}'", path.display()), e))?;

    fs::write(path, body)
        .map_err(|e| Error::io(format!("Failed to write '{}'", path.display()), e))
}
