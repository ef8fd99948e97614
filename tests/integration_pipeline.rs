//! Integration tests for the fetch pipeline
//!
//! Drives the full pipeline (list, fetch, save, summary) against an
//! in-memory API double and a temporary output directory, verifying the
//! on-disk archive the run produces.

use chrono::NaiveDate;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;
use tide_fetcher::app::services::api_client::TideApi;
use tide_fetcher::app::services::pipeline::run_pipeline;
use tide_fetcher::clock::FixedClock;
use tide_fetcher::models::Station;
use tide_fetcher::{Error, FetchConfig, Result};

/// In-memory stand-in for the flood-monitoring API
///
/// Stations without an entry in `readings` fail their fetch, mimicking a
/// per-station HTTP error.
#[derive(Default)]
struct FakeApi {
    stations: Vec<Station>,
    readings: HashMap<String, Value>,
    fail_listing: bool,
    calls: Mutex<Vec<(String, NaiveDate, NaiveDate)>>,
}

impl TideApi for FakeApi {
    async fn list_stations(&self) -> Result<Vec<Station>> {
        if self.fail_listing {
            return Err(Error::api_status(
                "http://fake/id/stations",
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Ok(self.stations.clone())
    }

    async fn fetch_readings(
        &self,
        station_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((station_id.to_string(), start_date, end_date));

        self.readings.get(station_id).cloned().ok_or_else(|| {
            Error::api_status(
                format!("http://fake/id/stations/{}/readings", station_id),
                reqwest::StatusCode::NOT_FOUND,
            )
        })
    }
}

fn station(notation: &str, label: &str) -> Station {
    Station {
        notation: notation.to_string(),
        label: label.to_string(),
        extra: Map::new(),
    }
}

fn config_in(dir: &TempDir) -> FetchConfig {
    FetchConfig::default()
        .with_base_url("http://fake")
        .with_output_dir(dir.path())
        .with_start_date(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
}

fn fixed_clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 8, 5).unwrap())
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_single_station_run_produces_expected_archive() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);

    let payload = json!({
        "items": [{"dateTime": "2025-08-01T00:00:00Z", "value": 1.23}]
    });

    let api = FakeApi {
        stations: vec![station("A1", "Alpha")],
        readings: HashMap::from([("A1".to_string(), payload.clone())]),
        ..Default::default()
    };

    let stats = run_pipeline(&config, &api, &fixed_clock(), false)
        .await
        .unwrap();

    assert_eq!(stats.stations_found, 1);
    assert_eq!(stats.readings_saved, 1);
    assert_eq!(stats.stations_failed, 0);

    // The payload file contains exactly the fetched payload
    assert_eq!(read_json(&config.station_payload_path("A1")), payload);

    // The summary is the ordered {id, label} projection
    assert_eq!(
        read_json(&config.stations_summary_path()),
        json!([{"id": "A1", "label": "Alpha"}])
    );
}

#[tokio::test]
async fn test_readings_request_uses_configured_range_and_clock() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);

    let api = FakeApi {
        stations: vec![station("A1", "Alpha")],
        readings: HashMap::from([("A1".to_string(), json!({"items": []}))]),
        ..Default::default()
    };

    run_pipeline(&config, &api, &fixed_clock(), false)
        .await
        .unwrap();

    let calls = api.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![(
            "A1".to_string(),
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
        )]
    );
}

#[tokio::test]
async fn test_failed_station_does_not_stop_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);

    // B2 has no readings entry, so its fetch fails
    let api = FakeApi {
        stations: vec![
            station("A1", "Alpha"),
            station("B2", "Beta"),
            station("C3", "Gamma"),
        ],
        readings: HashMap::from([
            ("A1".to_string(), json!({"items": [{"value": 1.0}]})),
            ("C3".to_string(), json!({"items": [{"value": 3.0}]})),
        ]),
        ..Default::default()
    };

    let stats = run_pipeline(&config, &api, &fixed_clock(), false)
        .await
        .unwrap();

    assert_eq!(stats.stations_found, 3);
    assert_eq!(stats.readings_saved, 2);
    assert_eq!(stats.stations_failed, 1);
    assert_eq!(stats.failures.len(), 1);
    assert_eq!(stats.failures[0].station_id, "B2");

    // Stations after the failure were still processed
    assert!(config.station_payload_path("A1").exists());
    assert!(!config.station_payload_path("B2").exists());
    assert!(config.station_payload_path("C3").exists());

    // The summary covers every listed station, in list order
    assert_eq!(
        read_json(&config.stations_summary_path()),
        json!([
            {"id": "A1", "label": "Alpha"},
            {"id": "B2", "label": "Beta"},
            {"id": "C3", "label": "Gamma"},
        ])
    );
}

#[tokio::test]
async fn test_zero_stations_completes_with_empty_summary() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);

    let api = FakeApi::default();

    let stats = run_pipeline(&config, &api, &fixed_clock(), false)
        .await
        .unwrap();

    assert_eq!(stats.stations_found, 0);
    assert_eq!(stats.readings_saved, 0);
    assert_eq!(stats.stations_failed, 0);

    assert_eq!(
        fs::read_to_string(config.stations_summary_path()).unwrap(),
        "[]"
    );

    // The summary is the only file written
    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["stations.json"]);
}

#[tokio::test]
async fn test_rerun_with_identical_responses_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);

    let api = FakeApi {
        stations: vec![station("A1", "Alpha")],
        readings: HashMap::from([("A1".to_string(), json!({"items": [{"value": 1.23}]}))]),
        ..Default::default()
    };

    run_pipeline(&config, &api, &fixed_clock(), false)
        .await
        .unwrap();
    let payload_first = fs::read(config.station_payload_path("A1")).unwrap();
    let summary_first = fs::read(config.stations_summary_path()).unwrap();

    run_pipeline(&config, &api, &fixed_clock(), false)
        .await
        .unwrap();
    let payload_second = fs::read(config.station_payload_path("A1")).unwrap();
    let summary_second = fs::read(config.stations_summary_path()).unwrap();

    assert_eq!(payload_first, payload_second);
    assert_eq!(summary_first, summary_second);
}

#[tokio::test]
async fn test_listing_failure_aborts_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);

    let api = FakeApi {
        fail_listing: true,
        ..Default::default()
    };

    let result = run_pipeline(&config, &api, &fixed_clock(), false).await;
    assert!(matches!(result, Err(Error::ApiStatus { .. })));

    // Nothing was written, not even the summary
    assert!(!config.stations_summary_path().exists());
}
