//! Core data structures for tide archiving.
//!
//! Defines the station descriptor, the stations collection envelope, the
//! `{id, label}` summary entry, and the per-run statistics reported by the
//! pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

/// A monitoring station as returned by the stations collection endpoint
///
/// Only `notation` and `label` are interpreted locally. Every other field
/// the API returns is carried opaquely in `extra` since the upstream payload
/// shape is not contractually guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Stable station identifier, used as the filename key
    pub notation: String,

    /// Human-readable station name
    pub label: String,

    /// Remaining upstream fields, passed through unvalidated
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope of the stations collection response
///
/// A response without an `items` key deserializes to an empty station list.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsResponse {
    #[serde(default)]
    pub items: Vec<Station>,
}

/// One `{id, label}` entry of the station summary consumed by the dropdown UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSummary {
    pub id: String,
    pub label: String,
}

impl From<&Station> for StationSummary {
    fn from(station: &Station) -> Self {
        Self {
            id: station.notation.clone(),
            label: station.label.clone(),
        }
    }
}

/// Statistics for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct FetchStats {
    /// Number of stations returned by the stations endpoint
    pub stations_found: usize,

    /// Number of stations whose readings were fetched and saved
    pub readings_saved: usize,

    /// Number of stations skipped after a fetch or save failure
    pub stations_failed: usize,

    /// Failure detail for each skipped station, in encounter order
    pub failures: Vec<StationFailure>,

    /// Total pipeline wall-clock time
    pub processing_time: Duration,
}

/// Record of a single per-station failure
#[derive(Debug, Clone)]
pub struct StationFailure {
    pub station_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_station_carries_extra_fields_through() {
        let raw = json!({
            "notation": "E72639",
            "label": "Bournemouth",
            "lat": 50.714,
            "long": -1.874,
            "measures": [{"parameter": "level"}]
        });

        let station: Station = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(station.notation, "E72639");
        assert_eq!(station.label, "Bournemouth");
        assert_eq!(station.extra.len(), 3);

        // Round-trips back to the original object
        let reserialized = serde_json::to_value(&station).unwrap();
        assert_eq!(reserialized, raw);
    }

    #[test]
    fn test_station_requires_notation_and_label() {
        let missing_notation = json!({"label": "Bournemouth"});
        assert!(serde_json::from_value::<Station>(missing_notation).is_err());

        let missing_label = json!({"notation": "E72639"});
        assert!(serde_json::from_value::<Station>(missing_label).is_err());
    }

    #[test]
    fn test_stations_response_tolerates_missing_items() {
        let response: StationsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.items.is_empty());

        let response: StationsResponse =
            serde_json::from_value(json!({"items": [{"notation": "A1", "label": "Alpha"}]}))
                .unwrap();
        assert_eq!(response.items.len(), 1);
    }

    #[test]
    fn test_summary_derived_from_station() {
        let station: Station =
            serde_json::from_value(json!({"notation": "A1", "label": "Alpha", "lat": 50.0}))
                .unwrap();

        let summary = StationSummary::from(&station);
        assert_eq!(summary.id, "A1");
        assert_eq!(summary.label, "Alpha");

        // The summary serializes to exactly {id, label}
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({"id": "A1", "label": "Alpha"})
        );
    }
}
