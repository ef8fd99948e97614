//! Constants and default values for the tide fetcher.
//!
//! Defaults for the API endpoint, date range, and output layout. All of
//! these can be overridden through [`crate::config::FetchConfig`] or the
//! corresponding CLI flags.

/// Default base URL of the Environment Agency flood-monitoring API
pub const DEFAULT_API_BASE_URL: &str = "https://environment.data.gov.uk/flood-monitoring";

/// Default first day of the requested reading range (ISO `YYYY-MM-DD`)
pub const DEFAULT_START_DATE: &str = "2025-08-01";

/// Default directory receiving the per-station JSON files and the summary
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Filename of the station summary consumed by the web-page dropdown
pub const STATIONS_SUMMARY_FILENAME: &str = "stations.json";

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Date format used by the readings endpoint query parameters
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// User agent sent with every API request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
