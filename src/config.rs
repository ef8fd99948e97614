//! Configuration management and validation.
//!
//! Provides the run configuration passed into the fetch pipeline: API
//! endpoint, reading date range start, output locations, and HTTP client
//! settings. Tests substitute their own values to point the pipeline at a
//! temporary directory or an API double.

use crate::constants::{
    API_DATE_FORMAT, DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_OUTPUT_DIR,
    DEFAULT_START_DATE, STATIONS_SUMMARY_FILENAME,
};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration for a fetch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL of the flood-monitoring API, without a trailing slash
    pub api_base_url: String,

    /// First day of the requested reading range (inclusive)
    pub start_date: NaiveDate,

    /// Directory receiving per-station files and the station summary
    pub output_dir: PathBuf,

    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            start_date: NaiveDate::parse_from_str(DEFAULT_START_DATE, API_DATE_FORMAT)
                .expect("default start date is a valid ISO date"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl FetchConfig {
    /// Create configuration with a custom API base URL
    ///
    /// A trailing slash is stripped so endpoint paths can be appended
    /// uniformly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.api_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Create configuration with a custom reading range start date
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Create configuration with a custom output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Create configuration with a custom HTTP timeout
    pub fn with_http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }

    /// HTTP request timeout as a [`Duration`]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Path of the per-station payload file for `station_id`
    pub fn station_payload_path(&self, station_id: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", station_id))
    }

    /// Path of the station summary file
    pub fn stations_summary_path(&self) -> PathBuf {
        self.output_dir.join(STATIONS_SUMMARY_FILENAME)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(Error::configuration("API base URL cannot be empty"));
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(Error::configuration(format!(
                "API base URL must start with http:// or https://: {}",
                self.api_base_url
            )));
        }

        if self.http_timeout_secs == 0 {
            return Err(Error::configuration(
                "HTTP timeout must be greater than 0 seconds",
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::configuration("Output directory cannot be empty"));
        }

        Ok(())
    }
}
