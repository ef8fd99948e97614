//! HTTP client for the flood-monitoring API.
//!
//! Thin wrapper around `reqwest` issuing the two GET requests the pipeline
//! needs: the stations collection and per-station readings. No
//! authentication, pagination, or retry handling; the API is public and the
//! pipeline treats every response body as opaque JSON.

use crate::constants::{API_DATE_FORMAT, USER_AGENT};
use crate::models::{Station, StationsResponse};
use crate::{Error, FetchConfig, Result};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

/// Remote API surface used by the pipeline
///
/// [`ApiClient`] is the production implementation. Tests substitute an
/// in-memory double so pipeline behavior can be exercised without a network.
#[allow(async_fn_in_trait)]
pub trait TideApi {
    /// Fetch the full list of monitoring stations
    async fn list_stations(&self) -> Result<Vec<Station>>;

    /// Fetch the raw readings payload for one station over a date range
    async fn fetch_readings(
        &self,
        station_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Value>;
}

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// URL of the stations collection endpoint
    fn stations_url(&self) -> String {
        format!("{}/id/stations", self.base_url)
    }

    /// URL of the readings endpoint for one station and date range
    fn readings_url(&self, station_id: &str, start_date: NaiveDate, end_date: NaiveDate) -> String {
        format!(
            "{}/id/stations/{}/readings?startdate={}&enddate={}",
            self.base_url,
            station_id,
            start_date.format(API_DATE_FORMAT),
            end_date.format(API_DATE_FORMAT)
        )
    }

    /// Issue a GET request and parse the response body as JSON
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::api_status(url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(url, e))?;

        serde_json::from_str(&body).map_err(|e| Error::response_parsing(url, e))
    }
}

impl TideApi for ApiClient {
    async fn list_stations(&self) -> Result<Vec<Station>> {
        let url = self.stations_url();
        let payload = self.get_json(&url).await?;

        let response: StationsResponse =
            serde_json::from_value(payload).map_err(|e| Error::response_parsing(&url, e))?;

        debug!("Stations endpoint returned {} items", response.items.len());
        Ok(response.items)
    }

    async fn fetch_readings(
        &self,
        station_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Value> {
        let url = self.readings_url(station_id, start_date, end_date);
        self.get_json(&url).await
    }
}
