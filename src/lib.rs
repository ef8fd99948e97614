//! Tide Fetcher Library
//!
//! A Rust library for archiving tide-gauge station metadata and readings from
//! the UK Environment Agency flood-monitoring API as JSON files on local disk.
//!
//! This library provides tools for:
//! - Listing monitoring stations from the public flood-monitoring API
//! - Fetching per-station readings over a configurable date range
//! - Persisting raw reading payloads verbatim, one JSON file per station
//! - Writing an ordered `{id, label}` station summary for a dropdown UI
//! - Structured logging and contextual error handling throughout

pub mod clock;
pub mod config;
pub mod constants;
pub mod models;

// Core application modules
pub mod app {
    pub mod services {
        pub mod api_client;
        pub mod archive_writer;
        pub mod pipeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::FetchConfig;
pub use models::{Station, StationSummary};

/// Result type alias for the tide fetcher
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tide archiving operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP transport failure (connection refused, timeout, body read)
    #[error("HTTP request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// API responded with a non-success status code
    #[error("API returned {status} for '{url}'")]
    ApiStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body was not the JSON shape we expected
    #[error("Invalid JSON response from '{url}': {source}")]
    ResponseParsing {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Readings fetch failed for one station
    #[error("Failed to fetch readings for station '{station_id}': {source}")]
    StationReadings {
        station_id: String,
        #[source]
        source: Box<Error>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("JSON serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a transport error with the request URL
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create an error for a non-success HTTP status
    pub fn api_status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::ApiStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a response parsing error with the request URL
    pub fn response_parsing(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ResponseParsing {
            url: url.into(),
            source,
        }
    }

    /// Create a per-station readings error wrapping the underlying cause
    pub fn station_readings(station_id: impl Into<String>, source: Error) -> Self {
        Self::StationReadings {
            station_id: station_id.into(),
            source: Box::new(source),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
