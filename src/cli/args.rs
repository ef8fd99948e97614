//! Command-line argument definitions for the tide fetcher
//!
//! Defines the CLI interface using the clap derive API. Flags override the
//! compiled-in defaults from [`crate::constants`]; there is no config-file
//! or environment-variable surface in this version.

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use crate::{FetchConfig, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the tide fetcher
///
/// Archives tide-gauge readings from the Environment Agency flood-monitoring
/// API as JSON files, one per station, plus a station summary for a web
/// dropdown.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tide-fetcher",
    version,
    about = "Archive UK tide-gauge readings from the flood-monitoring API as JSON files",
    long_about = "Fetches the list of tide monitoring stations from the Environment Agency \
                  flood-monitoring API, downloads each station's readings from a fixed start \
                  date through today (UTC), and writes one JSON file per station plus a \
                  stations.json summary used to populate a web-page dropdown."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the tide fetcher
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch readings for every station and write the JSON archive (main command)
    Fetch(FetchArgs),
    /// List monitoring stations without writing any reading files
    Stations(StationsArgs),
}

/// Arguments for the fetch command (main archiving run)
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Base URL of the flood-monitoring API
    ///
    /// Mostly useful for pointing a run at a local test endpoint.
    #[arg(
        long = "base-url",
        value_name = "URL",
        help = "Base URL of the flood-monitoring API"
    )]
    pub base_url: Option<String>,

    /// First day of the requested reading range (YYYY-MM-DD)
    ///
    /// The end of the range is always the current UTC calendar date.
    #[arg(
        short = 's',
        long = "start-date",
        value_name = "DATE",
        help = "First day of the requested reading range (YYYY-MM-DD)"
    )]
    pub start_date: Option<NaiveDate>,

    /// Output directory for per-station files and the station summary
    ///
    /// Will be created if it doesn't exist. Existing files are overwritten.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for the JSON archive"
    )]
    pub output_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_HTTP_TIMEOUT_SECS,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout_secs: u64,

    /// Disable the per-station progress bar
    #[arg(long = "no-progress", help = "Disable the per-station progress bar")]
    pub no_progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and disables the
    /// progress bar and final report.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the stations command (listing without archiving)
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// Base URL of the flood-monitoring API
    #[arg(
        long = "base-url",
        value_name = "URL",
        help = "Base URL of the flood-monitoring API"
    )]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_HTTP_TIMEOUT_SECS,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout_secs: u64,

    /// Output format for the station listing
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the station listing"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the stations listing
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl FetchArgs {
    /// Build the run configuration from defaults plus CLI overrides
    pub fn to_config(&self) -> Result<FetchConfig> {
        let mut config = FetchConfig::default().with_http_timeout_secs(self.timeout_secs);

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(start_date) = self.start_date {
            config = config.with_start_date(start_date);
        }
        if let Some(output_dir) = &self.output_dir {
            config = config.with_output_dir(output_dir.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the progress bar (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

impl StationsArgs {
    /// Build the run configuration from defaults plus CLI overrides
    pub fn to_config(&self) -> Result<FetchConfig> {
        let mut config = FetchConfig::default().with_http_timeout_secs(self.timeout_secs);

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            base_url: None,
            start_date: None,
            output_dir: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            no_progress: false,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_API_BASE_URL;

    #[test]
    fn test_fetch_args_defaults_to_compiled_config() {
        let args = FetchArgs::default();
        let config = args.to_config().unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.output_dir, PathBuf::from("data"));
        assert_eq!(config.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    }

    #[test]
    fn test_fetch_args_overrides_apply() {
        let args = FetchArgs {
            base_url: Some("http://localhost:9090/api/".to_string()),
            start_date: Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()),
            output_dir: Some(PathBuf::from("/tmp/tides")),
            timeout_secs: 5,
            ..Default::default()
        };

        let config = args.to_config().unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9090/api");
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(config.output_dir, PathBuf::from("/tmp/tides"));
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    fn test_fetch_args_rejects_invalid_overrides() {
        let args = FetchArgs {
            base_url: Some("not-a-url".to_string()),
            ..Default::default()
        };
        assert!(args.to_config().is_err());

        let args = FetchArgs {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(args.to_config().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = FetchArgs::default();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = FetchArgs::default();
        assert!(args.show_progress());

        args.no_progress = true;
        assert!(!args.show_progress());

        args.no_progress = false;
        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_cli_parses_fetch_command() {
        let args = Args::parse_from([
            "tide-fetcher",
            "fetch",
            "--start-date",
            "2025-08-01",
            "--output",
            "archive",
            "-v",
        ]);

        match args.get_command() {
            Commands::Fetch(fetch) => {
                assert_eq!(
                    fetch.start_date,
                    Some(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
                );
                assert_eq!(fetch.output_dir, Some(PathBuf::from("archive")));
                assert_eq!(fetch.verbose, 1);
            }
            other => panic!("Expected fetch command, got {:?}", other),
        }
    }
}
