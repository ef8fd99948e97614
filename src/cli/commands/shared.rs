//! Shared components for CLI commands
//!
//! Logging setup and report rendering used by both subcommands.

use crate::models::FetchStats;
use crate::{FetchConfig, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use tracing::debug;

/// Set up structured logging to stderr
///
/// `RUST_LOG` takes precedence over the CLI-derived level when set.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tide_fetcher={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the end-of-run summary for a fetch command
pub fn print_fetch_report(config: &FetchConfig, stats: &FetchStats) {
    println!("\nTide archive complete");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • Stations found: {}", stats.stations_found);
    println!(
        "   • Readings saved: {}",
        stats.readings_saved.to_string().green()
    );

    if stats.stations_failed > 0 {
        println!(
            "   • Stations failed: {}",
            stats.stations_failed.to_string().red()
        );
        for failure in &stats.failures {
            println!("     ✖ {}: {}", failure.station_id, failure.message);
        }
    }

    println!("   • Output directory: {}", config.output_dir.display());
    println!(
        "   • Processing time: {}",
        HumanDuration(stats.processing_time)
    );
    println!();
}
