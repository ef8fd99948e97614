use clap::Parser;
use std::process;
use tide_fetcher::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Tide Fetcher - Environment Agency Tide Gauge Archiver");
    println!("=====================================================");
    println!();
    println!("Fetch tide-gauge station readings from the UK flood-monitoring API");
    println!("and archive them as JSON files for a station-picker web page.");
    println!();
    println!("USAGE:");
    println!("    tide-fetcher <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Fetch readings for every station and write the archive");
    println!("    stations    List monitoring stations without writing any files");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Archive readings from the default start date into ./data:");
    println!("    tide-fetcher fetch");
    println!();
    println!("    # Archive a custom range into a custom directory:");
    println!("    tide-fetcher fetch --start-date 2025-07-01 --output archive");
    println!();
    println!("    # Preview the station list as JSON:");
    println!("    tide-fetcher stations --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    tide-fetcher <COMMAND> --help");
}
