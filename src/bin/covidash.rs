//! covidash - Terminal dashboard over three COVID-19 CSV datasets.
//!
//! Loads `covid.csv`, `covid_grouped.csv`, and `coviddeath.csv` from a data
//! directory, prepares every view once, and opens a tabbed TUI.
//!
//! Usage:
//!   covidash              # datasets in the current directory
//!   covidash ./data       # datasets in ./data
//!   covidash -t 500 data  # slower animation playback

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use covidash::data::Datasets;
use covidash::tui::App;

/// Terminal dashboard for COVID-19 datasets.
#[derive(Parser)]
#[command(name = "covidash", about = "COVID-19 dataset dashboard", version)]
struct Args {
    /// Directory holding covid.csv, covid_grouped.csv and coviddeath.csv.
    #[arg(value_name = "DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Tick interval in milliseconds; drives animation playback speed.
    #[arg(short = 't', long = "tick", default_value = "250", value_name = "MS")]
    tick: u64,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("covidash={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    info!("covidash {} starting", env!("CARGO_PKG_VERSION"));
    info!("loading datasets from {}", args.data_dir.display());

    // Loaded exactly once; everything downstream borrows these tables.
    let datasets = match Datasets::load(&args.data_dir) {
        Ok(datasets) => datasets,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::new(datasets);
    let tick_rate = Duration::from_millis(args.tick.max(50));

    if let Err(e) = app.run(tick_rate) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
