//! Command implementations for the GSL birds CLI.
//!
//! Provides subcommands for building plot-ready series from the bird
//! observation and climate datasets, and for running the timed monthly
//! replay.

use clap::Subcommand;
use gsl_core::region::Species;

pub mod climate;
pub mod fetch;
pub mod replay;
pub mod series;

#[derive(Subcommand)]
pub enum Command {
    /// Build the normalized monthly species series from a GeoJSON export
    Series {
        /// Path to the observation GeoJSON file
        #[arg(short, long)]
        input: String,

        /// Output path for the series (CSV, or JSON with --json)
        #[arg(short, long)]
        output: String,

        /// Also write the moving-average trend column
        #[arg(long)]
        smoothed: bool,

        /// Moving-average window, in monthly buckets
        #[arg(long, default_value_t = gsl_data::smooth::DEFAULT_WINDOW)]
        window: usize,

        /// Write JSON instead of CSV
        #[arg(long)]
        json: bool,
    },

    /// Parse and normalize the ONI / SST climate overlay files
    Climate {
        /// Path to the ONI index file
        #[arg(long)]
        oni: Option<String>,

        /// Path to the SST anomaly file
        #[arg(long)]
        sst: Option<String>,

        /// Output path for the combined overlay CSV
        #[arg(short, long)]
        output: String,
    },

    /// Parse the lake elevation series, optionally interpolating one year
    Elevation {
        /// Path to the tab-delimited elevation file
        #[arg(short, long)]
        input: String,

        /// Interpolate the elevation at this (fractional) year
        #[arg(long)]
        at: Option<f64>,
    },

    /// Compare two years of normalized monthly averages
    Compare {
        /// Path to the observation GeoJSON file
        #[arg(short, long)]
        input: String,

        #[arg(long, default_value_t = 2004)]
        year1: i32,

        #[arg(long, default_value_t = 2023)]
        year2: i32,
    },

    /// Run the timed observation replay against a logging frame sink
    Replay {
        /// Dataset root: a directory or an http(s) base URL
        #[arg(short, long)]
        root: String,

        /// Which dataset to replay: pelican or grebe
        #[arg(short, long, default_value = "pelican")]
        species: Species,

        /// Milliseconds between replay ticks
        #[arg(long, default_value_t = 50)]
        tick_ms: u64,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Series {
            input,
            output,
            smoothed,
            window,
            json,
        } => series::run_series(&input, &output, smoothed, window, json),
        Command::Climate { oni, sst, output } => {
            climate::run_climate(oni.as_deref(), sst.as_deref(), &output)
        }
        Command::Elevation { input, at } => climate::run_elevation(&input, at),
        Command::Compare {
            input,
            year1,
            year2,
        } => series::run_compare(&input, year1, year2),
        Command::Replay {
            root,
            species,
            tick_ms,
        } => replay::run_replay(&root, species, tick_ms).await,
    }
}
