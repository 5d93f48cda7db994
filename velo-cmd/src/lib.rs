//! Command implementations for the velo CLI.
//!
//! Provides subcommands for collecting JCDecaux station snapshots and for
//! turning the collected history into renderer-ready artifacts.

use clap::Subcommand;

pub mod collect;
pub mod export;
pub mod map;
pub mod stats;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch one snapshot of all stations and append it to the history CSV
    Collect {
        /// Path to the station history CSV (created on first run)
        #[arg(short = 'c', long)]
        history_csv: String,
    },

    /// Build the time-slider map GeoJSON from the history CSV
    Map {
        /// Path to the station history CSV
        #[arg(short = 'c', long)]
        history_csv: String,

        /// Output path for the TimestampedGeoJson document
        #[arg(short = 'o', long)]
        output: String,

        /// Grid step in minutes
        #[arg(long, default_value_t = velo_data::time_grid::DEFAULT_STEP_MINUTES)]
        step_minutes: i64,

        /// Percentile of bike counts mapped to the green end of the gradient
        #[arg(long, default_value_t = velo_data::color::DEFAULT_PERCENTILE)]
        percentile: f64,
    },

    /// Print per-station statistics from the history CSV
    Stats {
        /// Path to the station history CSV
        #[arg(short = 'c', long)]
        history_csv: String,

        /// Station number; omit to print the whole roster
        #[arg(short = 's', long)]
        station: Option<u32>,
    },

    /// Write a flattened per-snapshot CSV for ad-hoc exploration
    Export {
        /// Path to the station history CSV
        #[arg(short = 'c', long)]
        history_csv: String,

        /// Output path for the flattened CSV
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Collect { history_csv } => collect::run_collect(&history_csv).await,
        Command::Map {
            history_csv,
            output,
            step_minutes,
            percentile,
        } => map::run_map(&history_csv, &output, step_minutes, percentile),
        Command::Stats {
            history_csv,
            station,
        } => stats::run_stats(&history_csv, station),
        Command::Export {
            history_csv,
            output,
        } => export::run_export(&history_csv, &output),
    }
}
