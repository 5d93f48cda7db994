//! Snapshot collection from the JCDecaux VLS API.

use chrono::Local;
use log::info;
use velo_jcdecaux::client::{fetch_stations, ApiConfig};
use velo_jcdecaux::history;
use velo_jcdecaux::snapshot::Snapshot;

/// Fetch the current state of every station in the configured contract and
/// append one row per station to the history file.
pub async fn run_collect(history_csv: &str) -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let stations = fetch_stations(&client, &config).await?;
    let snapshot_time = Local::now().naive_local();

    let snapshots = stations
        .into_iter()
        .map(|station| Snapshot::from_api(station, snapshot_time))
        .collect::<Result<Vec<_>, _>>()?;

    history::append_snapshots(history_csv, &snapshots)?;

    info!(
        "Snapshot of {} stations recorded at {}",
        snapshots.len(),
        snapshot_time.format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}
