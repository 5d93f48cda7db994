//! Flattened history export for ad-hoc table exploration.
//!
//! Unpacks the serialized position and stands cells into plain columns so
//! the history can be dropped straight into a spreadsheet or table viewer.
//! Cells that fail to parse become empty columns, not zeros.

use csv::Writer;
use log::info;
use velo_jcdecaux::history;
use velo_jcdecaux::snapshot::TIME_FORMAT;

/// Column order of the flattened exploration CSV.
const EXPORT_HEADER: [&str; 9] = [
    "number",
    "name",
    "address",
    "latitude",
    "longitude",
    "status",
    "bikes_available",
    "capacity",
    "snapshot_time",
];

pub fn run_export(history_csv: &str, output: &str) -> anyhow::Result<()> {
    let snapshots = history::load_history(history_csv)?;

    let mut writer = Writer::from_path(output)?;
    writer.write_record(EXPORT_HEADER)?;
    for snapshot in &snapshots {
        let (latitude, longitude) = snapshot
            .coordinates()
            .map(|(latitude, longitude)| (latitude.to_string(), longitude.to_string()))
            .unwrap_or_default();
        let bikes = snapshot
            .total_bikes_available()
            .map_or(String::new(), |bikes| bikes.to_string());
        let capacity = snapshot
            .capacity()
            .map_or(String::new(), |capacity| capacity.to_string());
        writer.write_record(&[
            snapshot.number.to_string(),
            snapshot.name.clone(),
            snapshot.address.clone(),
            latitude,
            longitude,
            snapshot.status.clone(),
            bikes,
            capacity,
            snapshot.snapshot_time.format(TIME_FORMAT).to_string(),
        ])?;
    }
    writer.flush()?;

    info!("{} rows exported to {}", snapshots.len(), output);
    Ok(())
}
