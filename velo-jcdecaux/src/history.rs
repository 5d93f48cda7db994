//! Append-only CSV history of station snapshots.
//!
//! The collector appends one row per station per poll. The file is created
//! with a header row on first write and extended without headers afterwards,
//! so repeated polls accumulate into a single table.

use crate::error::Result;
use crate::snapshot::{Snapshot, TIME_FORMAT};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::Read;
use std::path::Path;

/// Column order of the history file.
pub const HEADER: [&str; 8] = [
    "number",
    "name",
    "address",
    "position",
    "status",
    "main_stands",
    "total_stands",
    "snapshot_time",
];

/// Load the full history into an owned vector.
pub fn load_history(path: impl AsRef<Path>) -> Result<Vec<Snapshot>> {
    let file = std::fs::File::open(path)?;
    load_from_reader(file)
}

/// Load history rows from any reader (headers expected on the first line).
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Snapshot>> {
    ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader)
        .records()
        .map(|record| record?.try_into())
        .collect()
}

/// Append snapshots to the history file, creating it with a header row if
/// it does not exist yet.
pub fn append_snapshots(path: impl AsRef<Path>, snapshots: &[Snapshot]) -> Result<()> {
    let path = path.as_ref();
    let write_header = !path.exists();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    if write_header {
        writer.write_record(HEADER)?;
    }
    for snapshot in snapshots {
        writer.write_record(&[
            snapshot.number.to_string(),
            snapshot.name.clone(),
            snapshot.address.clone(),
            snapshot.position.clone(),
            snapshot.status.clone(),
            snapshot.main_stands.clone(),
            snapshot.total_stands.clone(),
            snapshot.snapshot_time.format(TIME_FORMAT).to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
