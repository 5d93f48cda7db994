//! Time-slider map export.
//!
//! Loads the snapshot history, resamples every station onto a shared
//! fixed-interval grid with carry-forward filling, colors each grid point
//! on the red→yellow→green scale and writes the TimestampedGeoJson
//! document the map renderer animates.

use chrono::Duration;
use log::{info, warn};
use std::collections::HashMap;
use velo_data::color::{ColorBounds, VMAX_FLOOR};
use velo_data::regularize::{regularize, TimedValue};
use velo_data::timeline::{bike_feature, FeatureCollection};
use velo_jcdecaux::history;
use velo_jcdecaux::snapshot::Snapshot;

pub fn run_map(
    history_csv: &str,
    output: &str,
    step_minutes: i64,
    percentile: f64,
) -> anyhow::Result<()> {
    anyhow::ensure!(step_minutes > 0, "grid step must be positive");

    let snapshots = history::load_history(history_csv)?;
    info!("{} snapshots loaded from {}", snapshots.len(), history_csv);

    // carry whole rows forward so a filled grid point keeps its station's
    // name and position along with the counts
    let series_by_station: HashMap<u32, Vec<TimedValue<Snapshot>>> =
        Snapshot::vector_to_hashmap(snapshots)
            .into_iter()
            .map(|(station, rows)| {
                let series = rows
                    .into_iter()
                    .map(|snapshot| TimedValue {
                        time: snapshot.snapshot_time,
                        value: snapshot,
                    })
                    .collect();
                (station, series)
            })
            .collect();

    let filled = regularize(&series_by_station, Duration::minutes(step_minutes));

    let bike_counts: Vec<f64> = filled
        .values()
        .flatten()
        .filter_map(|record| record.value.bikes_available())
        .map(f64::from)
        .collect();

    let mut features = Vec::new();
    match ColorBounds::from_values(&bike_counts, percentile, VMAX_FLOOR) {
        Some(bounds) => {
            info!(
                "color window [{}, {}] over {} grid points",
                bounds.vmin,
                bounds.vmax,
                bike_counts.len()
            );
            for records in filled.values() {
                for record in records {
                    let snapshot = &record.value;
                    let (latitude, longitude) = match snapshot.coordinates() {
                        Some(coordinates) => coordinates,
                        None => continue,
                    };
                    let bikes = match snapshot.bikes_available() {
                        Some(bikes) => bikes,
                        None => continue,
                    };
                    features.push(bike_feature(
                        &snapshot.name,
                        latitude,
                        longitude,
                        record.time,
                        bikes,
                        bounds.color_for(f64::from(bikes)),
                    ));
                }
            }
        }
        None => warn!("history is empty; writing an empty feature collection"),
    }

    let feature_count = features.len();
    let collection = FeatureCollection::new(features);
    std::fs::write(output, serde_json::to_string(&collection)?)?;
    info!("{} map features written to {}", feature_count, output);
    Ok(())
}
