//! Shared-grid resampling of irregular station series.

use crate::time_grid::TimeGrid;
use chrono::{Duration, NaiveDateTime};
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

/// One observed value on a station's timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedValue<V> {
    pub time: NaiveDateTime,
    pub value: V,
}

/// Resample every station's series onto one shared fixed-interval grid.
///
/// The grid spans the earliest to the latest observation across all
/// stations, so every station is reported on the same timestamps. Each grid
/// point carries the most recent observation at or before it
/// (last-observation-carried-forward), computed independently per station.
/// Grid points before a station's first observation are omitted rather than
/// zero-filled; observations at the same instant resolve to the last one in
/// insertion order. An empty input yields an empty map.
pub fn regularize<V: Clone>(
    series_by_station: &HashMap<u32, Vec<TimedValue<V>>>,
    step: Duration,
) -> BTreeMap<u32, Vec<TimedValue<V>>> {
    let mut filled = BTreeMap::new();

    let span = series_by_station
        .values()
        .flatten()
        .map(|observed| observed.time)
        .minmax();
    let (start, end) = match span.into_option() {
        Some(bounds) => bounds,
        None => return filled,
    };

    for (&station, series) in series_by_station {
        let mut observations: Vec<&TimedValue<V>> = series.iter().collect();
        // stable sort keeps insertion order for equal timestamps, so the
        // cursor below ends on the last write
        observations.sort_by_key(|observed| observed.time);

        let mut cursor = 0;
        let mut latest: Option<&TimedValue<V>> = None;
        let mut resampled = Vec::new();
        for grid_time in TimeGrid::new(start, end, step) {
            while cursor < observations.len() && observations[cursor].time <= grid_time {
                latest = Some(observations[cursor]);
                cursor += 1;
            }
            if let Some(observed) = latest {
                resampled.push(TimedValue {
                    time: grid_time,
                    value: observed.value.clone(),
                });
            }
        }
        if !resampled.is_empty() {
            filled.insert(station, resampled);
        }
    }

    filled
}
