//! Per-station availability statistics.

use chrono::{NaiveDateTime, Timelike};

/// Summary of one station's bike-count series.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub observation_count: usize,
    pub mean_bikes: f64,
    pub min_bikes: u32,
    pub max_bikes: u32,
    /// Sample standard deviation; zero for fewer than two observations
    pub std_dev: f64,
    /// Hour of day at which the maximum count was first observed
    pub peak_hour: u32,
    /// Hour of day at which the minimum count was first observed
    pub low_hour: u32,
}

/// Compute stats over a station's `(time, bikes)` series. Returns `None`
/// for an empty series.
pub fn station_stats(series: &[(NaiveDateTime, u32)]) -> Option<StationStats> {
    let count = series.len();
    let sum: u64 = series.iter().map(|(_, bikes)| u64::from(*bikes)).sum();
    let mean = sum as f64 / count as f64;

    // ties resolve to the earliest observation
    let mut peak = series.first()?;
    let mut low = peak;
    for observed in &series[1..] {
        if observed.1 > peak.1 {
            peak = observed;
        }
        if observed.1 < low.1 {
            low = observed;
        }
    }
    let (peak_time, max_bikes) = peak;
    let (low_time, min_bikes) = low;

    let std_dev = if count < 2 {
        0.0
    } else {
        let squared: f64 = series
            .iter()
            .map(|(_, bikes)| {
                let delta = f64::from(*bikes) - mean;
                delta * delta
            })
            .sum();
        (squared / (count - 1) as f64).sqrt()
    };

    Some(StationStats {
        observation_count: count,
        mean_bikes: mean,
        min_bikes: *min_bikes,
        max_bikes: *max_bikes,
        std_dev,
        peak_hour: peak_time.hour(),
        low_hour: low_time.hour(),
    })
}

/// Mean fill percentage for a series against a station capacity; `None`
/// when the capacity is zero.
pub fn mean_fill_percent(mean_bikes: f64, capacity: u32) -> Option<f64> {
    if capacity == 0 {
        return None;
    }
    Some(mean_bikes / f64::from(capacity) * 100.0)
}

#[cfg(test)]
mod test {
    use super::*;

    fn at(time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_stats_over_a_day() {
        let series = vec![
            (at("2024-06-01T06:00:00"), 4),
            (at("2024-06-01T08:00:00"), 12),
            (at("2024-06-01T12:00:00"), 6),
            (at("2024-06-01T18:00:00"), 2),
        ];
        let stats = station_stats(&series).unwrap();
        assert_eq!(stats.observation_count, 4);
        assert_eq!(stats.mean_bikes, 6.0);
        assert_eq!(stats.min_bikes, 2);
        assert_eq!(stats.max_bikes, 12);
        assert_eq!(stats.peak_hour, 8);
        assert_eq!(stats.low_hour, 18);
        // sample std dev of [4, 12, 6, 2]
        assert!((stats.std_dev - 4.3204937989).abs() < 1e-9);
    }

    #[test]
    fn test_tied_extremes_report_the_first_hour() {
        let series = vec![
            (at("2024-06-01T07:00:00"), 9),
            (at("2024-06-01T09:00:00"), 9),
            (at("2024-06-01T11:00:00"), 1),
            (at("2024-06-01T13:00:00"), 1),
        ];
        let stats = station_stats(&series).unwrap();
        assert_eq!(stats.peak_hour, 7);
        assert_eq!(stats.low_hour, 11);
    }

    #[test]
    fn test_single_observation_has_zero_spread() {
        let stats = station_stats(&[(at("2024-06-01T09:00:00"), 7)]).unwrap();
        assert_eq!(stats.mean_bikes, 7.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.peak_hour, 9);
        assert_eq!(stats.low_hour, 9);
    }

    #[test]
    fn test_empty_series_is_none() {
        assert_eq!(station_stats(&[]), None);
    }

    #[test]
    fn test_mean_fill_percent() {
        assert_eq!(mean_fill_percent(6.0, 12), Some(50.0));
        assert_eq!(mean_fill_percent(6.0, 0), None);
    }
}
