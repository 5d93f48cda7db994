//! Station statistics reports.

use chrono::NaiveDateTime;
use std::collections::HashMap;
use velo_data::stats::{mean_fill_percent, station_stats};
use velo_jcdecaux::history;
use velo_jcdecaux::snapshot::Snapshot;

/// Print the station roster, or one station's detailed stats.
pub fn run_stats(history_csv: &str, station: Option<u32>) -> anyhow::Result<()> {
    let snapshots = history::load_history(history_csv)?;
    let by_station = Snapshot::vector_to_hashmap(snapshots);

    match station {
        Some(number) => print_station_detail(&by_station, number, history_csv),
        None => {
            print_roster(&by_station);
            Ok(())
        }
    }
}

fn bike_series(rows: &[Snapshot]) -> Vec<(NaiveDateTime, u32)> {
    let mut series: Vec<(NaiveDateTime, u32)> = rows
        .iter()
        .filter_map(|snapshot| {
            snapshot
                .total_bikes_available()
                .map(|bikes| (snapshot.snapshot_time, bikes))
        })
        .collect();
    series.sort_by_key(|(time, _)| *time);
    series
}

fn print_roster(by_station: &HashMap<u32, Vec<Snapshot>>) {
    let mut numbers: Vec<u32> = by_station.keys().copied().collect();
    numbers.sort_unstable();

    println!("{} stations in history", numbers.len());
    println!(
        "{:>6}  {:<42}  {:>10}  {:>8}",
        "number", "name", "avg bikes", "fill"
    );
    for number in numbers {
        let rows = &by_station[&number];
        let series = bike_series(rows);
        let stats = match station_stats(&series) {
            Some(stats) => stats,
            None => continue,
        };
        let capacity = rows.iter().find_map(Snapshot::capacity);
        let fill = capacity
            .and_then(|capacity| mean_fill_percent(stats.mean_bikes, capacity))
            .map_or(String::from("-"), |fill| format!("{:.1}%", fill));
        println!(
            "{:>6}  {:<42}  {:>10.1}  {:>8}",
            number, rows[0].name, stats.mean_bikes, fill
        );
    }
}

fn print_station_detail(
    by_station: &HashMap<u32, Vec<Snapshot>>,
    number: u32,
    history_csv: &str,
) -> anyhow::Result<()> {
    let rows = by_station
        .get(&number)
        .ok_or_else(|| anyhow::anyhow!("station {} not found in {}", number, history_csv))?;
    let series = bike_series(rows);
    let stats = station_stats(&series)
        .ok_or_else(|| anyhow::anyhow!("station {} has no parsable availability data", number))?;
    let capacity = rows.iter().find_map(Snapshot::capacity);

    println!("{} ({})", rows[0].name, number);
    println!("  {}", rows[0].address);
    println!("  observations:   {}", stats.observation_count);
    println!("  mean bikes:     {:.1}", stats.mean_bikes);
    println!("  min / max:      {} / {}", stats.min_bikes, stats.max_bikes);
    println!("  std deviation:  {:.1}", stats.std_dev);
    match capacity {
        Some(capacity) => {
            println!("  capacity:       {}", capacity);
            if let Some(fill) = mean_fill_percent(stats.mean_bikes, capacity) {
                println!("  mean fill:      {:.1}%", fill);
            }
        }
        None => println!("  capacity:       unknown"),
    }
    println!("  peak hour:      {:02}h", stats.peak_hour);
    println!("  low hour:       {:02}h", stats.low_hour);
    Ok(())
}
