//! Station Availability History
//!
//! Renders a two-panel SVG for one station: available bikes over time with
//! the station capacity as a reference line, and the fill percentage with
//! the 80% (full) and 20% (empty) reference lines.

use anyhow::Context;
use chrono::{Duration, NaiveDateTime};
use clap::Parser;
use log::info;
use plotters::prelude::*;
use velo_jcdecaux::history;
use velo_jcdecaux::snapshot::Snapshot;

const AVAILABILITY_COLOR: RGBColor = RGBColor(46, 134, 171);
const FILL_COLOR: RGBColor = RGBColor(162, 59, 114);

#[derive(Parser)]
#[command(
    name = "chart-station-history",
    version,
    about = "Render one station's availability history to SVG"
)]
struct Args {
    /// Path to the station history CSV
    #[arg(short = 'c', long)]
    history_csv: String,

    /// Station number to chart
    #[arg(short = 's', long)]
    station: u32,

    /// Output SVG path
    #[arg(short = 'o', long)]
    output: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let snapshots = history::load_history(&args.history_csv)?;
    let mut station_history: Vec<Snapshot> = snapshots
        .into_iter()
        .filter(|snapshot| snapshot.number == args.station)
        .collect();
    if station_history.is_empty() {
        anyhow::bail!(
            "no observations for station {} in {}",
            args.station,
            args.history_csv
        );
    }
    station_history.sort();

    let name = station_history[0].name.clone();
    let capacity = station_history.iter().find_map(Snapshot::capacity);
    let series: Vec<(NaiveDateTime, u32)> = station_history
        .iter()
        .filter_map(|snapshot| {
            snapshot
                .total_bikes_available()
                .map(|bikes| (snapshot.snapshot_time, bikes))
        })
        .collect();
    if series.is_empty() {
        anyhow::bail!(
            "station {} has no parsable availability data",
            args.station
        );
    }
    info!("{} observations for {}", series.len(), name);

    draw_chart(&args.output, &name, capacity, &series)
        .with_context(|| format!("failed to render {}", args.output))?;
    println!("Chart written to {}", args.output);
    Ok(())
}

fn draw_chart(
    path: &str,
    name: &str,
    capacity: Option<u32>,
    series: &[(NaiveDateTime, u32)],
) -> anyhow::Result<()> {
    let start = series[0].0;
    let observed_end = series[series.len() - 1].0;
    // widen a single-snapshot history so the x range is not degenerate
    let end = if observed_end > start {
        observed_end
    } else {
        start + Duration::minutes(1)
    };

    let highest = series.iter().map(|(_, bikes)| *bikes).max().unwrap_or(0);
    let y_max = (highest.max(capacity.unwrap_or(0)) + 1) as f64;

    let root = SVGBackend::new(path, (1000, 760)).into_drawing_area();
    root.fill(&WHITE)?;
    let (top, bottom) = root.split_vertically(420);

    let mut chart = ChartBuilder::on(&top)
        .margin(20)
        .caption(format!("{} - available bikes", name), ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(start..end, 0f64..y_max)?;
    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|time| time.format("%m-%d %H:%M").to_string())
        .draw()?;
    chart
        .draw_series(LineSeries::new(
            series.iter().map(|(time, bikes)| (*time, *bikes as f64)),
            &AVAILABILITY_COLOR,
        ))?
        .label("Bikes available")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], AVAILABILITY_COLOR));
    if let Some(capacity) = capacity {
        chart
            .draw_series(LineSeries::new(
                vec![(start, capacity as f64), (end, capacity as f64)],
                &RED,
            ))?
            .label(format!("Capacity ({})", capacity))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    if let Some(capacity) = capacity.filter(|capacity| *capacity > 0) {
        let mut fill_chart = ChartBuilder::on(&bottom)
            .margin(20)
            .caption("Fill percentage", ("sans-serif", 20))
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(start..end, 0f64..100f64)?;
        fill_chart
            .configure_mesh()
            .x_labels(8)
            .x_label_formatter(&|time| time.format("%m-%d %H:%M").to_string())
            .draw()?;
        fill_chart
            .draw_series(LineSeries::new(
                series
                    .iter()
                    .map(|(time, bikes)| (*time, *bikes as f64 / capacity as f64 * 100.0)),
                &FILL_COLOR,
            ))?
            .label("Fill %")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FILL_COLOR));
        fill_chart
            .draw_series(LineSeries::new(
                vec![(start, 80.0), (end, 80.0)],
                &RED.mix(0.5),
            ))?
            .label("80% (full)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.5)));
        fill_chart
            .draw_series(LineSeries::new(
                vec![(start, 20.0), (end, 20.0)],
                &YELLOW.mix(0.8),
            ))?
            .label("20% (empty)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], YELLOW.mix(0.8)));
        fill_chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
