//! Data processing for bike-share station history.
//!
//! This crate turns the irregular per-station snapshot history into
//! regular, renderer-ready series: a shared time grid filled by
//! last-observation-carried-forward, a red→yellow→green color scale with a
//! percentile-derived window, per-station statistics and the time-slider
//! GeoJSON document.

pub mod color;
pub mod regularize;
pub mod stats;
pub mod time_grid;
pub mod timeline;
