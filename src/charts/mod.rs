//! Charts - Pure Visualization Transforms
//!
//! Each adapter turns the shared snapshot into chart-ready values. They take
//! `Option<&WindData>` so a pending snapshot renders as nothing, and never
//! mutate the data they read.

pub mod gauge;
pub mod line;
pub mod rose;

pub use gauge::{GaugeGeometry, GaugeReading, GaugeZone, gauge_reading};
pub use line::{LinePoint, LineSeries, Tooltip, gust_axis_max, line_series};
pub use rose::{RoseGeometry, RoseSector, WindRose, wind_rose};
