//! Wind rose: direction frequency by speed band
//!
//! Samples are binned by the direction of their gust into 16 compass sectors
//! and by average wind speed into fixed knot bands. Frequencies are
//! percentages of the samples that carry a direction.

use crate::domain::{TimeSpan, WindData};
use crate::helpers::ContainerSize;

/// Compass labels, clockwise from north
pub const SECTOR_LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Lower bounds of the speed bands in knots; the last band is open-ended
pub const SPEED_BANDS_KN: [f64; 6] = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0];

const SECTOR_WIDTH_DEG: f64 = 360.0 / 16.0;

/// One compass sector
#[derive(Debug, Clone, PartialEq)]
pub struct RoseSector {
    pub label: &'static str,
    /// Centre of the sector in degrees clockwise from north
    pub center_deg: f64,
    /// Percentage of directed samples per speed band
    pub bands: [f64; SPEED_BANDS_KN.len()],
}

impl RoseSector {
    /// Total percentage of this sector
    pub fn total(&self) -> f64 {
        self.bands.iter().sum()
    }
}

/// Chart-ready wind rose
#[derive(Debug, Clone, PartialEq)]
pub struct WindRose {
    pub sectors: Vec<RoseSector>,
    /// Samples that carried a direction
    pub directed: usize,
    /// Samples skipped for lack of direction
    pub undirected: usize,
    pub span_minutes: u32,
}

impl WindRose {
    /// Largest sector total, used to scale the radial axis
    pub fn max_sector_total(&self) -> f64 {
        self.sectors
            .iter()
            .map(RoseSector::total)
            .fold(0.0, f64::max)
    }
}

/// Sector index for a direction in degrees (any real value, wrapped)
pub fn sector_index(direction_deg: f64) -> usize {
    let normalized = direction_deg.rem_euclid(360.0);
    ((normalized + SECTOR_WIDTH_DEG / 2.0) / SECTOR_WIDTH_DEG) as usize % SECTOR_LABELS.len()
}

/// Speed band index for a speed in knots
pub fn band_index(knots: f64) -> usize {
    SPEED_BANDS_KN
        .iter()
        .rposition(|&lower| knots >= lower)
        .unwrap_or(0)
}

/// Build the rose; `None` input renders nothing
pub fn wind_rose(data: Option<&WindData>, span: TimeSpan) -> Option<WindRose> {
    let data = data?;
    let mut counts = [[0usize; SPEED_BANDS_KN.len()]; SECTOR_LABELS.len()];
    let mut directed = 0;
    let mut undirected = 0;

    for sample in &data.wind_histogram {
        match sample.max_gust.direction {
            Some(direction) if direction.is_finite() => {
                counts[sector_index(direction)][band_index(sample.avg_wind)] += 1;
                directed += 1;
            }
            _ => undirected += 1,
        }
    }

    let scale = if directed == 0 { 0.0 } else { 100.0 / directed as f64 };
    let sectors = SECTOR_LABELS
        .iter()
        .enumerate()
        .map(|(i, &label)| RoseSector {
            label,
            center_deg: i as f64 * SECTOR_WIDTH_DEG,
            bands: counts[i].map(|count| count as f64 * scale),
        })
        .collect();

    Some(WindRose {
        sectors,
        directed,
        undirected,
        span_minutes: span.minutes(),
    })
}

/// Rose geometry fitted into a container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoseGeometry {
    pub radius: f32,
    pub center: (f32, f32),
}

impl RoseGeometry {
    /// Room for the compass labels around the rose
    const LABEL_MARGIN: f32 = 24.0;

    pub fn fit(size: ContainerSize) -> Self {
        Self {
            radius: (size.min_side() / 2.0 - Self::LABEL_MARGIN).max(0.0),
            center: (size.width / 2.0, size.height / 2.0),
        }
    }

    /// Point on the circle at `fraction` of the radius along `bearing_deg`
    pub fn polar(&self, bearing_deg: f64, fraction: f64) -> (f32, f32) {
        let radians = bearing_deg.to_radians();
        let r = f64::from(self.radius) * fraction.clamp(0.0, 1.0);
        (
            self.center.0 + (r * radians.sin()) as f32,
            self.center.1 - (r * radians.cos()) as f32,
        )
    }
}
