//! Gauge reading for the span's strongest gust

use crate::charts::line::gust_axis_max;
use crate::domain::{TimeSpan, WindData};
use crate::helpers::ContainerSize;

/// Coloured band the gauge needle falls in (knots)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeZone {
    /// Below 10 kn
    Calm,
    /// 10 to 20 kn
    Fresh,
    /// 20 kn and above
    Strong,
}

impl GaugeZone {
    pub fn for_knots(knots: f64) -> Self {
        if knots < 10.0 {
            GaugeZone::Calm
        } else if knots < 20.0 {
            GaugeZone::Fresh
        } else {
            GaugeZone::Strong
        }
    }
}

/// Chart-ready gauge values
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeReading {
    /// Strongest gust in the span
    pub gust: f64,
    /// Average wind of the newest sample
    pub latest_avg: Option<f64>,
    /// Scale maximum, shared with the line graph
    pub max: f64,
    pub zone: GaugeZone,
    pub span_minutes: u32,
}

impl GaugeReading {
    /// Needle position in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        (self.gust / self.max).clamp(0.0, 1.0)
    }
}

/// Build the reading; `None` input renders nothing
pub fn gauge_reading(data: Option<&WindData>, span: TimeSpan) -> Option<GaugeReading> {
    let data = data?;
    let gust = data.peak_gust().unwrap_or(0.0).max(data.max_gust.value);

    Some(GaugeReading {
        gust,
        latest_avg: data.latest().map(|sample| sample.avg_wind),
        max: gust_axis_max(Some(data)).max(gust),
        zone: GaugeZone::for_knots(gust),
        span_minutes: span.minutes(),
    })
}

/// Gauge dial geometry fitted into a container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub diameter: f32,
    pub track_width: f32,
}

impl GaugeGeometry {
    const PADDING: f32 = 16.0;

    pub fn fit(size: ContainerSize) -> Self {
        let diameter = (size.min_side() - 2.0 * Self::PADDING).max(0.0);
        Self {
            diameter,
            track_width: (diameter / 10.0).clamp(4.0, 24.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gust, WindSample};
    use chrono::Utc;

    fn data(gusts: &[(f64, f64)]) -> WindData {
        WindData {
            wind_histogram: gusts
                .iter()
                .map(|&(avg, gust)| WindSample {
                    timestamp: Utc::now(),
                    avg_wind: avg,
                    max_gust: Gust { value: gust, direction: Some(0.0) },
                })
                .collect(),
            max_gust: Gust { value: 0.0, direction: Some(0.0) },
        }
    }

    #[test]
    fn reading_uses_peak_gust_and_latest_average() {
        let reading = gauge_reading(Some(&data(&[(5.0, 9.0), (11.0, 22.0), (6.0, 8.0)])), TimeSpan::Hour)
            .expect("reading");

        assert_eq!(reading.gust, 22.0);
        assert_eq!(reading.latest_avg, Some(6.0));
        assert_eq!(reading.max, 23.0);
        assert_eq!(reading.zone, GaugeZone::Strong);
        assert_eq!(reading.span_minutes, 60);
    }

    #[test]
    fn summary_gust_counts_when_histogram_is_lower() {
        let mut payload = data(&[(3.0, 4.0)]);
        payload.max_gust.value = 12.0;

        let reading = gauge_reading(Some(&payload), TimeSpan::TenMinutes).expect("reading");
        assert_eq!(reading.gust, 12.0);
        assert_eq!(reading.zone, GaugeZone::Fresh);
        assert!((reading.fraction() - 12.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn empty_payload_reads_zero() {
        let reading = gauge_reading(Some(&WindData::default()), TimeSpan::TenMinutes).expect("reading");
        assert_eq!(reading.gust, 0.0);
        assert_eq!(reading.latest_avg, None);
        assert_eq!(reading.zone, GaugeZone::Calm);
        assert_eq!(reading.fraction(), 0.0);
    }

    #[test]
    fn no_reading_while_pending() {
        assert!(gauge_reading(None, TimeSpan::Day).is_none());
    }

    #[test]
    fn geometry_fits_shorter_side() {
        let geometry = GaugeGeometry::fit(ContainerSize::new(500.0, 232.0));
        assert_eq!(geometry.diameter, 200.0);
        assert_eq!(geometry.track_width, 20.0);

        assert_eq!(GaugeGeometry::fit(ContainerSize::new(10.0, 10.0)).diameter, 0.0);
    }
}
