//! Gust-over-time series

use chrono::{DateTime, Utc};

use crate::constants::{GUST_AXIS_FLOOR_KN, GUST_AXIS_HEADROOM_KN};
use crate::domain::WindData;

/// Values shown when hovering a point
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub time: DateTime<Utc>,
    pub avg_wind: f64,
    pub gust: f64,
}

/// One plotted sample
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub timestamp: DateTime<Utc>,
    /// Plotted value (gust)
    pub gust: f64,
    /// Shaded band from the average wind up to the gust
    pub interval: (f64, f64),
    pub tooltip: Tooltip,
}

/// Chart-ready gust series
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub points: Vec<LinePoint>,
    pub y_max: f64,
}

impl LineSeries {
    /// Point position as fractions of the plot area, origin bottom-left
    pub fn normalized(&self) -> Vec<(f64, f64)> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Vec::new();
        };
        let span_ms = (last.timestamp - first.timestamp).num_milliseconds().max(1) as f64;
        let single = self.points.len() == 1;

        self.points
            .iter()
            .map(|p| {
                let x = if single {
                    0.5
                } else {
                    (p.timestamp - first.timestamp).num_milliseconds() as f64 / span_ms
                };
                (x, (p.gust / self.y_max).clamp(0.0, 1.0))
            })
            .collect()
    }

    /// Index of the point closest to horizontal position `x` (0..=1)
    pub fn nearest(&self, x: f64) -> Option<usize> {
        self.normalized()
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (a.0 - x).abs().total_cmp(&(b.0 - x).abs()))
            .map(|(i, _)| i)
    }
}

/// Upper bound of the gust axis: never below the floor, one knot above the peak
pub fn gust_axis_max(data: Option<&WindData>) -> f64 {
    data.and_then(WindData::peak_gust)
        .map_or(GUST_AXIS_FLOOR_KN, |peak| {
            GUST_AXIS_FLOOR_KN.max(peak + GUST_AXIS_HEADROOM_KN)
        })
}

/// Build the series; `None` input renders nothing
pub fn line_series(data: Option<&WindData>) -> Option<LineSeries> {
    let data = data?;
    let points = data
        .wind_histogram
        .iter()
        .map(|sample| LinePoint {
            timestamp: sample.timestamp,
            gust: sample.max_gust.value,
            interval: (sample.avg_wind, sample.max_gust.value),
            tooltip: Tooltip {
                time: sample.timestamp,
                avg_wind: sample.avg_wind,
                gust: sample.max_gust.value,
            },
        })
        .collect();

    Some(LineSeries {
        points,
        y_max: gust_axis_max(Some(data)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gust, WindSample};
    use chrono::TimeZone;

    fn data_with_gusts(gusts: &[f64]) -> WindData {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().expect("date");
        WindData {
            wind_histogram: gusts
                .iter()
                .enumerate()
                .map(|(i, &gust)| WindSample {
                    timestamp: start + chrono::Duration::minutes(i as i64),
                    avg_wind: gust / 2.0,
                    max_gust: Gust { value: gust, direction: Some(200.0) },
                })
                .collect(),
            max_gust: Gust { value: 0.0, direction: Some(200.0) },
        }
    }

    #[test]
    fn axis_floor_dominates_low_gusts() {
        assert_eq!(gust_axis_max(Some(&data_with_gusts(&[4.0, 12.0, 7.0]))), 15.0);
    }

    #[test]
    fn axis_adds_headroom_above_high_gusts() {
        assert_eq!(gust_axis_max(Some(&data_with_gusts(&[18.0, 20.0]))), 21.0);
    }

    #[test]
    fn axis_for_missing_or_empty_data_is_floor() {
        assert_eq!(gust_axis_max(None), 15.0);
        assert_eq!(gust_axis_max(Some(&WindData::default())), 15.0);
    }

    #[test]
    fn series_is_none_for_pending_snapshot() {
        assert!(line_series(None).is_none());
    }

    #[test]
    fn series_carries_interval_and_tooltip_per_sample() {
        let data = data_with_gusts(&[10.0, 16.0]);
        let series = line_series(Some(&data)).expect("series");

        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[1].interval, (8.0, 16.0));
        assert_eq!(series.points[1].tooltip.avg_wind, 8.0);
        assert_eq!(series.y_max, 17.0);
    }

    #[test]
    fn normalized_spans_unit_square() {
        let series = line_series(Some(&data_with_gusts(&[0.0, 7.5, 14.0]))).expect("series");
        let points = series.normalized();

        assert_eq!(points[0], (0.0, 0.0));
        assert_eq!(points[1], (0.5, 0.5));
        assert_eq!(points[2].0, 1.0);
        assert!((points[2].1 - 14.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn nearest_picks_closest_sample() {
        let series = line_series(Some(&data_with_gusts(&[5.0, 6.0, 7.0, 8.0, 9.0]))).expect("series");
        assert_eq!(series.nearest(0.0), Some(0));
        assert_eq!(series.nearest(0.3), Some(1));
        assert_eq!(series.nearest(0.9), Some(4));

        let empty = line_series(Some(&WindData::default())).expect("series");
        assert_eq!(empty.nearest(0.5), None);
    }
}
