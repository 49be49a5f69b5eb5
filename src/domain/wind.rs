//! Wind - Wind Histogram Snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A gust record: peak speed (knots) and the direction it came from, if known
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gust {
    #[serde(default, deserialize_with = "de_knots")]
    pub value: f64,
    /// Degrees clockwise from north
    #[serde(default, deserialize_with = "de_opt_degrees")]
    pub direction: Option<f64>,
}

/// One histogram bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    #[serde(deserialize_with = "de_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Average wind over the bucket (knots)
    #[serde(deserialize_with = "de_knots")]
    pub avg_wind: f64,
    pub max_gust: Gust,
}

/// Snapshot of wind history for one time span
///
/// Decoded once per fetch and shared read-only behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindData {
    /// Chronological samples (may be empty)
    #[serde(default)]
    pub wind_histogram: Vec<WindSample>,
    /// Span summary; a missing direction means no directional data
    #[serde(default, alias = "maxGust")]
    pub max_gust: Gust,
}

/// Why a successful payload has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The histogram has no samples
    NoSamples,
    /// The summary gust carries no direction
    NoDirection,
}

/// Result of inspecting a successfully fetched payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataClass {
    Usable,
    Empty(EmptyReason),
}

impl WindData {
    /// Classify the payload as usable or empty
    pub fn classify(&self) -> DataClass {
        if self.wind_histogram.is_empty() {
            DataClass::Empty(EmptyReason::NoSamples)
        } else if self.max_gust.direction.is_none() {
            DataClass::Empty(EmptyReason::NoDirection)
        } else {
            DataClass::Usable
        }
    }

    /// Highest gust value in the histogram
    pub fn peak_gust(&self) -> Option<f64> {
        self.wind_histogram
            .iter()
            .map(|sample| sample.max_gust.value)
            .fold(None, |max, value| match max {
                Some(m) if m >= value => Some(m),
                _ => Some(value),
            })
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&WindSample> {
        self.wind_histogram.last()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            RawNumber::Number(value) => Ok(value),
            RawNumber::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected a number, got {text:?}"))),
        }
    }
}

fn de_knots<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    RawNumber::deserialize(deserializer)?.into_f64()
}

fn de_opt_degrees<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<RawNumber>::deserialize(deserializer)? {
        Some(raw) => raw.into_f64().map(Some),
        None => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

fn de_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    use serde::de::Error;

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => DateTime::<Utc>::from_timestamp_millis(ms)
            .ok_or_else(|| D::Error::custom(format!("timestamp {ms} out of range"))),
        RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(text.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_payload_with_mixed_number_encodings() {
        let json = r#"{
            "wind_histogram": [
                {"timestamp": "2024-03-01T12:00:00Z", "avg_wind": 7.5, "max_gust": {"value": "11", "direction": 270}},
                {"timestamp": 1709294460000, "avg_wind": "8.25", "max_gust": {"value": 12.5}}
            ],
            "maxGust": {"value": 12.5, "direction": "265"}
        }"#;

        let data: WindData = serde_json::from_str(json).expect("decode");
        assert_eq!(data.wind_histogram.len(), 2);
        assert_eq!(data.wind_histogram[0].max_gust.value, 11.0);
        assert_eq!(data.wind_histogram[0].max_gust.direction, Some(270.0));
        assert_eq!(data.wind_histogram[1].avg_wind, 8.25);
        assert_eq!(data.wind_histogram[1].max_gust.direction, None);
        assert_eq!(
            data.wind_histogram[1].timestamp,
            DateTime::<Utc>::from_timestamp_millis(1_709_294_460_000).expect("ts")
        );
        assert_eq!(data.max_gust.direction, Some(265.0));
    }

    #[test]
    fn null_direction_means_absent() {
        let json = r#"{"wind_histogram": [], "max_gust": {"value": 0, "direction": null}}"#;
        let data: WindData = serde_json::from_str(json).expect("decode");
        assert_eq!(data.max_gust.direction, None);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let json = r#"{"wind_histogram": [{"timestamp": 0, "avg_wind": "calm", "max_gust": {"value": 1}}]}"#;
        assert!(serde_json::from_str::<WindData>(json).is_err());
    }

    #[test]
    fn classify_flags_empty_histogram_and_missing_direction() {
        let empty = WindData::default();
        assert_eq!(empty.classify(), DataClass::Empty(EmptyReason::NoSamples));

        let mut undirected = WindData {
            wind_histogram: vec![WindSample {
                timestamp: Utc::now(),
                avg_wind: 4.0,
                max_gust: Gust { value: 6.0, direction: Some(180.0) },
            }],
            max_gust: Gust { value: 6.0, direction: None },
        };
        assert_eq!(undirected.classify(), DataClass::Empty(EmptyReason::NoDirection));

        undirected.max_gust.direction = Some(180.0);
        assert_eq!(undirected.classify(), DataClass::Usable);
    }

    #[test]
    fn peak_gust_scans_histogram() {
        let sample = |value| WindSample {
            timestamp: Utc::now(),
            avg_wind: 1.0,
            max_gust: Gust { value, direction: None },
        };
        let data = WindData {
            wind_histogram: vec![sample(3.0), sample(14.5), sample(9.0)],
            max_gust: Gust::default(),
        };
        assert_eq!(data.peak_gust(), Some(14.5));
        assert_eq!(WindData::default().peak_gust(), None);
    }
}
