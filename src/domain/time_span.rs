//! TimeSpan - Minutes of History Requested

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Selectable history window, serialized as its minute token ("10", "60", ...)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSpan {
    #[default]
    TenMinutes,
    HalfHour,
    Hour,
    ThreeHours,
    SixHours,
    TwelveHours,
    Day,
}

impl TimeSpan {
    /// All spans in display order
    pub const ALL: [TimeSpan; 7] = [
        TimeSpan::TenMinutes,
        TimeSpan::HalfHour,
        TimeSpan::Hour,
        TimeSpan::ThreeHours,
        TimeSpan::SixHours,
        TimeSpan::TwelveHours,
        TimeSpan::Day,
    ];

    /// Minutes of history, used as the fetch parameter
    pub fn minutes(self) -> u32 {
        match self {
            TimeSpan::TenMinutes => 10,
            TimeSpan::HalfHour => 30,
            TimeSpan::Hour => 60,
            TimeSpan::ThreeHours => 180,
            TimeSpan::SixHours => 360,
            TimeSpan::TwelveHours => 720,
            TimeSpan::Day => 1440,
        }
    }

    /// The string token used in launch parameters and settings
    pub fn token(self) -> &'static str {
        match self {
            TimeSpan::TenMinutes => "10",
            TimeSpan::HalfHour => "30",
            TimeSpan::Hour => "60",
            TimeSpan::ThreeHours => "180",
            TimeSpan::SixHours => "360",
            TimeSpan::TwelveHours => "720",
            TimeSpan::Day => "1440",
        }
    }

    /// Look up a span by its minute count
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|span| span.minutes() == minutes)
    }
}

impl FromStr for TimeSpan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::from_minutes)
            .ok_or_else(|| Error::Invalid {
                message: format!("unsupported time span {s:?}"),
            })
    }
}

impl TryFrom<String> for TimeSpan {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeSpan> for String {
    fn from(span: TimeSpan) -> Self {
        span.token().to_string()
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
