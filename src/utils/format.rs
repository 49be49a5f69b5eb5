//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

/// Format a UTC sample time as local wall-clock time
pub fn format_clock(dt: &DateTime<Utc>) -> String {
    format_time(&dt.with_timezone(&Local))
}

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Format a UTC sample time as a short local hour:minute label
pub fn format_axis_time(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%H:%M").to_string()
}

/// Wind speed with one decimal
pub fn format_knots(knots: f64) -> String {
    format!("{knots:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn knots_have_one_decimal() {
        assert_eq!(format_knots(12.0), "12.0");
        assert_eq!(format_knots(7.46), "7.5");
    }

    #[test]
    fn local_time_has_seconds() {
        let dt = Local.with_ymd_and_hms(2024, 3, 1, 8, 5, 9).single().expect("time");
        assert_eq!(format_time(&dt), "08:05:09");
    }
}
