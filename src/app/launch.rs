//! Launch Options
//!
//! Startup parameters in query-string form, either a full URL
//! (`vind://dashboard?timespan=60&fullscreen=rose`) or bare `key=value`
//! arguments. Unknown keys are ignored.

use reqwest::Url;

use crate::domain::TimeSpan;

/// Chart shown alone in fullscreen mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FullscreenChart {
    #[default]
    Line,
    Gauge,
    Rose,
}

impl FullscreenChart {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "true" | "1" | "line" | "graph" => Some(Self::Line),
            "gauge" => Some(Self::Gauge),
            "rose" | "windrose" => Some(Self::Rose),
            _ => None,
        }
    }
}

/// Parameters read once at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Overrides the configured default span
    pub time_span: Option<TimeSpan>,
    /// Single-chart mode
    pub fullscreen: Option<FullscreenChart>,
}

impl LaunchOptions {
    /// Parse process arguments (without the program name)
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().trim_start_matches('-').to_string())
            .filter(|arg| !arg.is_empty())
            .collect();

        match args.as_slice() {
            [single] if single.contains("://") => Self::from_url(single),
            _ => Self::from_query(&args.join("&")),
        }
    }

    /// Parse a full URL, reading its query string
    pub fn from_url(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) => Self::from_query(url.query().unwrap_or_default()),
            Err(e) => {
                tracing::warn!(url = raw, error = %e, "Ignoring unparsable launch URL");
                Self::default()
            }
        }
    }

    /// Parse a bare query string (`timespan=60&fullscreen`)
    pub fn from_query(query: &str) -> Self {
        let mut options = Self::default();

        for (key, value) in query_pairs(query) {
            match key.as_str() {
                "timespan" => match value.parse::<TimeSpan>() {
                    Ok(span) => options.time_span = Some(span),
                    Err(e) => tracing::warn!(value = %value, error = %e, "Ignoring invalid timespan"),
                },
                "fullscreen" => match FullscreenChart::parse(&value) {
                    Some(chart) => options.fullscreen = Some(chart),
                    None => tracing::warn!(value = %value, "Ignoring unknown fullscreen chart"),
                },
                _ => {}
            }
        }

        options
    }
}

/// Decoded key/value pairs of a query string
fn query_pairs(query: &str) -> Vec<(String, String)> {
    let Ok(mut url) = Url::parse("vind://launch") else {
        return Vec::new();
    };
    url.set_query(Some(query));
    url.query_pairs()
        .map(|(key, value)| (key.to_ascii_lowercase(), value.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_arguments_seed_span_and_fullscreen() {
        let options = LaunchOptions::from_args(["timespan=60", "fullscreen=rose"]);
        assert_eq!(options.time_span, Some(TimeSpan::Hour));
        assert_eq!(options.fullscreen, Some(FullscreenChart::Rose));
    }

    #[test]
    fn full_url_is_read_from_its_query() {
        let options = LaunchOptions::from_args(["vind://dashboard?timespan=1440&fullscreen=gauge"]);
        assert_eq!(options.time_span, Some(TimeSpan::Day));
        assert_eq!(options.fullscreen, Some(FullscreenChart::Gauge));
    }

    #[test]
    fn bare_fullscreen_flag_means_line_graph() {
        assert_eq!(
            LaunchOptions::from_args(["--fullscreen"]).fullscreen,
            Some(FullscreenChart::Line)
        );
        assert_eq!(
            LaunchOptions::from_query("fullscreen=true").fullscreen,
            Some(FullscreenChart::Line)
        );
    }

    #[test]
    fn invalid_values_are_ignored() {
        let options = LaunchOptions::from_query("timespan=7&fullscreen=pie&theme=dark");
        assert_eq!(options, LaunchOptions::default());
    }

    #[test]
    fn no_arguments_yield_defaults() {
        assert_eq!(LaunchOptions::from_args(Vec::<String>::new()), LaunchOptions::default());
    }
}
