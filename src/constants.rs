//! UI Constants
//!
//! Centralized constants for refresh timing and layout.

/// Minimum time between two fetch dispatches
pub const DEBOUNCE_WINDOW_MS: u64 = 500;

/// Default periodic refresh interval (0 disables)
pub const AUTO_REFRESH_SECS: u64 = 60;

/// Default HTTP timeout for the wind data source
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default wind data endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/wind";

/// Lowest upper bound of the gust axis, in knots
pub const GUST_AXIS_FLOOR_KN: f64 = 15.0;

/// Headroom added above the highest gust, in knots
pub const GUST_AXIS_HEADROOM_KN: f64 = 1.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Fallback size for responsive charts before the first layout
pub const CHART_FALLBACK_WIDTH: f32 = 300.0;
pub const CHART_FALLBACK_HEIGHT: f32 = 300.0;

/// Line graph height in pixels
pub const LINE_CHART_HEIGHT: f32 = 400.0;
