//! Colors - Vind Theme Colors

use gpui::{Hsla, Rgba, rgb, rgba};

use crate::charts::GaugeZone;

/// Vind color palette - All colors are accessed via associated functions
pub struct VindColors;

impl VindColors {
    // Backgrounds
    /// Top of the page gradient - Deep purple
    pub fn background_top() -> Rgba { rgb(0x2e026d) }
    /// Bottom of the page gradient - Near black
    pub fn background_bottom() -> Rgba { rgb(0x15162c) }
    /// Chart card background
    pub fn card_bg() -> Rgba { rgba(0xffffff14) }
    /// Chart card border
    pub fn card_border() -> Rgba { rgba(0xffffff26) }
    /// Hovered control
    pub fn control_hover() -> Rgba { rgba(0xffffff33) }
    /// Selected control
    pub fn control_selected() -> Rgba { rgb(0x7c3aed) }

    // Text
    /// Primary text on dark backgrounds
    pub fn text_primary() -> Rgba { rgb(0xffffff) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgba(0xffffffb3) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgba(0xffffff66) }
    /// Text inside the tooltip
    pub fn tooltip_text() -> Rgba { rgb(0x111827) }
    /// Tooltip background
    pub fn tooltip_bg() -> Rgba { rgb(0xffffff) }

    // Series
    /// Gust line
    pub fn gust_line() -> Rgba { rgb(0xff0000) }
    /// Average-to-gust band
    pub fn gust_band() -> Rgba { rgba(0xff000033) }
    /// Grid lines
    pub fn grid() -> Rgba { rgba(0xffffff1a) }

    // Overlay
    /// Backdrop behind the error overlay
    pub fn overlay_backdrop() -> Rgba { rgba(0x000000b3) }
    /// Fetch error
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Empty dataset
    pub fn warning() -> Rgba { rgb(0xf59e0b) }

    /// Gauge colour for a zone
    pub fn zone(zone: GaugeZone) -> Rgba {
        match zone {
            GaugeZone::Calm => rgb(0x22c55e),
            GaugeZone::Fresh => rgb(0xf59e0b),
            GaugeZone::Strong => rgb(0xef4444),
        }
    }

    /// Rose colour per speed band, calm to strong
    pub fn speed_band(index: usize) -> Rgba {
        const BANDS: [u32; 6] = [0x38bdf8, 0x22c55e, 0xa3e635, 0xfacc15, 0xf97316, 0xef4444];
        rgb(BANDS[index.min(BANDS.len() - 1)])
    }
}

/// Convert Rgba to Hsla for gradients
impl VindColors {
    pub fn background_top_hsla() -> Hsla {
        Hsla::from(Self::background_top())
    }

    pub fn background_bottom_hsla() -> Hsla {
        Hsla::from(Self::background_bottom())
    }
}
