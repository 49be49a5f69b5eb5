//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    pub const TEXT_XS: f32 = 11.0;
    pub const TEXT_SM: f32 = 13.0;
    pub const TEXT_BASE: f32 = 15.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_2XL: f32 = 24.0;
    /// Gauge readout
    pub const TEXT_DISPLAY: f32 = 40.0;
}
