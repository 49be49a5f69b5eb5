//! Composite Components

pub mod chart_card;
pub mod error_overlay;

pub use chart_card::ChartCard;
pub use error_overlay::ErrorOverlay;
