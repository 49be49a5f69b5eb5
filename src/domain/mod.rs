//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the wind data model.

pub mod time_span;
pub mod wind;

pub use time_span::TimeSpan;
pub use wind::{DataClass, EmptyReason, Gust, WindData, WindSample};
