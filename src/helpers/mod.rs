//! Helper Utilities
//!
//! Common utilities used across the application.

mod fs;
mod resize;

pub use fs::*;
pub use resize::*;
