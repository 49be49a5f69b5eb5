//! Components - UI Components
//!
//! Views and elements that read shared state but never do I/O themselves.

pub mod charts;
pub mod composite;
pub mod layout;
