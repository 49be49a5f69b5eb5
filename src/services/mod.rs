//! Service Layer
//!
//! Abstraction over the remote wind data source and the async runtime it needs.
//!
//! ```text
//! DashboardState ──run_in_tokio──▶ WindSource::fetch ──HTTP──▶ data source
//!        ▲                                  │
//!        └──────────── Result<WindData> ◀───┘
//! ```

mod runtime;
mod wind_source;

pub use runtime::*;
pub use wind_source::*;
