//! State - GPUI Entity State Modules
//!
//! `refresh` is the plain coordinator; `dashboard_state` wraps it as the
//! entity every chart observes.

pub mod dashboard_state;
pub mod i18n_state;
pub mod refresh;
pub mod settings;

pub use dashboard_state::DashboardState;
pub use i18n_state::I18nState;
pub use refresh::{ErrorState, RefreshCoordinator, Snapshot};
pub use settings::VindSettings;
