//! Vind GUI Library
//!
//! A native real-time wind telemetry dashboard: a refresh coordinator feeding
//! one shared snapshot to a gust graph, a gauge and a wind rose.

pub mod app;
pub mod charts;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
