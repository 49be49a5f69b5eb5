//! Application Layer
//!
//! Contains app initialization, launch options, global entities, and workspace.

pub mod application;
pub mod entities;
pub mod launch;
pub mod workspace;
