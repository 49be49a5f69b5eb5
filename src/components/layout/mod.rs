//! Layout Components

pub mod header;
