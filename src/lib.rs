//! Sector Tactics - hex-grid spatial and perception engine

pub mod core;
pub mod sector;
pub mod tactical;
