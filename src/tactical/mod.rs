//! Tactical layer - geometry, perception, routing and targeting
//!
//! Everything here is a pure function of a `SectorState` snapshot:
//! - Hex geometry maps cells to pixels and back
//! - Concealment decides what each ship can perceive
//! - Paths are straight lines on the grid, recomputed each call
//! - Targeting derives the overlay relationships for a selection

pub mod concealment;
pub mod hex;
pub mod path;
pub mod sensors;
pub mod targeting;

// Re-exports for convenient access
pub use concealment::{ConcealmentEngine, Visibility};
pub use hex::{
    cube_round, hex_center, hex_distance, hex_vertices, pixel_to_hex, Cube, HexLayout,
};
pub use path::{compute_path, path_distance, route_steps};
pub use sensors::{SectorGeometry, SensorGeometry};
pub use targeting::{attackers_of, inbound_projectiles_to, target_of, TargetingOverlay};
