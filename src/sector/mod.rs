//! Sector model - the per-turn snapshot the tactical layer reads
//!
//! Entities, the grid they live on, and the nebula/ion-storm hazard cells.

pub mod entity;
pub mod state;

pub use entity::{
    AsteroidField, CloakState, Entity, EventBeacon, Mine, Planet, Ship, Shuttle, Starbase,
    TorpedoProjectile,
};
pub use state::{DeepRule, Grid, HazardField, SectorState};
