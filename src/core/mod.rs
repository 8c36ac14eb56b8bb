pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, TacticsConfig};
pub use error::{Result, TacticsError};
pub use types::{EntityId, Position};
