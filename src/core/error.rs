use thiserror::Error;

use crate::core::types::{EntityId, Position};

#[derive(Error, Debug)]
pub enum TacticsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    #[error("Entity {id} at {position} lies outside the grid")]
    OutOfBounds { id: EntityId, position: Position },

    #[error("Duplicate entity id: {0}")]
    DuplicateEntity(EntityId),

    #[error("Cell {position} occupied by both {first} and {second}")]
    CellOccupied {
        position: Position,
        first: EntityId,
        second: EntityId,
    },
}

pub type Result<T> = std::result::Result<T, TacticsError>;
