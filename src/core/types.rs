//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for sector entities
///
/// References between entities (`current_target_id`, `target_id`) hold one of
/// these and are resolved against the current snapshot, never owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Cell address in an odd-column ("odd-q") offset hex grid
///
/// Odd columns sit half a cell lower than even ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        let id = EntityId::new("enterprise");
        assert_eq!(id.to_string(), "enterprise");
        assert_eq!(id, EntityId::from("enterprise"));
    }

    #[test]
    fn test_entity_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&EntityId::new("B")).unwrap();
        assert_eq!(json, "\"B\"");
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
    }
}
