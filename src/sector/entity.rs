//! Sector entities
//!
//! One closed sum type over every kind of object that can sit on the grid.
//! Serialized with an internal `type` tag so scenario files read naturally.

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Position};

/// Ship stealth mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CloakState {
    Cloaked,
    Cloaking,
    Decloaking,
    #[default]
    None,
}

impl CloakState {
    /// Fully cloaked or in the process of cloaking
    pub fn is_concealed(&self) -> bool {
        matches!(self, CloakState::Cloaked | CloakState::Cloaking)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: EntityId,
    pub position: Position,
    pub faction: String,
    /// Visual/config table key, also what mine allow-lists match against
    pub ship_model: String,
    #[serde(default)]
    pub cloak_state: CloakState,
    #[serde(default)]
    pub current_target_id: Option<EntityId>,
    /// Active scan running this turn
    #[serde(default)]
    pub scanning: bool,
    #[serde(default)]
    pub hull: Option<u32>,
    #[serde(default)]
    pub max_hull: Option<u32>,
}

impl Ship {
    pub fn new(
        id: impl Into<String>,
        position: Position,
        faction: impl Into<String>,
        ship_model: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(id),
            position,
            faction: faction.into(),
            ship_model: ship_model.into(),
            cloak_state: CloakState::None,
            current_target_id: None,
            scanning: false,
            hull: None,
            max_hull: None,
        }
    }

    pub fn targeting(mut self, target: &EntityId) -> Self {
        self.current_target_id = Some(target.clone());
        self
    }

    pub fn with_cloak(mut self, state: CloakState) -> Self {
        self.cloak_state = state;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: EntityId,
    pub position: Position,
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default)]
    pub hull: Option<u32>,
    #[serde(default)]
    pub max_hull: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starbase {
    pub id: EntityId,
    pub position: Position,
    pub faction: String,
    #[serde(default)]
    pub hull: Option<u32>,
    #[serde(default)]
    pub max_hull: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidField {
    pub id: EntityId,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBeacon {
    pub id: EntityId,
    pub position: Position,
    #[serde(default)]
    pub faction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorpedoProjectile {
    pub id: EntityId,
    pub position: Position,
    pub faction: String,
    pub target_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shuttle {
    pub id: EntityId,
    pub position: Position,
    pub faction: String,
    #[serde(default)]
    pub hull: Option<u32>,
    #[serde(default)]
    pub max_hull: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mine {
    pub id: EntityId,
    pub position: Position,
    pub faction: String,
    /// Ship models permitted to see this mine; anything absent cannot
    #[serde(default)]
    pub visible_to: Vec<String>,
}

impl Mine {
    pub fn is_visible_to(&self, ship_model: &str) -> bool {
        self.visible_to.iter().any(|model| model == ship_model)
    }
}

/// Anything occupying (or passing through) a sector cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entity {
    Ship(Ship),
    Planet(Planet),
    Starbase(Starbase),
    AsteroidField(AsteroidField),
    EventBeacon(EventBeacon),
    TorpedoProjectile(TorpedoProjectile),
    Shuttle(Shuttle),
    Mine(Mine),
}

impl Entity {
    pub fn id(&self) -> &EntityId {
        match self {
            Entity::Ship(e) => &e.id,
            Entity::Planet(e) => &e.id,
            Entity::Starbase(e) => &e.id,
            Entity::AsteroidField(e) => &e.id,
            Entity::EventBeacon(e) => &e.id,
            Entity::TorpedoProjectile(e) => &e.id,
            Entity::Shuttle(e) => &e.id,
            Entity::Mine(e) => &e.id,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Entity::Ship(e) => e.position,
            Entity::Planet(e) => e.position,
            Entity::Starbase(e) => e.position,
            Entity::AsteroidField(e) => e.position,
            Entity::EventBeacon(e) => e.position,
            Entity::TorpedoProjectile(e) => e.position,
            Entity::Shuttle(e) => e.position,
            Entity::Mine(e) => e.position,
        }
    }

    /// Allegiance, if the entity has one
    pub fn faction(&self) -> Option<&str> {
        match self {
            Entity::Ship(e) => Some(&e.faction),
            Entity::Planet(e) => e.faction.as_deref(),
            Entity::Starbase(e) => Some(&e.faction),
            Entity::AsteroidField(_) => None,
            Entity::EventBeacon(e) => e.faction.as_deref(),
            Entity::TorpedoProjectile(e) => Some(&e.faction),
            Entity::Shuttle(e) => Some(&e.faction),
            Entity::Mine(e) => Some(&e.faction),
        }
    }

    /// `(hull, max_hull)` for entities that track structural damage
    pub fn hull(&self) -> Option<(u32, u32)> {
        let (hull, max_hull) = match self {
            Entity::Ship(e) => (e.hull, e.max_hull),
            Entity::Planet(e) => (e.hull, e.max_hull),
            Entity::Starbase(e) => (e.hull, e.max_hull),
            Entity::Shuttle(e) => (e.hull, e.max_hull),
            Entity::AsteroidField(_)
            | Entity::EventBeacon(_)
            | Entity::TorpedoProjectile(_)
            | Entity::Mine(_) => (None, None),
        };
        Some((hull?, max_hull?))
    }

    /// Tag used in scenario files and by rendering lookup tables
    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Ship(_) => "ship",
            Entity::Planet(_) => "planet",
            Entity::Starbase(_) => "starbase",
            Entity::AsteroidField(_) => "asteroid_field",
            Entity::EventBeacon(_) => "event_beacon",
            Entity::TorpedoProjectile(_) => "torpedo_projectile",
            Entity::Shuttle(_) => "shuttle",
            Entity::Mine(_) => "mine",
        }
    }

    pub fn as_ship(&self) -> Option<&Ship> {
        match self {
            Entity::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    /// Takes up the cell exclusively; asteroids and torpedoes share cells
    pub fn occupies_cell(&self) -> bool {
        !matches!(self, Entity::AsteroidField(_) | Entity::TorpedoProjectile(_))
    }

    /// Counts as an obstacle for navigation
    ///
    /// Cloaked and cloaking ships are never obstacles.
    pub fn blocks_navigation(&self) -> bool {
        match self {
            Entity::Ship(ship) => !ship.cloak_state.is_concealed(),
            other => other.occupies_cell(),
        }
    }
}

impl From<Ship> for Entity {
    fn from(ship: Ship) -> Self {
        Entity::Ship(ship)
    }
}

impl From<Mine> for Entity {
    fn from(mine: Mine) -> Self {
        Entity::Mine(mine)
    }
}

impl From<TorpedoProjectile> for Entity {
    fn from(torpedo: TorpedoProjectile) -> Self {
        Entity::TorpedoProjectile(torpedo)
    }
}
