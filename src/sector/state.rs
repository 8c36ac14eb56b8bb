//! Sector snapshot: grid extent, entities and environmental hazards
//!
//! Built once per turn by the game loop and only read by the tactical layer.

use std::fs;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::core::config::{config, TacticsConfig};
use crate::core::error::{Result, TacticsError};
use crate::core::types::{EntityId, Position};
use crate::sector::entity::{Entity, Ship};

/// Rectangular extent of valid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
}

impl Default for Grid {
    /// Extent from the global tactics config
    fn default() -> Self {
        Self::from_config(config())
    }
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &TacticsConfig) -> Self {
        Self::new(config.grid_width, config.grid_height)
    }

    /// Check if a position is within grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }

    /// Every cell, column by column
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let height = self.height as i32;
        (0..self.width as i32).flat_map(move |x| (0..height).map(move |y| Position::new(x, y)))
    }
}

/// How a hazard field decides which of its cells are "deep"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeepRule {
    /// Only cells listed in `deep`
    #[default]
    Explicit,
    /// Listed cells, plus any cell whose six neighbors are all in the field
    Interior,
}

/// Set of cells covered by one kind of environmental hazard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardField {
    pub cells: AHashSet<Position>,
    pub deep: AHashSet<Position>,
    pub deep_rule: DeepRule,
}

impl HazardField {
    pub fn new(cells: impl IntoIterator<Item = Position>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Field whose deep cells are its fully enclosed interior
    pub fn interior(cells: impl IntoIterator<Item = Position>) -> Self {
        Self {
            deep_rule: DeepRule::Interior,
            ..Self::new(cells)
        }
    }

    pub fn with_deep(mut self, deep: impl IntoIterator<Item = Position>) -> Self {
        self.deep.extend(deep);
        self
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Deep cells are always members of the field
    pub fn is_deep(&self, pos: Position) -> bool {
        if !self.contains(pos) {
            return false;
        }
        if self.deep.contains(&pos) {
            return true;
        }
        match self.deep_rule {
            DeepRule::Explicit => false,
            DeepRule::Interior => pos.neighbors().iter().all(|n| self.contains(*n)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Immutable per-turn view of a sector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorState {
    #[serde(default)]
    pub grid: Grid,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub nebula: HazardField,
    #[serde(default)]
    pub ion_storm: HazardField,
}

impl SectorState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn with_entities(mut self, entities: impl IntoIterator<Item = Entity>) -> Self {
        self.entities.extend(entities);
        self
    }

    pub fn with_nebula(mut self, nebula: HazardField) -> Self {
        self.nebula = nebula;
        self
    }

    pub fn with_ion_storm(mut self, ion_storm: HazardField) -> Self {
        self.ion_storm = ion_storm;
        self
    }

    /// Resolve an id reference; dangling ids give `None`
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn ship(&self, id: &EntityId) -> Option<&Ship> {
        self.entity(id).and_then(Entity::as_ship)
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.entities.iter().filter_map(Entity::as_ship)
    }

    pub fn entities_at(&self, pos: Position) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.position() == pos)
    }

    /// The entity that would stop a ship entering this cell
    pub fn blocking_entity_at(&self, pos: Position) -> Option<&Entity> {
        self.entities_at(pos).find(|e| e.blocks_navigation())
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        self.blocking_entity_at(pos).is_some()
    }

    pub fn in_nebula(&self, pos: Position) -> bool {
        self.nebula.contains(pos)
    }

    pub fn in_deep_nebula(&self, pos: Position) -> bool {
        self.nebula.is_deep(pos)
    }

    pub fn in_ion_storm(&self, pos: Position) -> bool {
        self.ion_storm.contains(pos)
    }

    pub fn in_deep_ion_storm(&self, pos: Position) -> bool {
        self.ion_storm.is_deep(pos)
    }

    /// Check snapshot invariants: bounds, unique ids, single occupancy
    pub fn validate(&self) -> Result<()> {
        let mut seen: AHashSet<&EntityId> = AHashSet::with_capacity(self.entities.len());
        let mut occupants: AHashMap<Position, &EntityId> = AHashMap::new();

        for entity in &self.entities {
            let id = entity.id();
            let position = entity.position();

            if !self.grid.contains(position) {
                return Err(TacticsError::OutOfBounds {
                    id: id.clone(),
                    position,
                });
            }

            if !seen.insert(id) {
                return Err(TacticsError::DuplicateEntity(id.clone()));
            }

            if entity.occupies_cell() {
                if let Some(first) = occupants.insert(position, id) {
                    return Err(TacticsError::CellOccupied {
                        position,
                        first: first.clone(),
                        second: id.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            "Sector snapshot valid: {} entities on {}x{} grid",
            self.entities.len(),
            self.grid.width,
            self.grid.height
        );
        Ok(())
    }

    /// Parse and validate a scenario from TOML text
    ///
    /// A scenario without `[grid]` takes its extent from the global config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, config())
    }

    /// Parse and validate a scenario, sizing a missing `[grid]` from `config`
    pub fn from_toml_str_with(content: &str, config: &TacticsConfig) -> Result<Self> {
        let scenario: ScenarioFile = toml::from_str(content)?;
        let sector = SectorState {
            grid: scenario.grid.unwrap_or_else(|| Grid::from_config(config)),
            entities: scenario.entities,
            nebula: scenario.nebula,
            ion_storm: scenario.ion_storm,
        };
        sector.validate()?;
        Ok(sector)
    }

    /// Load a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, config())
    }

    pub fn load_with(path: impl AsRef<Path>, config: &TacticsConfig) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let sector = Self::from_toml_str_with(&content, config)?;
        tracing::debug!("Loaded sector scenario from {:?}", path);
        Ok(sector)
    }
}

/// On-disk scenario layout; `grid` stays optional until a config fills it
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    grid: Option<Grid>,
    #[serde(default)]
    entities: Vec<Entity>,
    #[serde(default)]
    nebula: HazardField,
    #[serde(default)]
    ion_storm: HazardField,
}
