//! General distance/environment sensor rule
//!
//! The concealment engine falls back to a `SectorGeometry` once none of its
//! override rules apply. `SensorGeometry` is the stock implementation, driven
//! by the sensor section of `TacticsConfig`.

use crate::core::config::TacticsConfig;
use crate::core::types::Position;
use crate::sector::{Entity, SectorState, Ship};
use crate::tactical::hex::hex_distance;

/// Source of the general "can this observer see that entity" predicate
pub trait SectorGeometry {
    fn can_observer_see_entity(
        &self,
        observer: &Ship,
        candidate: &Entity,
        sector: &SectorState,
    ) -> bool;
}

impl<F> SectorGeometry for F
where
    F: Fn(&Ship, &Entity, &SectorState) -> bool,
{
    fn can_observer_see_entity(
        &self,
        observer: &Ship,
        candidate: &Entity,
        sector: &SectorState,
    ) -> bool {
        self(observer, candidate, sector)
    }
}

/// Range-based detection reduced by nebulae and ion storms
#[derive(Debug, Clone, PartialEq)]
pub struct SensorGeometry {
    pub config: TacticsConfig,
}

impl Default for SensorGeometry {
    fn default() -> Self {
        Self::new(crate::core::config::config().clone())
    }
}

impl SensorGeometry {
    pub fn new(config: TacticsConfig) -> Self {
        Self { config }
    }

    /// Range lost because of the hazards covering one cell
    pub fn environment_penalty(&self, pos: Position, sector: &SectorState) -> u32 {
        let nebula = if sector.in_deep_nebula(pos) {
            self.config.deep_nebula_penalty
        } else if sector.in_nebula(pos) {
            self.config.nebula_penalty
        } else {
            0
        };

        let ion_storm = if sector.in_deep_ion_storm(pos) {
            self.config.deep_ion_storm_penalty
        } else if sector.in_ion_storm(pos) {
            self.config.ion_storm_penalty
        } else {
            0
        };

        nebula + ion_storm
    }

    /// Sensor reach from `observer` toward a target cell
    pub fn effective_range(&self, observer: &Ship, target: Position, sector: &SectorState) -> u32 {
        let mut range = self.config.base_sensor_range;
        if observer.scanning {
            range += self.config.active_scan_bonus;
        }

        range
            .saturating_sub(self.environment_penalty(observer.position, sector))
            .saturating_sub(self.environment_penalty(target, sector))
            .max(self.config.min_detection_range)
    }
}

impl SectorGeometry for SensorGeometry {
    fn can_observer_see_entity(
        &self,
        observer: &Ship,
        candidate: &Entity,
        sector: &SectorState,
    ) -> bool {
        let target = candidate.position();
        hex_distance(observer.position, target) <= self.effective_range(observer, target, sector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::{Grid, HazardField};

    fn observer_at(x: i32, y: i32) -> Ship {
        Ship::new("obs", Position::new(x, y), "Federation", "Federation")
    }

    fn contact_at(x: i32, y: i32) -> Entity {
        Entity::Ship(Ship::new("contact", Position::new(x, y), "Klingon", "Klingon"))
    }

    #[test]
    fn test_open_space_range() {
        let geometry = SensorGeometry::new(TacticsConfig::default());
        let sector = SectorState::new(Grid::default());
        let observer = observer_at(0, 0);
        // base range 6 along row 0
        assert!(geometry.can_observer_see_entity(&observer, &contact_at(6, 0), &sector));
        assert!(!geometry.can_observer_see_entity(&observer, &contact_at(8, 0), &sector));
    }

    #[test]
    fn test_active_scan_extends_range() {
        let geometry = SensorGeometry::new(TacticsConfig::default());
        let sector = SectorState::new(Grid::default());
        let mut observer = observer_at(0, 0);
        observer.scanning = true;
        assert!(geometry.can_observer_see_entity(&observer, &contact_at(8, 0), &sector));
    }

    #[test]
    fn test_deep_nebula_penalty_replaces_shallow() {
        let geometry = SensorGeometry::new(TacticsConfig::default());
        let pos = Position::new(4, 4);
        let shallow = SectorState::new(Grid::default()).with_nebula(HazardField::new([pos]));
        let deep = SectorState::new(Grid::default())
            .with_nebula(HazardField::new([pos]).with_deep([pos]));
        assert_eq!(geometry.environment_penalty(pos, &shallow), 2);
        assert_eq!(geometry.environment_penalty(pos, &deep), 4);
    }

    #[test]
    fn test_nebula_and_ion_storm_stack() {
        let geometry = SensorGeometry::new(TacticsConfig::default());
        let pos = Position::new(4, 4);
        let sector = SectorState::new(Grid::default())
            .with_nebula(HazardField::new([pos]))
            .with_ion_storm(HazardField::new([pos]));
        assert_eq!(geometry.environment_penalty(pos, &sector), 3);
    }

    #[test]
    fn test_deep_nebula_hides_distant_contact() {
        let geometry = SensorGeometry::new(TacticsConfig::default());
        let hidden = Position::new(4, 0);
        let sector = SectorState::new(Grid::default())
            .with_nebula(HazardField::new([hidden]).with_deep([hidden]));
        let observer = observer_at(0, 0);
        assert!(!geometry.can_observer_see_entity(&observer, &contact_at(4, 0), &sector));
        assert!(geometry.can_observer_see_entity(&observer, &contact_at(2, 0), &sector));
    }

    #[test]
    fn test_minimum_detection_range() {
        let geometry = SensorGeometry::new(TacticsConfig::default());
        let cells: Vec<Position> = Grid::default().cells().collect();
        let sector = SectorState::new(Grid::default())
            .with_nebula(HazardField::new(cells.clone()).with_deep(cells.clone()))
            .with_ion_storm(HazardField::new(cells.clone()).with_deep(cells));
        let observer = observer_at(3, 3);
        assert!(geometry.can_observer_see_entity(&observer, &contact_at(3, 4), &sector));
        assert!(!geometry.can_observer_see_entity(&observer, &contact_at(3, 5), &sector));
    }

    #[test]
    fn test_closure_as_geometry() {
        let always = |_: &Ship, _: &Entity, _: &SectorState| true;
        let sector = SectorState::new(Grid::default());
        assert!(always.can_observer_see_entity(&observer_at(0, 0), &contact_at(10, 9), &sector));
    }
}
