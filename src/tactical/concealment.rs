//! Per-observer visibility with concealment overrides
//!
//! Override rules are checked in a fixed order and the first one that applies
//! decides. Only when none applies is the general sensor rule consulted.

use serde::{Deserialize, Serialize};

use crate::sector::{Entity, SectorState, Ship};
use crate::tactical::sensors::{SectorGeometry, SensorGeometry};

/// Which rule settled a visibility question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Torpedoes are always visible
    Projectile,
    /// Cloaked or cloaking ships are never visible
    Cloaked,
    /// Mine allow-list decided it
    MineAllowList { permitted: bool },
    /// General distance/environment rule decided it
    General { visible: bool },
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        match self {
            Visibility::Projectile => true,
            Visibility::Cloaked => false,
            Visibility::MineAllowList { permitted } => *permitted,
            Visibility::General { visible } => *visible,
        }
    }
}

/// Applies concealment overrides ahead of a general sensor rule
#[derive(Debug, Clone, Default)]
pub struct ConcealmentEngine<G = SensorGeometry> {
    geometry: G,
}

impl<G: SectorGeometry> ConcealmentEngine<G> {
    pub fn new(geometry: G) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Decide visibility and report which rule decided it
    pub fn decide(
        &self,
        observer: &Ship,
        candidate: &Entity,
        sector: &SectorState,
    ) -> Visibility {
        let decision = match candidate {
            Entity::TorpedoProjectile(_) => Visibility::Projectile,
            Entity::Ship(ship) if ship.cloak_state.is_concealed() => Visibility::Cloaked,
            Entity::Mine(mine) => Visibility::MineAllowList {
                permitted: mine.is_visible_to(&observer.ship_model),
            },
            Entity::Ship(_)
            | Entity::Planet(_)
            | Entity::Starbase(_)
            | Entity::AsteroidField(_)
            | Entity::EventBeacon(_)
            | Entity::Shuttle(_) => {
                let visible = self
                    .geometry
                    .can_observer_see_entity(observer, candidate, sector);
                return Visibility::General { visible };
            }
        };

        tracing::trace!(
            observer = %observer.id,
            candidate = %candidate.id(),
            ?decision,
            "concealment override"
        );
        decision
    }

    pub fn can_observer_see(
        &self,
        observer: &Ship,
        candidate: &Entity,
        sector: &SectorState,
    ) -> bool {
        self.decide(observer, candidate, sector).is_visible()
    }

    /// Entities the observer perceives, in sector order
    ///
    /// The observer's own entity is always included.
    pub fn visible_entities<'a>(
        &self,
        observer: &Ship,
        sector: &'a SectorState,
    ) -> Vec<&'a Entity> {
        sector
            .entities
            .iter()
            .filter(|e| e.id() == &observer.id || self.can_observer_see(observer, e, sector))
            .collect()
    }
}
