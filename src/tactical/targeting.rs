//! Targeting relationships around a selected entity
//!
//! Feeds overlay lines: who is locked onto the selection, what the selection
//! is locked onto, and which torpedoes are inbound. Ids are looked up in the
//! current entity list; anything that fails to resolve is treated as absent.

use serde::{Deserialize, Serialize};

use crate::core::types::EntityId;
use crate::sector::Entity;

/// Ships whose current target is `selected`, in input order
pub fn attackers_of(entities: &[Entity], selected: &EntityId) -> Vec<EntityId> {
    entities
        .iter()
        .filter_map(Entity::as_ship)
        .filter(|ship| &ship.id != selected)
        .filter(|ship| ship.current_target_id.as_ref() == Some(selected))
        .map(|ship| ship.id.clone())
        .collect()
}

/// The ship the selected ship is targeting, if it still exists
pub fn target_of(entities: &[Entity], selected: &EntityId) -> Option<EntityId> {
    let target_id = entities
        .iter()
        .filter_map(Entity::as_ship)
        .find(|ship| &ship.id == selected)?
        .current_target_id
        .as_ref()?;

    entities
        .iter()
        .filter_map(Entity::as_ship)
        .find(|ship| &ship.id == target_id)
        .map(|ship| ship.id.clone())
}

/// Torpedoes heading for `selected`, in input order
pub fn inbound_projectiles_to(entities: &[Entity], selected: &EntityId) -> Vec<EntityId> {
    entities
        .iter()
        .filter_map(|entity| match entity {
            Entity::TorpedoProjectile(torpedo) if &torpedo.target_id == selected => {
                Some(torpedo.id.clone())
            }
            _ => None,
        })
        .collect()
}

/// Everything an overlay needs for one selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingOverlay {
    pub selected: Option<EntityId>,
    pub attackers: Vec<EntityId>,
    pub target: Option<EntityId>,
    pub inbound_projectiles: Vec<EntityId>,
}

impl TargetingOverlay {
    pub fn derive(entities: &[Entity], selected: &EntityId) -> Self {
        Self {
            selected: Some(selected.clone()),
            attackers: attackers_of(entities, selected),
            target: target_of(entities, selected),
            inbound_projectiles: inbound_projectiles_to(entities, selected),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attackers.is_empty() && self.target.is_none() && self.inbound_projectiles.is_empty()
    }
}
