//! Serializable snapshots of world state.
use pickup_core::{ItemId, Pickup, PickupId, PickupPhase};
use serde::Serialize;

use crate::services::VisualState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldReport {
    pub now_secs: f64,
    pub pickups: Vec<PickupReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickupReport {
    pub id: PickupId,
    pub item_id: ItemId,
    pub phase: PickupPhase,
    pub generation: u32,
    pub respawn_pending: bool,
    pub visual: Option<VisualState>,
}

impl PickupReport {
    pub fn new(pickup: &Pickup, visual: Option<&VisualState>) -> Self {
        Self {
            id: pickup.id(),
            item_id: pickup.spec().item_id.clone(),
            phase: pickup.phase(),
            generation: pickup.generation(),
            respawn_pending: pickup.pending_respawn().is_some(),
            visual: visual.cloned(),
        }
    }
}
