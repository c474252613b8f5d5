use pickup_core::{EntityId, ItemId, PickupId};
use serde::Serialize;

/// Lifecycle notifications published by [`World`](crate::World).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PickupEvent {
    /// The pickup was added to the world.
    Spawned { pickup: PickupId, item: ItemId },

    /// The pickup became active with a newly built item definition.
    Initialized {
        pickup: PickupId,
        item: ItemId,
        generation: u32,
    },

    /// Initialization aborted; the pickup has no representation.
    InitializeFailed {
        pickup: PickupId,
        error_code: &'static str,
        message: String,
    },

    /// A player character collected the pickup.
    Collected {
        pickup: PickupId,
        item: Option<ItemId>,
        by: EntityId,
        respawn_in_secs: Option<f32>,
    },

    /// The pickup was removed; `cancelled_respawn` tells whether a respawn was pending.
    Despawned {
        pickup: PickupId,
        cancelled_respawn: bool,
    },
}

impl PickupEvent {
    pub fn pickup(&self) -> PickupId {
        match self {
            PickupEvent::Spawned { pickup, .. }
            | PickupEvent::Initialized { pickup, .. }
            | PickupEvent::InitializeFailed { pickup, .. }
            | PickupEvent::Collected { pickup, .. }
            | PickupEvent::Despawned { pickup, .. } => *pickup,
        }
    }
}
