use std::collections::BTreeSet;

use pickup_core::{InteractionSource, PickupId};

/// Tracks which pickups currently receive overlap events.
#[derive(Debug, Default)]
pub struct InteractionRouter {
    subscribed: BTreeSet<PickupId>,
}

impl InteractionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_subscribed(&self, owner: PickupId) -> bool {
        self.subscribed.contains(&owner)
    }
}

impl InteractionSource for InteractionRouter {
    fn subscribe(&mut self, owner: PickupId) {
        if self.subscribed.insert(owner) {
            tracing::trace!("{} subscribed to overlaps", owner);
        }
    }

    fn unsubscribe(&mut self, owner: PickupId) {
        if self.subscribed.remove(&owner) {
            tracing::trace!("{} unsubscribed from overlaps", owner);
        }
    }
}
