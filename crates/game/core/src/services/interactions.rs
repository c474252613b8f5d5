use crate::pickup::PickupId;

/// Overlap event source of a pickup's trigger volume.
///
/// Only subscribed pickups receive overlap events. Both calls are idempotent.
pub trait InteractionSource {
    fn subscribe(&mut self, owner: PickupId);
    fn unsubscribe(&mut self, owner: PickupId);
}
