//! Broadcast channel for pickup events.

use tokio::sync::broadcast;

use super::types::PickupEvent;

/// Pickup event bus.
///
/// Publishing never blocks, so the frame-driven world can send from any
/// lifecycle call; receivers poll with `try_recv` or await `recv`.
pub struct EventBus {
    sender: broadcast::Sender<PickupEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sender: broadcast::channel(capacity.max(1)).0,
        }
    }

    /// Publish an event to every subscriber
    pub fn publish(&self, event: PickupEvent) {
        if self.sender.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for pickup events");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PickupEvent> {
        self.sender.subscribe()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
