//! Pickup lifecycle events broadcast by the world.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::PickupEvent;
