use pickup_core::PickupConfig;

/// Configuration of a [`World`](crate::World).
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub pickup: PickupConfig,
    /// Capacity of the pickup event broadcast channel.
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    pub fn with_pickup(pickup: PickupConfig) -> Self {
        Self {
            pickup,
            ..Self::default()
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            pickup: PickupConfig::default(),
            event_buffer_size: 100,
        }
    }
}
