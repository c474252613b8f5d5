/// Pickup tuning constants and authored defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickupConfig {
    /// Seconds a collected pickup waits before respawning, when the instance
    /// does not override it.
    pub default_respawn_time: f32,
    /// Radius of the interaction sphere.
    pub default_interaction_radius: f32,
    /// Lifetime in seconds of developer-facing on-screen debug messages.
    pub debug_message_secs: f32,
}

impl PickupConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RESPAWN_TIME: f32 = 4.0;
    pub const DEFAULT_INTERACTION_RADIUS: f32 = 320.0;
    pub const DEFAULT_DEBUG_MESSAGE_SECS: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            default_respawn_time: Self::DEFAULT_RESPAWN_TIME,
            default_interaction_radius: Self::DEFAULT_INTERACTION_RADIUS,
            debug_message_secs: Self::DEFAULT_DEBUG_MESSAGE_SECS,
        }
    }

    pub fn with_respawn_time(default_respawn_time: f32) -> Self {
        Self {
            default_respawn_time,
            ..Self::new()
        }
    }
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self::new()
    }
}
