use std::time::Duration;

use crate::config::PickupConfig;
use crate::item::ItemId;

/// Authored, per-instance pickup properties.
///
/// This is the part of a pickup a level designer edits. Runtime state lives
/// in [`Pickup`](super::Pickup) and is never written back here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickupSpec {
    /// Key of the item in the catalog.
    pub item_id: ItemId,
    /// Name of the catalog this pickup resolves against.
    pub catalog: Option<String>,
    /// Whether the pickup comes back after being collected.
    pub should_respawn: bool,
    /// Seconds between collection and respawn.
    pub respawn_time: f32,
    /// Radius of the interaction sphere.
    pub interaction_radius: f32,
}

impl PickupSpec {
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
            ..Self::default()
        }
    }

    /// Spec with the authored defaults taken from `config`.
    pub fn from_config(item_id: impl Into<ItemId>, config: &PickupConfig) -> Self {
        Self {
            item_id: item_id.into(),
            catalog: None,
            should_respawn: false,
            respawn_time: config.default_respawn_time,
            interaction_radius: config.default_interaction_radius,
        }
    }

    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn with_respawn(mut self, respawn_time: f32) -> Self {
        self.should_respawn = true;
        self.respawn_time = respawn_time;
        self
    }

    /// Respawn delay as a duration. Negative or non-finite times respawn on
    /// the next timer update.
    pub fn respawn_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.respawn_time).unwrap_or(Duration::ZERO)
    }
}

impl Default for PickupSpec {
    fn default() -> Self {
        Self::from_config(ItemId::none(), &PickupConfig::default())
    }
}
