use crate::asset::AssetRef;

use super::{ItemId, ItemKind, ItemText};

/// Item definition with a soft reference to its world mesh.
///
/// # Ownership
///
/// Authored definitions are shared read-only through catalog rows. Every
/// pickup initialization builds a *new* definition from the row instead of
/// holding on to the authored one, so a respawned pickup never reuses the
/// instance from its previous cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: ItemText,
    #[cfg_attr(feature = "serde", serde(default))]
    pub world_mesh: AssetRef,
}

impl ItemDefinition {
    pub fn new(id: impl Into<ItemId>, kind: ItemKind, text: ItemText, world_mesh: AssetRef) -> Self {
        Self {
            id: id.into(),
            kind,
            text,
            world_mesh,
        }
    }
}
