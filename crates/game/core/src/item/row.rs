use std::sync::Arc;

use super::{ItemDefinition, ItemId, ItemKind, ItemText};

/// One authored row of the item catalog.
///
/// The row carries its own id, kind and text for table views, and links the
/// definition asset (`base`) that owns the world mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogRow {
    pub id: ItemId,
    pub kind: ItemKind,
    pub text: ItemText,
    pub base: Arc<ItemDefinition>,
}

impl CatalogRow {
    pub fn new(id: impl Into<ItemId>, kind: ItemKind, text: ItemText, base: Arc<ItemDefinition>) -> Self {
        Self {
            id: id.into(),
            kind,
            text,
            base,
        }
    }

    /// Row whose own fields mirror its linked definition.
    pub fn from_definition(base: Arc<ItemDefinition>) -> Self {
        Self {
            id: base.id.clone(),
            kind: base.kind,
            text: base.text.clone(),
            base,
        }
    }

    /// Builds a fresh definition for a pickup.
    ///
    /// The id comes from the row (it is the key the pickup resolved); kind,
    /// text and mesh reference come from the linked definition.
    pub fn instantiate(&self) -> ItemDefinition {
        ItemDefinition {
            id: self.id.clone(),
            kind: self.base.kind,
            text: self.base.text.clone(),
            world_mesh: self.base.world_mesh.clone(),
        }
    }
}
