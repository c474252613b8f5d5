//! Item catalog loader.
//!
//! File format:
//! ```ron
//! (
//!     definitions: [
//!         (id: "sword_base", kind: Tool, text: (name: "Sword", description: "A trusty blade."),
//!          world_mesh: "/Game/Meshes/Sword"),
//!     ],
//!     rows: [
//!         (id: "sword_01", kind: Tool, text: (name: "Sword", description: "A trusty blade."),
//!          base: "sword_base"),
//!     ],
//! )
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use pickup_core::{CatalogRow, ItemDefinition, ItemId, ItemKind, ItemTable, ItemText};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogRon {
    #[serde(default)]
    pub definitions: Vec<ItemDefinition>,
    pub rows: Vec<CatalogRowRon>,
}

/// A catalog row whose definition link is still a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRowRon {
    pub id: ItemId,
    pub kind: ItemKind,
    #[serde(default)]
    pub text: ItemText,
    /// Id of the entry in `definitions` this row links to.
    pub base: ItemId,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog {}: {}", path.display(), e))
    }

    /// Parse and link an item catalog from RON text.
    ///
    /// Rows linking an unknown definition, duplicate definitions and
    /// duplicate rows are rejected.
    pub fn parse(content: &str) -> LoadResult<ItemTable> {
        let catalog: ItemCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut definitions: HashMap<ItemId, Arc<ItemDefinition>> = HashMap::new();
        for definition in catalog.definitions {
            let id = definition.id.clone();
            if definitions.insert(id.clone(), Arc::new(definition)).is_some() {
                anyhow::bail!("item definition '{}' defined more than once", id);
            }
        }

        let rows = catalog
            .rows
            .into_iter()
            .map(|row| -> LoadResult<CatalogRow> {
                let base = definitions.get(&row.base).cloned().ok_or_else(|| {
                    anyhow::anyhow!(
                        "catalog row '{}' links unknown definition '{}'",
                        row.id,
                        row.base
                    )
                })?;
                Ok(CatalogRow::new(row.id, row.kind, row.text, base))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(ItemTable::from_rows(rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickup_core::{AssetRef, ItemCatalog};

    const CATALOG: &str = r#"(
        definitions: [
            (id: "sword_base", kind: Tool, text: (name: "Sword", description: "A trusty blade."),
             world_mesh: "/Game/Meshes/Sword"),
            (id: "apple_base", kind: Consumable, text: (name: "Apple"), world_mesh: "/Game/Meshes/Apple"),
        ],
        rows: [
            (id: "sword_01", kind: Tool, text: (name: "Sword", description: "A trusty blade."), base: "sword_base"),
            (id: "apple", kind: Consumable, base: "apple_base"),
        ],
    )"#;

    #[test]
    fn rows_link_their_definitions() {
        let table = ItemLoader::parse(CATALOG).unwrap();
        assert_eq!(table.len(), 2);

        let row = table.row(&ItemId::new("sword_01")).unwrap();
        assert_eq!(row.base.id, ItemId::new("sword_base"));
        assert_eq!(row.base.world_mesh, AssetRef::new("/Game/Meshes/Sword"));

        let apple = table.row(&ItemId::new("apple")).unwrap().instantiate();
        assert_eq!(apple.kind, ItemKind::Consumable);
        assert_eq!(apple.text.name, "Apple");
        assert_eq!(apple.text.description, "");
    }

    #[test]
    fn dangling_link_is_an_error() {
        let err = ItemLoader::parse(
            r#"(definitions: [], rows: [(id: "axe", kind: Tool, base: "axe_base")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown definition 'axe_base'"));
    }

    #[test]
    fn duplicate_rows_are_an_error() {
        let err = ItemLoader::parse(
            r#"(
                definitions: [(id: "b", kind: Tool)],
                rows: [(id: "a", kind: Tool, base: "b"), (id: "a", kind: Tool, base: "b")],
            )"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn load_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.ron");
        std::fs::write(&path, "(rows: [").unwrap();

        let err = ItemLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("items.ron"));
    }
}
