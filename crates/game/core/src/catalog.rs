//! Read-only item catalog.
//!
//! Catalogs are authored data loaded once and never mutated at runtime, so
//! they are shared between pickups as `Arc<dyn ItemCatalog>`.
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{ErrorSeverity, GameError};
use crate::item::{CatalogRow, ItemDefinition, ItemId};

pub trait ItemCatalog: Send + Sync {
    /// Returns the row whose key exactly matches `id`.
    fn row(&self, id: &ItemId) -> Option<CatalogRow>;

    /// Returns every key in this catalog, sorted.
    fn ids(&self) -> Vec<ItemId>;

    fn contains(&self, id: &ItemId) -> bool {
        self.row(id).is_some()
    }
}

/// Errors raised while assembling a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog row '{0}' defined more than once")]
    DuplicateRow(ItemId),

    #[error("catalog rows must have a non-empty id")]
    EmptyRowId,
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateRow(_) => "CATALOG_DUPLICATE_ROW",
            CatalogError::EmptyRowId => "CATALOG_EMPTY_ROW_ID",
        }
    }
}

/// [`ItemCatalog`] backed by an in-memory map.
#[derive(Clone, Debug, Default)]
pub struct ItemTable {
    rows: BTreeMap<ItemId, CatalogRow>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from rows, rejecting empty and duplicate ids.
    pub fn from_rows(rows: impl IntoIterator<Item = CatalogRow>) -> Result<Self, CatalogError> {
        let mut table = Self::new();
        for row in rows {
            table.insert(row)?;
        }
        Ok(table)
    }

    /// Convenience for tables whose rows mirror their definitions.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, CatalogError> {
        Self::from_rows(
            definitions
                .into_iter()
                .map(|def| CatalogRow::from_definition(Arc::new(def))),
        )
    }

    pub fn insert(&mut self, row: CatalogRow) -> Result<(), CatalogError> {
        if row.id.is_none() {
            return Err(CatalogError::EmptyRowId);
        }
        if self.rows.contains_key(&row.id) {
            return Err(CatalogError::DuplicateRow(row.id));
        }
        self.rows.insert(row.id.clone(), row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Freezes the table for sharing between pickups.
    pub fn into_shared(self) -> Arc<dyn ItemCatalog> {
        Arc::new(self)
    }
}

impl ItemCatalog for ItemTable {
    fn row(&self, id: &ItemId) -> Option<CatalogRow> {
        self.rows.get(id).cloned()
    }

    fn ids(&self) -> Vec<ItemId> {
        self.rows.keys().cloned().collect()
    }
}
