use crate::asset::AssetError;
use crate::error::{ErrorSeverity, GameError};
use crate::item::ItemId;

/// Reasons a pickup could not (re)initialize.
///
/// None of these reach the player. The pickup is left exactly as it was, which
/// for a fresh spawn means no item definition and no visual representation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializeError {
    /// The pickup's item id is unset; no lookup was attempted.
    #[error("pickup item id is unset")]
    EmptyItemId,

    /// The pickup has no catalog to look its id up in.
    #[error("pickup has no item catalog")]
    CatalogUnset,

    /// The id is not a key of the catalog.
    #[error("item '{0}' not found in catalog")]
    RowNotFound(ItemId),

    /// The item's world mesh could not be made resident.
    #[error("failed to resolve world mesh: {0}")]
    Asset(#[from] AssetError),
}

impl GameError for InitializeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InitializeError::EmptyItemId
            | InitializeError::CatalogUnset
            | InitializeError::RowNotFound(_) => ErrorSeverity::Validation,
            InitializeError::Asset(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            InitializeError::EmptyItemId => "PICKUP_EMPTY_ITEM_ID",
            InitializeError::CatalogUnset => "PICKUP_CATALOG_UNSET",
            InitializeError::RowNotFound(_) => "PICKUP_ROW_NOT_FOUND",
            InitializeError::Asset(err) => err.error_code(),
        }
    }
}
