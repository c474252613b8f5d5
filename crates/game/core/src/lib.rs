//! Pickup lifecycle and item data resolution.
//!
//! `pickup-core` defines the item catalog model, the host service traits a
//! pickup drives, and the [`Pickup`] state machine
//! (`Uninitialized → Active → Collected → (respawn) → Active …`).
//! It performs no I/O: content loading lives in `pickup-content` and a
//! reference host in `pickup-runtime`.
pub mod asset;
pub mod catalog;
pub mod config;
pub mod error;
pub mod interaction;
pub mod item;
pub mod pickup;
pub mod services;

#[cfg(feature = "editor")]
pub mod editor;

pub use asset::{AssetError, AssetRef, MeshHandle};
pub use catalog::{CatalogError, ItemCatalog, ItemTable};
pub use config::PickupConfig;
pub use error::{ErrorSeverity, GameError};
pub use interaction::{Capabilities, EntityId, Interactor};
pub use item::{CatalogRow, ItemDefinition, ItemId, ItemKind, ItemText};
pub use pickup::{
    IgnoreReason, InitializeError, InteractionOutcome, OVERLAP_DEBUG_MESSAGE, Pickup, PickupId,
    PickupPhase, PickupSpec, RespawnOutcome,
};
pub use services::{
    AssetResolver, CollisionMode, Diagnostics, InteractionSource, SceneService,
    ScenePart, Services, TimerHandle, TimerService,
};
