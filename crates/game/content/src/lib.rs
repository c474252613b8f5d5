//! Data-driven pickup content and loaders.
//!
//! This crate reads authored data from RON/TOML files:
//! - Item catalogs: definition assets plus the rows that link them (RON)
//! - Asset manifests: which meshes exist and which start resident (RON)
//! - Levels: catalog sources, placed pickups, scripted overlaps (RON)
//! - Pickup configuration (TOML)
//!
//! All loaders produce pickup-core types directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AssetManifest, AssetManifestLoader, ConfigLoader, ContentFactory, ItemLoader, LevelData,
    LevelLoader, LoadResult, PlacedPickup, ScriptedOverlap,
};
