//! Content loaders for reading pickup data from files.

pub mod assets;
pub mod config;
pub mod factory;
pub mod item;
pub mod level;

pub use assets::{AssetManifest, AssetManifestLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use level::{LevelData, LevelLoader, PlacedPickup, ScriptedOverlap};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
