//! Content factory for loading pickup content from a data directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pickup_core::{ItemCatalog, PickupConfig};

use crate::loaders::{
    AssetManifest, AssetManifestLoader, ConfigLoader, ItemLoader, LevelData, LevelLoader,
    LoadResult,
};

/// Content factory that loads all pickup content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── assets.ron
/// ├── items.ron
/// └── levels/
///     └── demo.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load pickup configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<PickupConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(PickupConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the mesh manifest from `assets.ron`.
    pub fn load_assets(&self) -> LoadResult<AssetManifest> {
        let path = self.data_dir.join("assets.ron");
        AssetManifestLoader::load(&path)
    }

    /// Load an item catalog relative to the data directory.
    pub fn load_catalog(&self, relative: &Path) -> LoadResult<Arc<dyn ItemCatalog>> {
        let path = self.data_dir.join(relative);
        Ok(ItemLoader::load(&path)?.into_shared())
    }

    /// Load a level from `levels/{level_name}.ron`.
    ///
    /// `config` supplies the respawn time and interaction radius of placed
    /// pickups that leave them out.
    pub fn load_level(&self, level_name: &str, config: &PickupConfig) -> LoadResult<LevelData> {
        let path = self
            .data_dir
            .join("levels")
            .join(format!("{}.ron", level_name));
        LevelLoader::load(&path, config)
    }

    /// Load every catalog a level names, keyed by catalog name.
    pub fn load_level_catalogs(
        &self,
        level: &LevelData,
    ) -> LoadResult<BTreeMap<String, Arc<dyn ItemCatalog>>> {
        level
            .catalogs
            .iter()
            .map(|(name, relative)| -> LoadResult<(String, Arc<dyn ItemCatalog>)> {
                Ok((name.clone(), self.load_catalog(relative)?))
            })
            .collect()
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), PickupConfig::default());
    }

    #[test]
    fn level_catalogs_are_loaded_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("items.ron"),
            r#"(definitions: [(id: "b", kind: Tool)], rows: [(id: "a", kind: Tool, base: "b")])"#,
        )
        .unwrap();
        let factory = ContentFactory::new(dir.path());
        let mut level = LevelData::default();
        level
            .catalogs
            .insert("items".to_owned(), PathBuf::from("items.ron"));

        let catalogs = factory.load_level_catalogs(&level).unwrap();
        assert_eq!(catalogs["items"].ids().len(), 1);
    }
}
