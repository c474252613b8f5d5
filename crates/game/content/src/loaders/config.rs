//! Pickup configuration loader.

use std::path::Path;

use pickup_core::PickupConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for pickup configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<PickupConfig> {
        let content = read_file(path)?;
        let config: PickupConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_respawn_time = 10.0\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.default_respawn_time, 10.0);
        assert_eq!(
            config.default_interaction_radius,
            PickupConfig::DEFAULT_INTERACTION_RADIUS
        );
    }
}
