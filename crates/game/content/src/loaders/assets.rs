//! Mesh asset manifest loader.
//!
//! ```ron
//! (
//!     meshes: ["/Game/Meshes/Sword", "/Game/Meshes/Apple"],
//!     resident: ["/Game/Meshes/Apple"],
//! )
//! ```

use std::path::Path;

use pickup_core::AssetRef;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Meshes known to the asset store, and the subset already in memory at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    pub meshes: Vec<AssetRef>,
    #[serde(default)]
    pub resident: Vec<AssetRef>,
}

/// Loader for asset manifests from RON files.
pub struct AssetManifestLoader;

impl AssetManifestLoader {
    /// Load an asset manifest. Resident meshes must also be listed in `meshes`.
    pub fn load(path: &Path) -> LoadResult<AssetManifest> {
        let content = read_file(path)?;
        let manifest: AssetManifest = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse asset manifest RON: {}", e))?;

        if let Some(stray) = manifest
            .resident
            .iter()
            .find(|asset| !manifest.meshes.contains(asset))
        {
            anyhow::bail!("resident mesh '{}' is not listed in meshes", stray);
        }

        Ok(manifest)
    }
}
