//! Minimal [`pickup_core::AssetResolver`] backed by an in-memory registry.
use std::collections::{BTreeSet, HashMap};

use pickup_content::AssetManifest;
use pickup_core::{AssetError, AssetRef, AssetResolver, MeshHandle};

/// Known mesh assets and the subset currently resident.
#[derive(Debug, Default)]
pub struct AssetStore {
    known: BTreeSet<AssetRef>,
    resident: HashMap<AssetRef, MeshHandle>,
    next_id: u32,
    blocking_loads: usize,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every manifest mesh and makes the listed ones resident.
    pub fn from_manifest(manifest: &AssetManifest) -> Result<Self, AssetError> {
        let mut store = Self::new();
        for mesh in &manifest.meshes {
            store.register(mesh.clone());
        }
        for mesh in &manifest.resident {
            store.preload(mesh)?;
        }
        Ok(store)
    }

    /// Makes an asset loadable.
    pub fn register(&mut self, asset: AssetRef) {
        self.known.insert(asset);
    }

    /// Makes a known asset resident without counting it as a blocking load.
    pub fn preload(&mut self, asset: &AssetRef) -> Result<MeshHandle, AssetError> {
        if let Some(mesh) = self.resident.get(asset) {
            return Ok(mesh.clone());
        }
        self.make_resident(asset)
    }

    /// Drops a resident mesh; the next resolve has to load it again.
    pub fn evict(&mut self, asset: &AssetRef) -> bool {
        self.resident.remove(asset).is_some()
    }

    pub fn is_resident(&self, asset: &AssetRef) -> bool {
        self.resident.contains_key(asset)
    }

    /// Number of loads that blocked a frame so far.
    pub fn blocking_loads(&self) -> usize {
        self.blocking_loads
    }

    fn make_resident(&mut self, asset: &AssetRef) -> Result<MeshHandle, AssetError> {
        if asset.is_unset() {
            return Err(AssetError::Unset);
        }
        if !self.known.contains(asset) {
            return Err(AssetError::NotFound(asset.clone()));
        }
        self.next_id += 1;
        let mesh = MeshHandle::new(self.next_id, asset.clone());
        self.resident.insert(asset.clone(), mesh.clone());
        Ok(mesh)
    }
}

impl AssetResolver for AssetStore {
    fn find_resident(&self, asset: &AssetRef) -> Option<MeshHandle> {
        self.resident.get(asset).cloned()
    }

    fn load_blocking(&mut self, asset: &AssetRef) -> Result<MeshHandle, AssetError> {
        let mesh = self.make_resident(asset)?;
        self.blocking_loads += 1;
        tracing::debug!("Blocking load of mesh {} (id {})", asset, mesh.id);
        Ok(mesh)
    }
}
