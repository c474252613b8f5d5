use crate::asset::{AssetError, AssetRef, MeshHandle};

/// Resolves soft mesh references into resident meshes.
pub trait AssetResolver {
    /// Returns the mesh if it is already resident, without loading anything.
    fn find_resident(&self, asset: &AssetRef) -> Option<MeshHandle>;

    /// Loads the mesh synchronously, blocking the calling frame.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Unset`] for an empty reference and
    /// [`AssetError::NotFound`] when no asset exists at the path.
    fn load_blocking(&mut self, asset: &AssetRef) -> Result<MeshHandle, AssetError>;

    /// Resident mesh if available, otherwise a blocking load.
    fn resolve(&mut self, asset: &AssetRef) -> Result<MeshHandle, AssetError> {
        if asset.is_unset() {
            return Err(AssetError::Unset);
        }
        match self.find_resident(asset) {
            Some(mesh) => Ok(mesh),
            None => self.load_blocking(asset),
        }
    }
}
