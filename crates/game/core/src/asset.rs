//! Soft asset references and resident mesh handles.
use core::fmt;

use crate::error::{ErrorSeverity, GameError};

/// Soft reference to a mesh asset by path.
///
/// Holding a reference does not load anything; an empty path is an unset
/// reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub const fn unset() -> Self {
        Self(String::new())
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            f.write_str("<unset>")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Mesh that is resident in memory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshHandle {
    /// Resolver-assigned id, stable for the lifetime of the resolver.
    pub id: u32,
    pub source: AssetRef,
}

impl MeshHandle {
    pub fn new(id: u32, source: AssetRef) -> Self {
        Self { id, source }
    }
}

/// Failure to resolve an [`AssetRef`] into a resident mesh.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssetError {
    /// The definition does not reference any mesh.
    #[error("mesh reference is unset")]
    Unset,

    /// The asset store has no asset at this path.
    #[error("mesh asset '{0}' not found")]
    NotFound(AssetRef),
}

impl GameError for AssetError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            AssetError::Unset => ErrorSeverity::Validation,
            AssetError::NotFound(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AssetError::Unset => "ASSET_UNSET",
            AssetError::NotFound(_) => "ASSET_NOT_FOUND",
        }
    }
}
