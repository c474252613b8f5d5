use crate::asset::MeshHandle;
use crate::pickup::PickupId;

/// Collision response of a scene part.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CollisionMode {
    /// No queries, no blocking.
    #[default]
    None,
    /// Overlap queries only; nothing is physically blocked.
    QueryOnly,
    /// Queries and physical blocking.
    Full,
}

impl CollisionMode {
    pub const fn allows_queries(self) -> bool {
        matches!(self, Self::QueryOnly | Self::Full)
    }
}

/// The two scene parts a pickup owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScenePart {
    /// Visual mesh.
    Mesh,
    /// Interaction sphere around the mesh.
    Sphere,
}

/// Imperative, fire-and-forget scene updates.
pub trait SceneService {
    fn set_mesh(&mut self, owner: PickupId, mesh: Option<MeshHandle>);
    fn set_visibility(&mut self, owner: PickupId, visible: bool);
    fn set_collision(&mut self, owner: PickupId, part: ScenePart, mode: CollisionMode);
    fn set_sphere_radius(&mut self, owner: PickupId, radius: f32);
}
