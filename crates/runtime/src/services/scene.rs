use std::collections::BTreeMap;

use pickup_core::{CollisionMode, MeshHandle, PickupId, SceneService, ScenePart};
use serde::Serialize;

/// What the scene currently shows for one pickup.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualState {
    pub mesh: Option<MeshHandle>,
    pub visible: bool,
    pub mesh_collision: CollisionMode,
    pub sphere_collision: CollisionMode,
    pub sphere_radius: f32,
}

impl VisualState {
    /// True if overlap queries can reach the pickup.
    pub fn is_interactable(&self) -> bool {
        self.sphere_collision.allows_queries() || self.mesh_collision.allows_queries()
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            mesh: None,
            visible: false,
            mesh_collision: CollisionMode::None,
            sphere_collision: CollisionMode::None,
            sphere_radius: 0.0,
        }
    }
}

/// Scene graph stand-in: one [`VisualState`] per pickup.
#[derive(Debug, Default)]
pub struct SceneState {
    visuals: BTreeMap<PickupId, VisualState>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty, hidden slot for a newly spawned pickup.
    pub fn insert(&mut self, owner: PickupId) {
        self.visuals.entry(owner).or_default();
    }

    pub fn get(&self, owner: PickupId) -> Option<&VisualState> {
        self.visuals.get(&owner)
    }

    pub fn remove(&mut self, owner: PickupId) -> Option<VisualState> {
        self.visuals.remove(&owner)
    }

    fn slot(&mut self, owner: PickupId) -> &mut VisualState {
        self.visuals.entry(owner).or_default()
    }
}

impl SceneService for SceneState {
    fn set_mesh(&mut self, owner: PickupId, mesh: Option<MeshHandle>) {
        self.slot(owner).mesh = mesh;
    }

    fn set_visibility(&mut self, owner: PickupId, visible: bool) {
        self.slot(owner).visible = visible;
    }

    fn set_collision(&mut self, owner: PickupId, part: ScenePart, mode: CollisionMode) {
        let visual = self.slot(owner);
        match part {
            ScenePart::Mesh => visual.mesh_collision = mode,
            ScenePart::Sphere => visual.sphere_collision = mode,
        }
    }

    fn set_sphere_radius(&mut self, owner: PickupId, radius: f32) {
        self.slot(owner).sphere_radius = radius;
    }
}
