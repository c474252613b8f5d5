//! In-memory services recording every call, for unit tests.
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;

use crate::asset::{AssetError, AssetRef, MeshHandle};
use crate::pickup::PickupId;

use super::{
    AssetResolver, CollisionMode, Diagnostics, InteractionSource, SceneService, ScenePart,
    Services, TimerHandle, TimerService,
};

#[derive(Default)]
pub struct FakeAssets {
    pub resident: HashMap<AssetRef, MeshHandle>,
    pub on_disk: HashSet<AssetRef>,
    pub blocking_loads: usize,
    next_id: u32,
}

impl FakeAssets {
    pub fn add_on_disk(&mut self, path: &str) {
        self.on_disk.insert(AssetRef::new(path));
    }

    pub fn add_resident(&mut self, path: &str) {
        self.next_id += 1;
        let asset = AssetRef::new(path);
        self.resident
            .insert(asset.clone(), MeshHandle::new(self.next_id, asset));
    }
}

impl AssetResolver for FakeAssets {
    fn find_resident(&self, asset: &AssetRef) -> Option<MeshHandle> {
        self.resident.get(asset).cloned()
    }

    fn load_blocking(&mut self, asset: &AssetRef) -> Result<MeshHandle, AssetError> {
        if asset.is_unset() {
            return Err(AssetError::Unset);
        }
        if !self.on_disk.contains(asset) {
            return Err(AssetError::NotFound(asset.clone()));
        }
        self.blocking_loads += 1;
        self.next_id += 1;
        let mesh = MeshHandle::new(self.next_id, asset.clone());
        self.resident.insert(asset.clone(), mesh.clone());
        Ok(mesh)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FakeVisual {
    pub mesh: Option<MeshHandle>,
    pub visible: bool,
    pub mesh_collision: CollisionMode,
    pub sphere_collision: CollisionMode,
    pub radius: f32,
}

#[derive(Default)]
pub struct FakeScene {
    pub visuals: HashMap<PickupId, FakeVisual>,
    pub calls: usize,
}

impl FakeScene {
    pub fn visual(&self, owner: PickupId) -> FakeVisual {
        self.visuals.get(&owner).cloned().unwrap_or_default()
    }

    fn entry(&mut self, owner: PickupId) -> &mut FakeVisual {
        self.calls += 1;
        self.visuals.entry(owner).or_default()
    }
}

impl SceneService for FakeScene {
    fn set_mesh(&mut self, owner: PickupId, mesh: Option<MeshHandle>) {
        self.entry(owner).mesh = mesh;
    }

    fn set_visibility(&mut self, owner: PickupId, visible: bool) {
        self.entry(owner).visible = visible;
    }

    fn set_collision(&mut self, owner: PickupId, part: ScenePart, mode: CollisionMode) {
        let visual = self.entry(owner);
        match part {
            ScenePart::Mesh => visual.mesh_collision = mode,
            ScenePart::Sphere => visual.sphere_collision = mode,
        }
    }

    fn set_sphere_radius(&mut self, owner: PickupId, radius: f32) {
        self.entry(owner).radius = radius;
    }
}

#[derive(Default)]
pub struct FakeTimers {
    pub pending: BTreeMap<TimerHandle, (PickupId, Duration)>,
    pub cancelled: Vec<TimerHandle>,
    next: u64,
}

impl TimerService for FakeTimers {
    fn schedule_once(&mut self, owner: PickupId, delay: Duration) -> TimerHandle {
        self.next += 1;
        let handle = TimerHandle(self.next);
        self.pending.insert(handle, (owner, delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let removed = self.pending.remove(&handle).is_some();
        if removed {
            self.cancelled.push(handle);
        }
        removed
    }
}

#[derive(Default)]
pub struct FakeInteractions {
    pub subscribed: HashSet<PickupId>,
    pub subscribe_calls: usize,
}

impl InteractionSource for FakeInteractions {
    fn subscribe(&mut self, owner: PickupId) {
        self.subscribe_calls += 1;
        self.subscribed.insert(owner);
    }

    fn unsubscribe(&mut self, owner: PickupId) {
        self.subscribed.remove(&owner);
    }
}

#[derive(Default)]
pub struct FakeDiagnostics {
    pub messages: Vec<String>,
}

impl Diagnostics for FakeDiagnostics {
    fn debug_message(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub assets: FakeAssets,
    pub scene: FakeScene,
    pub timers: FakeTimers,
    pub interactions: FakeInteractions,
    pub diagnostics: FakeDiagnostics,
}

impl FakeHost {
    pub fn services(&mut self) -> Services<'_> {
        Services::new(
            &mut self.assets,
            &mut self.scene,
            &mut self.timers,
            &mut self.interactions,
            &mut self.diagnostics,
        )
    }
}
