use core::fmt;
use std::sync::Arc;

use crate::asset::MeshHandle;
use crate::catalog::ItemCatalog;
use crate::interaction::Interactor;
use crate::item::ItemDefinition;
use crate::services::{CollisionMode, ScenePart, Services, TimerHandle};

use super::{InitializeError, OVERLAP_DEBUG_MESSAGE, PickupId, PickupPhase, PickupSpec};

/// Result of delivering an overlap to a pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The pickup was collected. `respawn` is the pending timer, if any.
    Collected { respawn: Option<TimerHandle> },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    /// The pickup is not active or no longer listening for overlaps.
    NotInteractable,
    /// The overlapping entity is not a player character.
    NotPlayerCharacter,
}

/// Result of a respawn timer firing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RespawnOutcome {
    /// The pickup is active again with a newly built definition.
    Respawned { generation: u32 },
    /// The handle is not the pickup's pending timer; nothing happened.
    Stale,
    /// Reinitialization failed; the pickup stays collected and hidden.
    Failed(InitializeError),
}

/// A world-placed item offered for collection.
///
/// The pickup owns its resolved [`ItemDefinition`] and its pending respawn
/// timer. Everything it shows or listens to goes through [`Services`].
pub struct Pickup {
    id: PickupId,
    spec: PickupSpec,
    catalog: Option<Arc<dyn ItemCatalog>>,
    reference_item: Option<ItemDefinition>,
    mesh: Option<MeshHandle>,
    phase: PickupPhase,
    subscribed: bool,
    respawn_timer: Option<TimerHandle>,
    generation: u32,
}

impl Pickup {
    pub fn new(id: PickupId, spec: PickupSpec, catalog: Option<Arc<dyn ItemCatalog>>) -> Self {
        Self {
            id,
            spec,
            catalog,
            reference_item: None,
            mesh: None,
            phase: PickupPhase::Uninitialized,
            subscribed: false,
            respawn_timer: None,
            generation: 0,
        }
    }

    pub fn id(&self) -> PickupId {
        self.id
    }

    pub fn spec(&self) -> &PickupSpec {
        &self.spec
    }

    pub fn catalog(&self) -> Option<&Arc<dyn ItemCatalog>> {
        self.catalog.as_ref()
    }

    pub fn phase(&self) -> PickupPhase {
        self.phase
    }

    /// Definition built by the last successful initialization.
    pub fn reference_item(&self) -> Option<&ItemDefinition> {
        self.reference_item.as_ref()
    }

    pub fn mesh(&self) -> Option<&MeshHandle> {
        self.mesh.as_ref()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn pending_respawn(&self) -> Option<TimerHandle> {
        self.respawn_timer
    }

    /// Number of successful initializations. Each one built a new definition.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Resolves the item and makes the pickup visible and interactable.
    ///
    /// Validation, lookup and mesh resolution all happen before anything is
    /// committed, so on error neither the pickup nor the scene has changed.
    ///
    /// # Errors
    ///
    /// See [`InitializeError`]. Hosts log these; they are never surfaced to
    /// the player.
    pub fn initialize(&mut self, services: &mut Services<'_>) -> Result<(), InitializeError> {
        if self.spec.item_id.is_none() {
            return Err(InitializeError::EmptyItemId);
        }
        let catalog = self.catalog.as_ref().ok_or(InitializeError::CatalogUnset)?;
        let row = catalog
            .row(&self.spec.item_id)
            .ok_or_else(|| InitializeError::RowNotFound(self.spec.item_id.clone()))?;

        let definition = row.instantiate();
        let mesh = services.assets.resolve(&definition.world_mesh)?;

        if let Some(stale) = self.respawn_timer.take() {
            services.timers.cancel(stale);
        }

        services.scene.set_mesh(self.id, Some(mesh.clone()));
        services.scene.set_visibility(self.id, true);
        services
            .scene
            .set_sphere_radius(self.id, self.spec.interaction_radius);
        services
            .scene
            .set_collision(self.id, ScenePart::Mesh, CollisionMode::None);
        services
            .scene
            .set_collision(self.id, ScenePart::Sphere, CollisionMode::QueryOnly);

        if !self.subscribed {
            services.interactions.subscribe(self.id);
            self.subscribed = true;
        }

        self.reference_item = Some(definition);
        self.mesh = Some(mesh);
        self.phase = PickupPhase::Active;
        self.generation += 1;
        Ok(())
    }

    /// Handles an overlap with `other`.
    ///
    /// Only a player character collects, and only once per active period: the
    /// overlap subscription is dropped before anything else changes.
    pub fn on_interaction(
        &mut self,
        other: &Interactor,
        services: &mut Services<'_>,
    ) -> InteractionOutcome {
        services.diagnostics.debug_message(OVERLAP_DEBUG_MESSAGE);

        if !self.phase.is_active() || !self.subscribed {
            return InteractionOutcome::Ignored(IgnoreReason::NotInteractable);
        }
        if !other.is_player_character() {
            return InteractionOutcome::Ignored(IgnoreReason::NotPlayerCharacter);
        }

        services.interactions.unsubscribe(self.id);
        self.subscribed = false;

        services.scene.set_visibility(self.id, false);
        services
            .scene
            .set_collision(self.id, ScenePart::Mesh, CollisionMode::None);
        services
            .scene
            .set_collision(self.id, ScenePart::Sphere, CollisionMode::None);
        self.phase = PickupPhase::Collected;

        if self.spec.should_respawn {
            let handle = services
                .timers
                .schedule_once(self.id, self.spec.respawn_delay());
            self.respawn_timer = Some(handle);
        }

        InteractionOutcome::Collected {
            respawn: self.respawn_timer,
        }
    }

    /// Called by the host when a timer owned by this pickup fires.
    pub fn on_respawn_timer(
        &mut self,
        handle: TimerHandle,
        services: &mut Services<'_>,
    ) -> RespawnOutcome {
        if self.respawn_timer != Some(handle) {
            return RespawnOutcome::Stale;
        }
        // Fired timers are gone from the service; forget the handle before reinitializing.
        self.respawn_timer = None;

        match self.initialize(services) {
            Ok(()) => RespawnOutcome::Respawned {
                generation: self.generation,
            },
            Err(err) => {
                // Still collected and hidden: drop the previous cycle's item too.
                self.reference_item = None;
                self.mesh = None;
                services.scene.set_mesh(self.id, None);
                RespawnOutcome::Failed(err)
            }
        }
    }

    /// Cancels the pending respawn and stops listening for overlaps.
    ///
    /// Returns true if a pending respawn was cancelled.
    pub fn teardown(&mut self, services: &mut Services<'_>) -> bool {
        if self.subscribed {
            services.interactions.unsubscribe(self.id);
            self.subscribed = false;
        }
        match self.respawn_timer.take() {
            Some(handle) => services.timers.cancel(handle),
            None => false,
        }
    }
}

impl fmt::Debug for Pickup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pickup")
            .field("id", &self.id)
            .field("spec", &self.spec)
            .field("has_catalog", &self.catalog.is_some())
            .field("reference_item", &self.reference_item)
            .field("mesh", &self.mesh)
            .field("phase", &self.phase)
            .field("subscribed", &self.subscribed)
            .field("respawn_timer", &self.respawn_timer)
            .field("generation", &self.generation)
            .finish()
    }
}
