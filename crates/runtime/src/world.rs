//! Frame-driven host world for pickups.
//!
//! The world owns every host service, lends them to pickups per lifecycle
//! call, advances a simulated clock, and fires respawn timers. Everything runs
//! on the caller's thread.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use pickup_core::{
    Diagnostics, GameError, IgnoreReason, InitializeError, InteractionOutcome,
    Interactor, ItemCatalog, Pickup, PickupId, PickupSpec, RespawnOutcome, Services,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{EventBus, PickupEvent};
use crate::report::{PickupReport, WorldReport};
use crate::services::{
    AssetStore, InteractionRouter, SceneState, ScreenMessage, TimerManager, TracingDiagnostics,
    VisualState,
};

/// Host world running pickups against in-memory services.
pub struct World {
    config: RuntimeConfig,
    clock: Duration,
    next_pickup: u32,
    catalogs: BTreeMap<String, Arc<dyn ItemCatalog>>,
    pickups: BTreeMap<PickupId, Pickup>,
    assets: AssetStore,
    scene: SceneState,
    timers: TimerManager,
    interactions: InteractionRouter,
    diagnostics: TracingDiagnostics,
    events: EventBus,
}

impl World {
    /// Create a new world builder
    pub fn builder() -> WorldBuilder {
        WorldBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Time elapsed since the world started.
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Registers a catalog under `name`, replacing any previous one.
    ///
    /// Pickups already spawned keep the catalog they resolved at spawn time.
    pub fn register_catalog(&mut self, name: impl Into<String>, catalog: Arc<dyn ItemCatalog>) {
        self.catalogs.insert(name.into(), catalog);
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetStore {
        &mut self.assets
    }

    pub fn timers(&self) -> &TimerManager {
        &self.timers
    }

    pub fn interactions(&self) -> &InteractionRouter {
        &self.interactions
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<PickupEvent> {
        self.events.subscribe()
    }

    pub fn pickup(&self, id: PickupId) -> Option<&Pickup> {
        self.pickups.get(&id)
    }

    pub fn visual(&self, id: PickupId) -> Option<&VisualState> {
        self.scene.get(id)
    }

    /// Developer messages currently on screen.
    pub fn screen_messages(&self) -> &[ScreenMessage] {
        self.diagnostics.messages()
    }

    /// Adds a pickup and runs its spawn-time initialization.
    ///
    /// Initialization failures do not fail the spawn: the pickup stays in the
    /// world without representation and an `InitializeFailed` event is published.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownCatalog`] if `spec.catalog` names a catalog
    /// that was never registered.
    pub fn spawn(&mut self, spec: PickupSpec) -> Result<PickupId> {
        let catalog = match &spec.catalog {
            Some(name) => Some(
                self.catalogs
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownCatalog(name.clone()))?,
            ),
            None => None,
        };

        self.next_pickup += 1;
        let id = PickupId(self.next_pickup);
        let item = spec.item_id.clone();
        self.scene.insert(id);
        self.pickups.insert(id, Pickup::new(id, spec, catalog));
        tracing::debug!("Spawned {} for item {}", id, item);
        self.events.publish(PickupEvent::Spawned { pickup: id, item });

        self.begin_play(id);
        Ok(id)
    }

    /// Delivers an overlap between `id`'s trigger volume and `other`.
    ///
    /// Pickups that are not subscribed to overlaps never see the event.
    pub fn overlap(&mut self, id: PickupId, other: Interactor) -> Result<InteractionOutcome> {
        if !self.pickups.contains_key(&id) {
            return Err(RuntimeError::UnknownPickup(id));
        }
        if !self.interactions.is_subscribed(id) {
            tracing::trace!("Overlap with {} dropped: not subscribed", id);
            return Ok(InteractionOutcome::Ignored(IgnoreReason::NotInteractable));
        }

        let Self {
            pickups,
            assets,
            scene,
            timers,
            interactions,
            diagnostics,
            events,
            ..
        } = self;
        let pickup = pickups
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownPickup(id))?;
        let mut services = Services::new(assets, scene, timers, interactions, diagnostics);
        let outcome = pickup.on_interaction(&other, &mut services);

        match outcome {
            InteractionOutcome::Collected { respawn } => {
                let respawn_in_secs = respawn.map(|_| pickup.spec().respawn_delay().as_secs_f32());
                tracing::info!(
                    "{} collected by {:?} (respawn: {:?})",
                    id,
                    other.entity,
                    respawn_in_secs
                );
                events.publish(PickupEvent::Collected {
                    pickup: id,
                    item: pickup.reference_item().map(|item| item.id.clone()),
                    by: other.entity,
                    respawn_in_secs,
                });
            }
            InteractionOutcome::Ignored(reason) => {
                tracing::trace!("Overlap with {} ignored: {}", id, reason);
            }
        }
        Ok(outcome)
    }

    /// Advances the clock by `dt`, firing due respawn timers in deadline order.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
        self.diagnostics.advance_to(self.clock);

        for fired in self.timers.advance_to(self.clock) {
            let Self {
                pickups,
                assets,
                scene,
                timers,
                interactions,
                diagnostics,
                events,
                ..
            } = self;
            let Some(pickup) = pickups.get_mut(&fired.owner) else {
                tracing::warn!("{} fired for missing {}", fired.handle, fired.owner);
                continue;
            };
            let mut services = Services::new(assets, scene, timers, interactions, diagnostics);
            match pickup.on_respawn_timer(fired.handle, &mut services) {
                RespawnOutcome::Respawned { generation } => {
                    tracing::debug!("{} respawned (generation {})", fired.owner, generation);
                    events.publish(PickupEvent::Initialized {
                        pickup: fired.owner,
                        item: pickup.spec().item_id.clone(),
                        generation,
                    });
                }
                RespawnOutcome::Stale => {
                    tracing::trace!("{} for {} is stale", fired.handle, fired.owner);
                }
                RespawnOutcome::Failed(err) => {
                    report_initialize_error(fired.owner, &err, diagnostics, events);
                }
            }
        }
    }

    /// Removes a pickup, cancelling its pending respawn.
    pub fn despawn(&mut self, id: PickupId) -> Result<()> {
        let mut pickup = self
            .pickups
            .remove(&id)
            .ok_or(RuntimeError::UnknownPickup(id))?;
        let cancelled_respawn = {
            let mut services = Services::new(
                &mut self.assets,
                &mut self.scene,
                &mut self.timers,
                &mut self.interactions,
                &mut self.diagnostics,
            );
            pickup.teardown(&mut services)
        };
        self.scene.remove(id);
        tracing::debug!("Despawned {} (cancelled respawn: {})", id, cancelled_respawn);
        self.events.publish(PickupEvent::Despawned {
            pickup: id,
            cancelled_respawn,
        });
        Ok(())
    }

    /// Snapshot of every pickup for reporting.
    pub fn report(&self) -> WorldReport {
        WorldReport {
            now_secs: self.clock.as_secs_f64(),
            pickups: self
                .pickups
                .values()
                .map(|pickup| PickupReport::new(pickup, self.scene.get(pickup.id())))
                .collect(),
        }
    }

    /// Re-syncs the preview of `owner` after `changed` was edited on `spec`.
    ///
    /// Uses the world's catalogs, resident assets and scene only; the runtime
    /// pickup itself is left alone.
    #[cfg(feature = "editor")]
    pub fn preview_property_change(
        &mut self,
        owner: PickupId,
        spec: &PickupSpec,
        changed: Option<pickup_core::editor::PickupProperty>,
    ) -> pickup_core::editor::PreviewSync {
        let catalog = spec
            .catalog
            .as_ref()
            .and_then(|name| self.catalogs.get(name))
            .map(|catalog| &**catalog as &dyn ItemCatalog);
        pickup_core::editor::on_property_changed(
            owner,
            spec,
            changed,
            catalog,
            &self.assets,
            &mut self.scene,
        )
    }

    fn begin_play(&mut self, id: PickupId) {
        let Self {
            pickups,
            assets,
            scene,
            timers,
            interactions,
            diagnostics,
            events,
            ..
        } = self;
        let Some(pickup) = pickups.get_mut(&id) else {
            return;
        };
        let mut services = Services::new(assets, scene, timers, interactions, diagnostics);
        match pickup.initialize(&mut services) {
            Ok(()) => events.publish(PickupEvent::Initialized {
                pickup: id,
                item: pickup.spec().item_id.clone(),
                generation: pickup.generation(),
            }),
            Err(err) => report_initialize_error(id, &err, diagnostics, events),
        }
    }
}

impl Drop for World {
    fn drop(&mut self) {
        for pickup in self.pickups.values_mut() {
            let mut services = Services::new(
                &mut self.assets,
                &mut self.scene,
                &mut self.timers,
                &mut self.interactions,
                &mut self.diagnostics,
            );
            pickup.teardown(&mut services);
        }
    }
}

fn report_initialize_error(
    id: PickupId,
    err: &InitializeError,
    diagnostics: &mut TracingDiagnostics,
    events: &EventBus,
) {
    let severity = err.severity();
    if severity.is_recoverable() {
        tracing::warn!(
            "{} has no representation: {} ({}, {})",
            id,
            err,
            err.error_code(),
            severity.as_str()
        );
    } else {
        tracing::debug!(
            "{} has no representation: {} ({}, {})",
            id,
            err,
            err.error_code(),
            severity.as_str()
        );
    }
    diagnostics.debug_message(&format!("{}: {}", id, err));
    events.publish(PickupEvent::InitializeFailed {
        pickup: id,
        error_code: err.error_code(),
        message: err.to_string(),
    });
}

/// Builder for [`World`].
pub struct WorldBuilder {
    config: RuntimeConfig,
    catalogs: BTreeMap<String, Arc<dyn ItemCatalog>>,
    assets: Option<AssetStore>,
}

impl WorldBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalogs: BTreeMap::new(),
            assets: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a named catalog
    pub fn catalog(mut self, name: impl Into<String>, catalog: Arc<dyn ItemCatalog>) -> Self {
        self.catalogs.insert(name.into(), catalog);
        self
    }

    /// Register several named catalogs
    pub fn catalogs(
        mut self,
        catalogs: impl IntoIterator<Item = (String, Arc<dyn ItemCatalog>)>,
    ) -> Self {
        self.catalogs.extend(catalogs);
        self
    }

    /// Provide the asset store (defaults to an empty one)
    pub fn assets(mut self, assets: AssetStore) -> Self {
        self.assets = Some(assets);
        self
    }

    pub fn build(self) -> World {
        let message_lifetime =
            Duration::try_from_secs_f32(self.config.pickup.debug_message_secs).unwrap_or_default();
        World {
            events: EventBus::with_capacity(self.config.event_buffer_size),
            diagnostics: TracingDiagnostics::new(message_lifetime),
            config: self.config,
            clock: Duration::ZERO,
            next_pickup: 0,
            catalogs: self.catalogs,
            pickups: BTreeMap::new(),
            assets: self.assets.unwrap_or_default(),
            scene: SceneState::new(),
            timers: TimerManager::new(),
            interactions: InteractionRouter::new(),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::builder().build()
    }
}
