//! Traits describing the host services a pickup drives.
//!
//! The host engine owns asset streaming, the scene, timers, overlap dispatch
//! and developer diagnostics. Pickups only see these traits; the
//! [`Services`] aggregate bundles them so a single lifecycle call can reach
//! everything it needs without hard coupling to concrete implementations.
mod assets;
mod diagnostics;
mod interactions;
mod scene;
mod timers;

#[cfg(test)]
pub(crate) mod fake;

pub use assets::AssetResolver;
pub use diagnostics::Diagnostics;
pub use interactions::InteractionSource;
pub use scene::{CollisionMode, SceneService, ScenePart};
pub use timers::{TimerHandle, TimerService};

/// Mutable borrows of every host service, valid for one lifecycle call.
pub struct Services<'a> {
    pub assets: &'a mut dyn AssetResolver,
    pub scene: &'a mut dyn SceneService,
    pub timers: &'a mut dyn TimerService,
    pub interactions: &'a mut dyn InteractionSource,
    pub diagnostics: &'a mut dyn Diagnostics,
}

impl<'a> Services<'a> {
    pub fn new(
        assets: &'a mut dyn AssetResolver,
        scene: &'a mut dyn SceneService,
        timers: &'a mut dyn TimerService,
        interactions: &'a mut dyn InteractionSource,
        diagnostics: &'a mut dyn Diagnostics,
    ) -> Self {
        Self {
            assets,
            scene,
            timers,
            interactions,
            diagnostics,
        }
    }
}
