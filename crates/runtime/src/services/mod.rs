//! In-memory implementations of the pickup-core host services.
//!
//! Each type owns one concern of the host engine. [`World`](crate::World)
//! lends them to pickups as a [`pickup_core::Services`] bundle per call.
mod assets;
mod diagnostics;
mod interactions;
mod scene;
mod timers;

pub use assets::AssetStore;
pub use diagnostics::{ScreenMessage, TracingDiagnostics};
pub use interactions::InteractionRouter;
pub use scene::{SceneState, VisualState};
pub use timers::{FiredTimer, TimerManager};
