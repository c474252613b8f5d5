//! Reference host for the pickup subsystem.
//!
//! This crate implements the `pickup-core` service traits in memory and wires
//! them into a frame-driven [`World`]. Hosts embed a world to spawn pickups,
//! deliver overlaps, advance time, and subscribe to lifecycle events.
//!
//! Modules are organized by responsibility:
//! - [`world`] hosts the world and its builder
//! - [`services`] implements assets, scene, timers, overlaps and diagnostics
//! - [`events`] broadcasts pickup lifecycle events
//! - [`report`] provides serializable snapshots
pub mod config;
pub mod error;
pub mod events;
pub mod report;
pub mod services;
pub mod world;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{EventBus, PickupEvent};
pub use report::{PickupReport, WorldReport};
pub use services::{
    AssetStore, FiredTimer, InteractionRouter, SceneState, ScreenMessage, TimerManager,
    TracingDiagnostics, VisualState,
};
pub use world::{World, WorldBuilder};
