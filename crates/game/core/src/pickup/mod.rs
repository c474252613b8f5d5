//! World-placed pickups and their collect/respawn lifecycle.
//!
//! ```text
//! Uninitialized ──initialize──▶ Active ──player overlap──▶ Collected
//!                                  ▲                            │
//!                                  └──── respawn timer ─────────┘  (only if should_respawn)
//! ```
mod entity;
mod error;
mod spec;
mod state;

pub use entity::{IgnoreReason, InteractionOutcome, Pickup, RespawnOutcome};
pub use error::InitializeError;
pub use spec::PickupSpec;
pub use state::{PickupId, PickupPhase};

/// Developer message emitted for every overlap delivered to a pickup.
pub const OVERLAP_DEBUG_MESSAGE: &str = "Attempting a pickup collision";
