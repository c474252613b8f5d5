use core::fmt;

/// Identity of a pickup inside its host world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupId(pub u32);

impl fmt::Display for PickupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pickup#{}", self.0)
    }
}

/// Lifecycle phase of a pickup.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PickupPhase {
    /// Spawned but never successfully initialized; no visual representation.
    #[default]
    Uninitialized,
    /// Visible, query-only collision, listening for overlaps.
    Active,
    /// Hidden with collision disabled. Terminal unless a respawn is pending.
    Collected,
}

impl PickupPhase {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
