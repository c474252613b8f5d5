//! Interacting entities and the capabilities pickups filter on.
use bitflags::bitflags;

/// Identity of an entity reported by the overlap source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

bitflags! {
    /// What an overlapping entity is able to do.
    ///
    /// Pickups only react to [`Capabilities::PLAYER_CHARACTER`]; the other bits
    /// let hosts describe projectiles, NPCs and physics props that may also
    /// enter the trigger volume.
    ///
    /// Serialized as flag names, e.g. `"PLAYER_CHARACTER | PHYSICS_BODY"`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        const PLAYER_CHARACTER = 1 << 0;
        const NPC              = 1 << 1;
        const PROJECTILE       = 1 << 2;
        const PHYSICS_BODY     = 1 << 3;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Capabilities {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Capabilities {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// The "other actor" of an overlap event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interactor {
    pub entity: EntityId,
    pub capabilities: Capabilities,
}

impl Interactor {
    pub const fn new(entity: EntityId, capabilities: Capabilities) -> Self {
        Self {
            entity,
            capabilities,
        }
    }

    pub const fn player(entity: EntityId) -> Self {
        Self::new(entity, Capabilities::PLAYER_CHARACTER)
    }

    /// Returns true if this interactor may collect pickups.
    #[inline]
    pub const fn is_player_character(&self) -> bool {
        self.capabilities.contains(Capabilities::PLAYER_CHARACTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_player_capability_qualifies() {
        assert!(Interactor::player(EntityId(1)).is_player_character());
        assert!(
            Interactor::new(
                EntityId(2),
                Capabilities::PLAYER_CHARACTER | Capabilities::PHYSICS_BODY
            )
            .is_player_character()
        );
        assert!(!Interactor::new(EntityId(3), Capabilities::NPC).is_player_character());
        assert!(!Interactor::new(EntityId(4), Capabilities::empty()).is_player_character());
    }
}
