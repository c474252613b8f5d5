/// Broad category of an item.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    /// Reusable equipment (swords, pickaxes, torches).
    #[default]
    Tool,
    /// Used up on use (potions, food).
    Consumable,
}

/// Player-facing name and description of an item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemText {
    pub name: String,
    pub description: String,
}

impl ItemText {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(ItemKind::from_str("TOOL").unwrap(), ItemKind::Tool);
        assert_eq!(
            ItemKind::from_str("consumable").unwrap(),
            ItemKind::Consumable
        );
        assert!(ItemKind::from_str("weapon").is_err());
    }

    #[test]
    fn kind_display_round_trips() {
        for kind in ItemKind::iter() {
            assert_eq!(ItemKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }
}
