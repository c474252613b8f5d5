//! Level loader: catalog sources, placed pickups and scripted overlaps.
//!
//! `respawn_time` and `interaction_radius` may be omitted from a spec; they
//! then come from the loaded [`PickupConfig`].
//!
//! ```ron
//! (
//!     catalogs: { "items": "items.ron" },
//!     pickups: [
//!         (name: "sword_pedestal", spec: (item_id: "sword_01", catalog: Some("items"),
//!                                         should_respawn: true, respawn_time: 4.0)),
//!         (name: "apple_table", spec: (item_id: "apple", catalog: Some("items"))),
//!     ],
//!     script: [
//!         (at: 1.0, pickup: "sword_pedestal", entity: 1, capabilities: "PLAYER_CHARACTER"),
//!     ],
//! )
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use pickup_core::{Capabilities, EntityId, Interactor, ItemId, PickupConfig, PickupSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A pickup placed in a level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPickup {
    /// Unique name within the level.
    pub name: String,
    pub spec: PickupSpec,
}

/// Placed pickup as authored; unset fields fall back to [`PickupConfig`].
#[derive(Debug, Clone, Deserialize)]
struct PlacedPickupRon {
    name: String,
    spec: PickupSpecRon,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PickupSpecRon {
    item_id: ItemId,
    catalog: Option<String>,
    should_respawn: bool,
    respawn_time: Option<f32>,
    interaction_radius: Option<f32>,
}

impl PickupSpecRon {
    fn into_spec(self, config: &PickupConfig) -> PickupSpec {
        let mut spec = PickupSpec::from_config(self.item_id, config);
        spec.catalog = self.catalog;
        spec.should_respawn = self.should_respawn;
        if let Some(respawn_time) = self.respawn_time {
            spec.respawn_time = respawn_time;
        }
        if let Some(radius) = self.interaction_radius {
            spec.interaction_radius = radius;
        }
        spec
    }
}

/// An overlap the simulation delivers at a given time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedOverlap {
    /// Seconds since level start.
    pub at: f32,
    /// Name of the placed pickup.
    pub pickup: String,
    pub entity: u32,
    pub capabilities: Capabilities,
}

impl ScriptedOverlap {
    pub fn interactor(&self) -> Interactor {
        Interactor::new(EntityId(self.entity), self.capabilities)
    }
}

/// Parsed level file. Catalog paths are relative to the data directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LevelData {
    pub catalogs: BTreeMap<String, PathBuf>,
    pub pickups: Vec<PlacedPickup>,
    pub script: Vec<ScriptedOverlap>,
}

#[derive(Debug, Clone, Deserialize)]
struct LevelRon {
    #[serde(default)]
    catalogs: BTreeMap<String, PathBuf>,
    #[serde(default)]
    pickups: Vec<PlacedPickupRon>,
    #[serde(default)]
    script: Vec<ScriptedOverlap>,
}

/// Loader for level files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level file.
    ///
    /// Pickup names must be unique and every scripted overlap must name a
    /// placed pickup. Spec fields left out of the file take their values from
    /// `config`. Script entries are returned sorted by time.
    pub fn load(path: &Path, config: &PickupConfig) -> LoadResult<LevelData> {
        let content = read_file(path)?;
        // Optional spec fields are written bare (`respawn_time: 4.0`), not as `Some(4.0)`.
        let raw: LevelRon = ron::Options::default()
            .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
            .from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON at {:?}: {}", path, e))?;
        let mut level = LevelData {
            catalogs: raw.catalogs,
            pickups: raw
                .pickups
                .into_iter()
                .map(|placed| PlacedPickup {
                    name: placed.name,
                    spec: placed.spec.into_spec(config),
                })
                .collect(),
            script: raw.script,
        };

        let mut names = HashSet::new();
        for placed in &level.pickups {
            if !names.insert(placed.name.as_str()) {
                anyhow::bail!("pickup '{}' placed more than once", placed.name);
            }
        }
        for entry in &level.script {
            if !names.contains(entry.pickup.as_str()) {
                anyhow::bail!("script references unknown pickup '{}'", entry.pickup);
            }
        }

        level.script.sort_by(|a, b| a.at.total_cmp(&b.at));
        Ok(level)
    }
}
