//! Scripted replay of a level against a [`World`].
use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use pickup_content::{ContentFactory, ScriptedOverlap};
use pickup_core::PickupId;
use pickup_runtime::{AssetStore, RuntimeConfig, World, WorldReport};

use crate::config::SimConfig;

pub struct Simulation {
    world: World,
    names: HashMap<String, PickupId>,
    script: Vec<ScriptedOverlap>,
    /// Last instant worth simulating: the final overlap plus the longest respawn.
    end: Duration,
}

impl Simulation {
    /// Loads content for `config.level` and spawns every placed pickup.
    pub fn load(config: &SimConfig) -> Result<Self> {
        let factory = ContentFactory::new(&config.data_dir);

        let pickup_config = factory.load_config()?;
        let manifest = factory.load_assets()?;
        let assets = AssetStore::from_manifest(&manifest)
            .context("Failed to make manifest meshes resident")?;
        let level = factory.load_level(&config.level, &pickup_config)?;
        let catalogs = factory.load_level_catalogs(&level)?;

        let mut world = World::builder()
            .config(RuntimeConfig::with_pickup(pickup_config))
            .catalogs(catalogs)
            .assets(assets)
            .build();

        let mut names = HashMap::new();
        let mut longest_respawn = Duration::ZERO;
        for placed in &level.pickups {
            let id = world
                .spawn(placed.spec.clone())
                .with_context(|| format!("Failed to spawn pickup '{}'", placed.name))?;
            if placed.spec.should_respawn {
                longest_respawn = longest_respawn.max(placed.spec.respawn_delay());
            }
            names.insert(placed.name.clone(), id);
        }

        let last_overlap = level
            .script
            .iter()
            .map(at)
            .max()
            .unwrap_or_default();

        Ok(Self {
            world,
            names,
            script: level.script,
            end: last_overlap + longest_respawn + config.frame,
        })
    }

    /// Steps the world frame by frame until the script and every respawn it
    /// triggers have played out.
    pub async fn run(self, config: &SimConfig) -> Result<WorldReport> {
        let Self {
            mut world,
            names,
            script,
            end,
        } = self;

        let mut events = world.subscribe_events();
        let mut ticker = config
            .realtime
            .then(|| tokio::time::interval(config.frame));
        let mut script = script.into_iter().peekable();

        loop {
            if let Some(ticker) = ticker.as_mut() {
                ticker.tick().await;
            }

            let now = world.now();
            while let Some(entry) = script.next_if(|entry| at(entry) <= now) {
                let id = *names
                    .get(&entry.pickup)
                    .with_context(|| format!("Script targets unknown pickup '{}'", entry.pickup))?;
                let outcome = world.overlap(id, entry.interactor())?;
                tracing::info!(
                    "[{:.3}s] entity {} overlaps '{}': {:?}",
                    now.as_secs_f32(),
                    entry.entity,
                    entry.pickup,
                    outcome
                );
            }

            while let Ok(event) = events.try_recv() {
                tracing::debug!("{:?}", event);
            }

            if now >= end {
                break;
            }
            world.advance(config.frame);
        }

        Ok(world.report())
    }
}

fn at(entry: &ScriptedOverlap) -> Duration {
    Duration::try_from_secs_f32(entry.at).unwrap_or_default()
}
