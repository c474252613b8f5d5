use std::path::PathBuf;

use pickup_content::ContentFactory;
use pickup_core::{ItemId, PickupConfig};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn demo_level_loads_with_its_catalogs() {
    let factory = ContentFactory::new(data_dir());
    let config = factory.load_config().expect("config.toml");
    assert_eq!(config, PickupConfig::default());

    let manifest = factory.load_assets().expect("assets.ron");
    let level = factory.load_level("demo", &config).expect("levels/demo.ron");
    let catalogs = factory.load_level_catalogs(&level).expect("catalogs");
    let items = &catalogs["items"];

    assert_eq!(level.pickups.len(), 4);
    assert!(!level.script.is_empty());
    assert!(level.script.windows(2).all(|pair| pair[0].at <= pair[1].at));
    assert!(level.script.iter().any(|entry| entry.interactor().is_player_character()));
    assert!(level.script.iter().any(|entry| !entry.interactor().is_player_character()));

    for placed in &level.pickups {
        let known = items.contains(&placed.spec.item_id);
        assert_eq!(known, placed.name != "broken", "{}", placed.name);
        if let Some(row) = items.row(&placed.spec.item_id) {
            assert!(manifest.meshes.contains(&row.base.world_mesh));
        }
    }

    let apple = level
        .pickups
        .iter()
        .find(|placed| placed.spec.item_id == ItemId::new("apple"))
        .expect("apple_table");
    assert_eq!(apple.spec.respawn_time, config.default_respawn_time);
}
