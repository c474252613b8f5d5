use std::time::Duration;

use pickup_content::ContentFactory;
use pickup_core::PickupPhase;
use pickup_runtime::{AssetStore, RuntimeConfig, World};

fn write_data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    std::fs::create_dir_all(root.join("levels")).unwrap();
    std::fs::write(
        root.join("config.toml"),
        "default_respawn_time = 2.0\ndefault_interaction_radius = 50.0\n",
    )
    .unwrap();
    std::fs::write(
        root.join("assets.ron"),
        r#"(meshes: ["/Game/Meshes/Potion"], resident: ["/Game/Meshes/Potion"])"#,
    )
    .unwrap();
    std::fs::write(
        root.join("items.ron"),
        r#"(
            definitions: [(id: "potion_base", kind: Consumable, text: (name: "Potion"),
                           world_mesh: "/Game/Meshes/Potion")],
            rows: [(id: "potion", kind: Consumable, text: (name: "Potion"), base: "potion_base")],
        )"#,
    )
    .unwrap();
    std::fs::write(
        root.join("levels/test.ron"),
        r#"(
            catalogs: { "items": "items.ron" },
            pickups: [(name: "shelf", spec: (item_id: "potion", catalog: Some("items"),
                                             should_respawn: true))],
            script: [(at: 0.5, pickup: "shelf", entity: 1, capabilities: "PLAYER_CHARACTER")],
        )"#,
    )
    .unwrap();
    dir
}

#[test]
fn level_loaded_from_disk_runs_its_script() {
    let dir = write_data_dir();
    let factory = ContentFactory::new(dir.path());

    let config = factory.load_config().expect("config");
    let assets = AssetStore::from_manifest(&factory.load_assets().expect("assets")).unwrap();
    let level = factory.load_level("test", &config).expect("level");
    let catalogs = factory.load_level_catalogs(&level).expect("catalogs");

    let mut world = World::builder()
        .config(RuntimeConfig::with_pickup(config))
        .catalogs(catalogs)
        .assets(assets)
        .build();

    let spec = &level.pickups[0].spec;
    assert_eq!(spec.respawn_time, 2.0);
    assert_eq!(spec.interaction_radius, 50.0);

    let id = world.spawn(spec.clone()).unwrap();
    assert_eq!(world.visual(id).unwrap().sphere_radius, 50.0);
    assert_eq!(world.assets().blocking_loads(), 0);

    let entry = &level.script[0];
    world.advance(Duration::from_secs_f32(entry.at));
    world.overlap(id, entry.interactor()).unwrap();
    assert_eq!(world.pickup(id).unwrap().phase(), PickupPhase::Collected);

    world.advance(Duration::from_millis(1_900));
    assert_eq!(world.pickup(id).unwrap().phase(), PickupPhase::Collected);
    world.advance(Duration::from_millis(100));
    assert_eq!(world.pickup(id).unwrap().phase(), PickupPhase::Active);
}
