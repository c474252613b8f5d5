#![cfg(feature = "editor")]

use pickup_core::editor::{PickupProperty, PreviewSync};
use pickup_core::{AssetRef, ItemDefinition, ItemKind, ItemTable, ItemText, PickupPhase, PickupSpec};
use pickup_runtime::{AssetStore, World};

fn world() -> World {
    let catalog = ItemTable::from_definitions([
        ItemDefinition::new(
            "lantern",
            ItemKind::Tool,
            ItemText::new("Lantern", ""),
            AssetRef::new("/Game/Meshes/Lantern"),
        ),
        ItemDefinition::new(
            "rope",
            ItemKind::Tool,
            ItemText::new("Rope", ""),
            AssetRef::new("/Game/Meshes/Rope"),
        ),
    ])
    .unwrap()
    .into_shared();

    let mut assets = AssetStore::new();
    assets.register(AssetRef::new("/Game/Meshes/Lantern"));
    assets.register(AssetRef::new("/Game/Meshes/Rope"));
    assets.preload(&AssetRef::new("/Game/Meshes/Rope")).unwrap();

    World::builder().catalog("items", catalog).assets(assets).build()
}

#[test]
fn editing_item_id_swaps_preview_without_touching_runtime_state() {
    let mut world = world();
    let id = world
        .spawn(PickupSpec::new("lantern").with_catalog("items"))
        .unwrap();
    let loads_before = world.assets().blocking_loads();

    let mut edited = PickupSpec::new("rope").with_catalog("items");
    edited.interaction_radius = 90.0;
    let sync = world.preview_property_change(id, &edited, Some(PickupProperty::ItemId));

    let PreviewSync::Applied { mesh: Some(mesh) } = sync else {
        panic!("expected a resident preview mesh, got {sync:?}");
    };
    assert_eq!(mesh.source, AssetRef::new("/Game/Meshes/Rope"));
    assert_eq!(world.visual(id).unwrap().sphere_radius, 90.0);
    assert_eq!(world.assets().blocking_loads(), loads_before);

    let pickup = world.pickup(id).unwrap();
    assert_eq!(pickup.phase(), PickupPhase::Active);
    assert_eq!(pickup.spec().item_id.to_string(), "lantern");
}

#[test]
fn other_properties_and_unknown_rows_leave_preview_alone() {
    let mut world = world();
    let id = world
        .spawn(PickupSpec::new("lantern").with_catalog("items"))
        .unwrap();
    let before = world.visual(id).cloned();

    let spec = PickupSpec::new("rope").with_catalog("items");
    assert_eq!(
        world.preview_property_change(id, &spec, Some(PickupProperty::RespawnTime)),
        PreviewSync::Skipped
    );
    assert_eq!(
        world.preview_property_change(id, &PickupSpec::new("rope"), Some(PickupProperty::ItemId)),
        PreviewSync::Skipped
    );
    let missing = PickupSpec::new("anvil").with_catalog("items");
    assert_eq!(
        world.preview_property_change(id, &missing, Some(PickupProperty::ItemId)),
        PreviewSync::RowNotFound
    );
    assert_eq!(world.visual(id).cloned(), before);
}
