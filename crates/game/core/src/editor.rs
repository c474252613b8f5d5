//! Design-time preview re-sync.
//!
//! When a designer edits a placed pickup, its preview mesh and interaction
//! radius follow the authored item id. This path only reads the authored
//! [`PickupSpec`]; it never loads assets, schedules timers, or touches the
//! runtime [`Pickup`](crate::pickup::Pickup) state machine.
use crate::asset::MeshHandle;
use crate::catalog::ItemCatalog;
use crate::pickup::{PickupId, PickupSpec};
use crate::services::{AssetResolver, SceneService};

/// Authored property of a pickup that an editor reports as changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PickupProperty {
    ItemId,
    Catalog,
    ShouldRespawn,
    RespawnTime,
    InteractionRadius,
}

/// What a property change did to the preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewSync {
    /// The change does not affect the preview, or no catalog is set.
    Skipped,
    /// The new id has no catalog row; the preview was left as is.
    RowNotFound,
    /// Preview updated. `mesh` is `None` when the item's mesh is not resident yet.
    Applied { mesh: Option<MeshHandle> },
}

/// Re-applies the preview mesh and radius after `changed` was edited.
///
/// Only resident meshes are shown; the preview never blocks the editor on a load.
pub fn on_property_changed(
    owner: PickupId,
    spec: &PickupSpec,
    changed: Option<PickupProperty>,
    catalog: Option<&dyn ItemCatalog>,
    assets: &dyn AssetResolver,
    scene: &mut dyn SceneService,
) -> PreviewSync {
    let Some(catalog) = catalog else {
        return PreviewSync::Skipped;
    };
    if changed != Some(PickupProperty::ItemId) {
        return PreviewSync::Skipped;
    }
    let Some(row) = catalog.row(&spec.item_id) else {
        return PreviewSync::RowNotFound;
    };

    let mesh = assets.find_resident(&row.base.world_mesh);
    scene.set_mesh(owner, mesh.clone());
    scene.set_sphere_radius(owner, spec.interaction_radius);
    PreviewSync::Applied { mesh }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetRef;
    use crate::catalog::ItemTable;
    use crate::item::{ItemDefinition, ItemKind, ItemText};
    use crate::services::fake::FakeHost;

    fn table() -> ItemTable {
        ItemTable::from_definitions([ItemDefinition::new(
            "torch",
            ItemKind::Tool,
            ItemText::new("Torch", "Lights the way."),
            AssetRef::new("/Game/Meshes/Torch"),
        )])
        .unwrap()
    }

    #[test]
    fn item_id_change_applies_resident_mesh_and_radius() {
        let mut host = FakeHost::default();
        host.assets.add_resident("/Game/Meshes/Torch");
        let table = table();
        let mut spec = PickupSpec::new("torch");
        spec.interaction_radius = 150.0;

        let sync = on_property_changed(
            PickupId(3),
            &spec,
            Some(PickupProperty::ItemId),
            Some(&table),
            &host.assets,
            &mut host.scene,
        );

        assert!(matches!(sync, PreviewSync::Applied { mesh: Some(_) }));
        let visual = host.scene.visual(PickupId(3));
        assert_eq!(visual.radius, 150.0);
        assert!(!visual.visible);
    }

    #[test]
    fn non_resident_mesh_is_not_loaded() {
        let mut host = FakeHost::default();
        host.assets.add_on_disk("/Game/Meshes/Torch");
        let table = table();

        let sync = on_property_changed(
            PickupId(3),
            &PickupSpec::new("torch"),
            Some(PickupProperty::ItemId),
            Some(&table),
            &host.assets,
            &mut host.scene,
        );

        assert_eq!(sync, PreviewSync::Applied { mesh: None });
        assert_eq!(host.assets.blocking_loads, 0);
    }

    #[test]
    fn other_properties_and_missing_rows_are_skipped() {
        let mut host = FakeHost::default();
        let table = table();

        let other = on_property_changed(
            PickupId(3),
            &PickupSpec::new("torch"),
            Some(PickupProperty::RespawnTime),
            Some(&table),
            &host.assets,
            &mut host.scene,
        );
        let missing = on_property_changed(
            PickupId(3),
            &PickupSpec::new("lantern"),
            Some(PickupProperty::ItemId),
            Some(&table),
            &host.assets,
            &mut host.scene,
        );
        let no_catalog = on_property_changed(
            PickupId(3),
            &PickupSpec::new("torch"),
            Some(PickupProperty::ItemId),
            None,
            &host.assets,
            &mut host.scene,
        );

        assert_eq!(other, PreviewSync::Skipped);
        assert_eq!(missing, PreviewSync::RowNotFound);
        assert_eq!(no_catalog, PreviewSync::Skipped);
        assert_eq!(host.scene.calls, 0);
    }
}
