#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Point;

fn names(scene: &Scene) -> Vec<&str> {
    scene.layers().iter().map(Layer::name).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn default_scene_is_empty_and_untitled() {
    let scene = Scene::default();
    assert_eq!(scene.name, "Untitled Scene");
    assert!(scene.is_empty());
}

#[test]
fn display_summarizes_counts() {
    let mut scene = Scene::new("Level 1");
    scene.add_layer(Layer::new("A")).unwrap();
    scene.add_entity(Entity::new("P", Point::default())).unwrap();
    assert_eq!(scene.to_string(), "Scene(name='Level 1', layers=1, entities=1, tilemaps=0)");
}

// =============================================================
// Layers
// =============================================================

#[test]
fn add_layer_preserves_order() {
    let mut scene = Scene::default();
    scene.add_layer(Layer::new("Background")).unwrap();
    scene.add_layer(Layer::new("Middle")).unwrap();
    scene.add_layer(Layer::new("Foreground")).unwrap();
    assert_eq!(names(&scene), vec!["Background", "Middle", "Foreground"]);
}

#[test]
fn add_same_layer_twice_is_rejected() {
    let mut scene = Scene::default();
    let layer = Layer::new("A");
    scene.add_layer(layer.clone()).unwrap();
    let err = scene.add_layer(layer).unwrap_err();
    assert!(matches!(err, SceneError::DuplicateLayer(_)));
    assert_eq!(scene.layers().len(), 1);
}

#[test]
fn structurally_equal_layers_are_both_added() {
    let mut scene = Scene::default();
    scene.add_layer(Layer::new("Twin")).unwrap();
    scene.add_layer(Layer::new("Twin")).unwrap();
    assert_eq!(scene.layers().len(), 2);
}

#[test]
fn remove_layer_by_identity_not_equality() {
    let mut scene = Scene::default();
    let first = scene.add_layer(Layer::new("Twin")).unwrap();
    let second = scene.add_layer(Layer::new("Twin")).unwrap();

    let removed = scene.remove_layer(second).unwrap();
    assert_eq!(removed.id(), second);
    assert_eq!(scene.layers().len(), 1);
    assert_eq!(scene.layers()[0].id(), first);
}

#[test]
fn remove_unowned_layer_is_not_found() {
    let mut scene = Scene::default();
    scene.add_layer(Layer::new("Owned")).unwrap();
    let stranger = Layer::new("Owned");
    let err = scene.remove_layer(stranger.id()).unwrap_err();
    assert!(matches!(err, SceneError::LayerNotFound(_)));
    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(scene.layers().len(), 1);
}

#[test]
fn layer_mutation_visible_through_later_lookup() {
    let mut scene = Scene::default();
    let id = scene.add_layer(Layer::new("L")).unwrap();

    scene.layer_mut(id).unwrap().toggle_visibility();
    scene.layer_mut(id).unwrap().toggle_lock();
    scene.layer_mut(id).unwrap().set_opacity(0.3).unwrap();

    let layer = scene.layer(id).unwrap();
    assert!(!layer.is_visible());
    assert!(layer.is_locked());
    assert_eq!(layer.opacity(), 0.3);
}

#[test]
fn insert_layer_clamps_index() {
    let mut scene = Scene::default();
    scene.add_layer(Layer::new("A")).unwrap();
    scene.insert_layer(0, Layer::new("Under")).unwrap();
    scene.insert_layer(99, Layer::new("Top")).unwrap();
    assert_eq!(names(&scene), vec!["Under", "A", "Top"]);
}

#[test]
fn move_layer_reorders_and_reports_origin() {
    let mut scene = Scene::default();
    let a = scene.add_layer(Layer::new("A")).unwrap();
    scene.add_layer(Layer::new("B")).unwrap();
    scene.add_layer(Layer::new("C")).unwrap();

    assert_eq!(scene.move_layer(a, 2).unwrap(), 0);
    assert_eq!(names(&scene), vec!["B", "C", "A"]);
    assert_eq!(scene.layer_index(a), Some(2));
}

#[test]
fn layer_by_name_returns_first_match() {
    let mut scene = Scene::default();
    let first = scene.add_layer(Layer::new("Dup")).unwrap();
    scene.add_layer(Layer::new("Dup")).unwrap();
    assert_eq!(scene.layer_by_name("Dup").unwrap().id(), first);
    assert!(scene.layer_by_name("Missing").is_none());
}

// =============================================================
// Entities
// =============================================================

#[test]
fn add_and_lookup_entity() {
    let mut scene = Scene::default();
    let id = scene.add_entity(Entity::new("Player", Point::new(10.0, 20.0))).unwrap();
    assert_eq!(scene.entity(id).unwrap().position, Point::new(10.0, 20.0));
    assert_eq!(scene.entity_by_name("Player").unwrap().id(), id);
}

#[test]
fn entity_ids_are_unique_within_scene() {
    let mut scene = Scene::default();
    let e = Entity::new("E", Point::default());
    scene.add_entity(e.clone()).unwrap();
    assert!(matches!(scene.add_entity(e), Err(SceneError::DuplicateEntity(_))));
}

#[test]
fn remove_entity_and_missing_entity() {
    let mut scene = Scene::default();
    let id = scene.add_entity(Entity::new("E", Point::default())).unwrap();
    assert_eq!(scene.remove_entity(id).unwrap().name, "E");
    assert!(matches!(scene.remove_entity(id), Err(SceneError::EntityNotFound(_))));
}

#[test]
fn entity_mut_updates_in_place() {
    let mut scene = Scene::default();
    let id = scene.add_entity(Entity::new("E", Point::default())).unwrap();
    scene.entity_mut(id).unwrap().update_position(Point::new(3.0, 4.0));
    scene.entity_mut(id).unwrap().add_property("team", serde_json::json!("red"));
    let e = scene.entity(id).unwrap();
    assert_eq!(e.position, Point::new(3.0, 4.0));
    assert_eq!(e.get_property("team"), Some(&serde_json::json!("red")));
}

#[test]
fn insert_entity_restores_position() {
    let mut scene = Scene::default();
    let a = scene.add_entity(Entity::new("A", Point::default())).unwrap();
    scene.add_entity(Entity::new("B", Point::default())).unwrap();
    let removed = scene.remove_entity(a).unwrap();
    scene.insert_entity(0, removed).unwrap();
    assert_eq!(scene.entity_index(a), Some(0));
}

// =============================================================
// Tilemaps
// =============================================================

#[test]
fn add_remove_tilemap() {
    let mut scene = Scene::default();
    let id = scene.add_tilemap(Tilemap::new("Ground", 4, 4)).unwrap();
    scene.tilemap_mut(id).unwrap().add_tile(1, 1, 3, "default").unwrap();
    assert_eq!(scene.tilemap(id).unwrap().tile_count(), 1);
    assert_eq!(scene.tilemap_by_name("Ground").unwrap().id(), id);
    assert_eq!(scene.remove_tilemap(id).unwrap().name, "Ground");
    assert!(matches!(scene.remove_tilemap(id), Err(SceneError::TilemapNotFound(_))));
}

#[test]
fn duplicate_tilemap_rejected() {
    let mut scene = Scene::default();
    let map = Tilemap::new("M", 1, 1);
    scene.add_tilemap(map.clone()).unwrap();
    assert!(matches!(scene.add_tilemap(map), Err(SceneError::DuplicateTilemap(_))));
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_empties_all_collections() {
    let mut scene = Scene::new("Keep name");
    scene.add_layer(Layer::new("L")).unwrap();
    scene.add_entity(Entity::new("E", Point::default())).unwrap();
    scene.add_tilemap(Tilemap::new("T", 2, 2)).unwrap();

    scene.clear();

    assert!(scene.is_empty());
    assert!(scene.layers().is_empty());
    assert!(scene.entities().is_empty());
    assert!(scene.tilemaps().is_empty());
    assert_eq!(scene.name, "Keep name");
}

// =============================================================
// Error codes
// =============================================================

#[test]
fn error_codes_follow_taxonomy() {
    assert_eq!(SceneError::InvalidOpacity(2.0).error_code(), "E_VALIDATION");
    assert_eq!(SceneError::LayerNotFound(LayerId::new()).error_code(), "E_NOT_FOUND");
    let oob = SceneError::TileOutOfBounds { x: 1, y: 1, width: 0, height: 0 };
    assert_eq!(oob.error_code(), "E_OUT_OF_BOUNDS");
    assert!(!oob.retryable());
}
