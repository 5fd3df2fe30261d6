use super::*;
use crate::error::{ErrorClass, ErrorCode};

fn map_10x10() -> Tilemap {
    Tilemap::new("Ground", 10, 10)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_uses_default_tile_size() {
    let map = map_10x10();
    assert_eq!(map.tile_width(), 32);
    assert_eq!(map.tile_height(), 32);
    assert_eq!((map.width(), map.height()), (10, 10));
    assert_eq!(map.tile_count(), 0);
}

#[test]
fn with_tile_size_rejects_zero() {
    let err = Tilemap::with_tile_size("M", 4, 4, 0, 16).unwrap_err();
    assert!(matches!(err, SceneError::InvalidTileSize { .. }));
}

#[test]
fn with_tile_size_sets_cell_dimensions() {
    let map = Tilemap::with_tile_size("M", 4, 4, 16, 8).unwrap();
    assert_eq!((map.tile_width(), map.tile_height()), (16, 8));
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn get_tile_outside_grid_is_out_of_bounds() {
    let map = map_10x10();
    let err = map.get_tile(10, 10).unwrap_err();
    assert!(matches!(err, SceneError::TileOutOfBounds { x: 10, y: 10, .. }));
    assert_eq!(err.class(), ErrorClass::OutOfBounds);
}

#[test]
fn get_tile_negative_is_out_of_bounds() {
    let map = map_10x10();
    assert!(map.get_tile(-1, 0).is_err());
    assert!(map.get_tile(0, -1).is_err());
}

#[test]
fn get_tile_empty_cell_is_none_not_error() {
    let map = map_10x10();
    assert_eq!(map.get_tile(5, 5).unwrap(), None);
}

#[test]
fn zero_sized_map_has_no_cells() {
    let map = Tilemap::new("Empty", 0, 0);
    assert!(map.get_tile(0, 0).is_err());
}

// =============================================================
// Placement
// =============================================================

#[test]
fn add_tile_then_get() {
    let mut map = map_10x10();
    map.add_tile(3, 4, 7, "grass").unwrap();
    let tile = map.get_tile(3, 4).unwrap().unwrap();
    assert_eq!(tile, &Tile::new(3, 4, 7, "grass"));
}

#[test]
fn add_tile_overwrites_last_write_wins() {
    let mut map = map_10x10();
    assert_eq!(map.add_tile(1, 1, 1, "default").unwrap(), None);
    let previous = map.add_tile(1, 1, 2, "default").unwrap();
    assert_eq!(previous, Some(Tile::with_default_tileset(1, 1, 1)));
    assert_eq!(map.get_tile(1, 1).unwrap().unwrap().tile_id, 2);
    assert_eq!(map.tile_count(), 1);
}

#[test]
fn add_tile_out_of_bounds_fails() {
    let mut map = map_10x10();
    assert!(map.add_tile(10, 0, 1, "default").is_err());
    assert_eq!(map.tile_count(), 0);
}

#[test]
fn put_tile_checks_bounds() {
    let mut map = map_10x10();
    assert!(map.put_tile(Tile::with_default_tileset(9, 9, 1)).is_ok());
    assert!(map.put_tile(Tile::with_default_tileset(9, 10, 1)).is_err());
}

#[test]
fn remove_tile_returns_removed() {
    let mut map = map_10x10();
    map.add_tile(2, 2, 5, "default").unwrap();
    assert_eq!(map.remove_tile(2, 2), Some(Tile::with_default_tileset(2, 2, 5)));
    assert_eq!(map.get_tile(2, 2).unwrap(), None);
}

#[test]
fn remove_tile_absent_is_noop() {
    let mut map = map_10x10();
    assert_eq!(map.remove_tile(2, 2), None);
    assert_eq!(map.remove_tile(-5, 200), None);
}

#[test]
fn tiles_iterate_row_major() {
    let mut map = map_10x10();
    map.add_tile(5, 1, 0, "default").unwrap();
    map.add_tile(0, 2, 0, "default").unwrap();
    map.add_tile(1, 1, 0, "default").unwrap();
    let cells: Vec<(u32, u32)> = map.tiles().map(|t| (t.x, t.y)).collect();
    assert_eq!(cells, vec![(1, 1), (5, 1), (0, 2)]);
}

#[test]
fn clear_removes_tiles_but_keeps_tilesets() {
    let mut map = map_10x10();
    map.set_tileset("grass", "tiles/grass.png");
    map.add_tile(0, 0, 1, "grass").unwrap();
    map.clear();
    assert_eq!(map.tile_count(), 0);
    assert_eq!(map.tileset("grass"), Some("tiles/grass.png"));
}

// =============================================================
// World mapping
// =============================================================

#[test]
fn cell_at_maps_world_point_to_cell() {
    let map = map_10x10();
    assert_eq!(map.cell_at(Point::new(0.0, 0.0)), Some((0, 0)));
    assert_eq!(map.cell_at(Point::new(33.0, 95.9)), Some((1, 2)));
}

#[test]
fn cell_at_outside_grid_is_none() {
    let map = map_10x10();
    assert_eq!(map.cell_at(Point::new(-0.5, 0.0)), None);
    assert_eq!(map.cell_at(Point::new(320.0, 0.0)), None);
    assert_eq!(map.cell_at(Point::new(f64::NAN, 0.0)), None);
}

// =============================================================
// Tilesets and layers
// =============================================================

#[test]
fn tileset_references_replace_and_remove() {
    let mut map = map_10x10();
    assert_eq!(map.set_tileset("a", "a.png"), None);
    assert_eq!(map.set_tileset("a", "a2.png"), Some("a.png".to_owned()));
    assert_eq!(map.remove_tileset("a"), Some("a2.png".to_owned()));
    assert!(map.tilesets().is_empty());
}

#[test]
fn aux_layers_keep_order_and_remove_by_id() {
    let mut map = map_10x10();
    let under = Layer::new("Under");
    let over = Layer::new("Over");
    let under_id = under.id();
    map.add_layer(under);
    map.add_layer(over);
    assert_eq!(map.layers()[0].name(), "Under");

    map.layer_mut(under_id).unwrap().toggle_visibility();
    assert!(!map.layers()[0].is_visible());

    map.remove_layer(under_id).unwrap();
    assert_eq!(map.layers().len(), 1);
    assert!(matches!(map.remove_layer(under_id), Err(SceneError::LayerNotFound(_))));
}
