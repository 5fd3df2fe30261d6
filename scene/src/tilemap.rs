//! Tilemaps: fixed-size grids of tile references with sparse storage.
//!
//! A tilemap stores only the cells that hold a tile; an absent cell is
//! empty. Coordinates outside `[0, width) x [0, height)` are never stored,
//! and looking one up is an error rather than "empty".

#[cfg(test)]
#[path = "tilemap_test.rs"]
mod tilemap_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_TILESET, DEFAULT_TILE_SIZE};
use crate::geom::Point;
use crate::layer::{Layer, LayerId};
use crate::scene::SceneError;

/// Stable handle for a tilemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilemapId(Uuid);

impl TilemapId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TilemapId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TilemapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single placed tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Column in the grid.
    pub x: u32,
    /// Row in the grid.
    pub y: u32,
    /// Index into the tileset image.
    pub tile_id: u32,
    /// Name of the tileset the index refers to.
    pub tileset: String,
}

impl Tile {
    #[must_use]
    pub fn new(x: u32, y: u32, tile_id: u32, tileset: impl Into<String>) -> Self {
        Self { x, y, tile_id, tileset: tileset.into() }
    }

    /// Tile from the `"default"` tileset.
    #[must_use]
    pub fn with_default_tileset(x: u32, y: u32, tile_id: u32) -> Self {
        Self::new(x, y, tile_id, DEFAULT_TILESET)
    }
}

/// A `width` x `height` grid of tiles, each cell `tile_width` x `tile_height`
/// world units.
#[derive(Debug, Clone, PartialEq)]
pub struct Tilemap {
    id: TilemapId,
    /// Display name; also used by tools to pick a target map.
    pub name: String,
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
    // Keyed by (row, column) so iteration is row-major.
    tiles: BTreeMap<(u32, u32), Tile>,
    tilesets: BTreeMap<String, String>,
    layers: Vec<Layer>,
}

impl Tilemap {
    /// Empty grid with the default 32x32 cell size.
    #[must_use]
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: TilemapId::new(),
            name: name.into(),
            width,
            height,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            tiles: BTreeMap::new(),
            tilesets: BTreeMap::new(),
            layers: Vec::new(),
        }
    }

    /// # Errors
    ///
    /// Returns [`SceneError::InvalidTileSize`] if either cell dimension is zero.
    pub fn with_tile_size(
        name: impl Into<String>,
        width: u32,
        height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self, SceneError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(SceneError::InvalidTileSize { tile_width, tile_height });
        }
        let mut map = Self::new(name, width, height);
        map.tile_width = tile_width;
        map.tile_height = tile_height;
        Ok(map)
    }

    #[must_use]
    pub fn id(&self) -> TilemapId {
        self.id
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    #[must_use]
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    fn cell(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let (Ok(cx), Ok(cy)) = (u32::try_from(x), u32::try_from(y)) else {
            return None;
        };
        (cx < self.width && cy < self.height).then_some((cx, cy))
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> SceneError {
        SceneError::TileOutOfBounds { x, y, width: self.width, height: self.height }
    }

    /// Whether `(x, y)` is a cell of this grid.
    #[must_use]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        self.cell(x, y).is_some()
    }

    /// Place a tile, replacing whatever was in the cell. Returns the replaced tile.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::TileOutOfBounds`] if `(x, y)` isn't a cell of the grid.
    pub fn add_tile(&mut self, x: i64, y: i64, tile_id: u32, tileset: impl Into<String>) -> Result<Option<Tile>, SceneError> {
        let (cx, cy) = self.cell(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        Ok(self.tiles.insert((cy, cx), Tile::new(cx, cy, tile_id, tileset)))
    }

    /// Place a fully-formed tile at its own coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::TileOutOfBounds`] if the tile's cell isn't in the grid.
    pub fn put_tile(&mut self, tile: Tile) -> Result<Option<Tile>, SceneError> {
        if tile.x >= self.width || tile.y >= self.height {
            return Err(self.out_of_bounds(i64::from(tile.x), i64::from(tile.y)));
        }
        Ok(self.tiles.insert((tile.y, tile.x), tile))
    }

    /// Remove the tile at `(x, y)`. Empty or out-of-bounds cells are a no-op.
    pub fn remove_tile(&mut self, x: i64, y: i64) -> Option<Tile> {
        let (cx, cy) = self.cell(x, y)?;
        self.tiles.remove(&(cy, cx))
    }

    /// Look up the tile at `(x, y)`. `Ok(None)` means the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::TileOutOfBounds`] if `(x, y)` isn't a cell of the grid.
    pub fn get_tile(&self, x: i64, y: i64) -> Result<Option<&Tile>, SceneError> {
        let (cx, cy) = self.cell(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        Ok(self.tiles.get(&(cy, cx)))
    }

    /// All placed tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Remove every tile. Tilesets and layers are kept.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Grid cell under a world-space point, if any.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn cell_at(&self, world: Point) -> Option<(u32, u32)> {
        if !world.is_finite() {
            return None;
        }
        let x = (world.x / f64::from(self.tile_width)).floor() as i64;
        let y = (world.y / f64::from(self.tile_height)).floor() as i64;
        self.cell(x, y)
    }

    // --- Tilesets ---

    /// Register a tileset image reference under `name`, returning the previous one.
    pub fn set_tileset(&mut self, name: impl Into<String>, image_ref: impl Into<String>) -> Option<String> {
        self.tilesets.insert(name.into(), image_ref.into())
    }

    #[must_use]
    pub fn tileset(&self, name: &str) -> Option<&str> {
        self.tilesets.get(name).map(String::as_str)
    }

    pub fn remove_tileset(&mut self, name: &str) -> Option<String> {
        self.tilesets.remove(name)
    }

    #[must_use]
    pub fn tilesets(&self) -> &BTreeMap<String, String> {
        &self.tilesets
    }

    // --- Auxiliary tile layers ---

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// # Errors
    ///
    /// Returns [`SceneError::LayerNotFound`] if the layer isn't owned by this tilemap.
    pub fn remove_layer(&mut self, id: LayerId) -> Result<Layer, SceneError> {
        let index = self
            .layers
            .iter()
            .position(|l| l.id() == id)
            .ok_or(SceneError::LayerNotFound(id))?;
        Ok(self.layers.remove(index))
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id() == id)
    }
}
