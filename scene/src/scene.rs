//! Scene model: the root aggregate that owns every layer, entity, and tilemap.
//!
//! The scene keeps three ordered collections. Order is z-order: later
//! entries draw on top. Each member carries a stable id, and the scene's
//! methods are the only way to change membership, so ownership, ordering and
//! id uniqueness are enforced here.
//!
//! Collaborators that need to mutate a member in place (layer panel toggling
//! visibility, inspector editing an entity) hold its id and go through
//! `layer_mut` / `entity_mut` / `tilemap_mut`; the change is visible to every
//! other holder of the same id on their next lookup.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::fmt;

use crate::consts::DEFAULT_SCENE_NAME;
use crate::entity::{Entity, EntityId};
use crate::error::{ErrorClass, ErrorCode};
use crate::layer::{Layer, LayerId};
use crate::tilemap::{Tilemap, TilemapId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("opacity must be between 0.0 and 1.0 (got {0})")]
    InvalidOpacity(f64),
    #[error("tile size must be positive (got {tile_width} x {tile_height})")]
    InvalidTileSize { tile_width: u32, tile_height: u32 },
    #[error("tile coordinates ({x}, {y}) out of bounds for {width}x{height} tilemap")]
    TileOutOfBounds { x: i64, y: i64, width: u32, height: u32 },
    #[error("no tile at ({x}, {y})")]
    TileNotFound { x: u32, y: u32 },
    #[error("layer not found: {0}")]
    LayerNotFound(LayerId),
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),
    #[error("tilemap not found: {0}")]
    TilemapNotFound(TilemapId),
    #[error("layer already in scene: {0}")]
    DuplicateLayer(LayerId),
    #[error("entity id already in scene: {0}")]
    DuplicateEntity(EntityId),
    #[error("tilemap already in scene: {0}")]
    DuplicateTilemap(TilemapId),
}

impl ErrorCode for SceneError {
    fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidOpacity(_)
            | Self::InvalidTileSize { .. }
            | Self::DuplicateLayer(_)
            | Self::DuplicateEntity(_)
            | Self::DuplicateTilemap(_) => ErrorClass::Validation,
            Self::TileOutOfBounds { .. } => ErrorClass::OutOfBounds,
            Self::TileNotFound { .. } | Self::LayerNotFound(_) | Self::EntityNotFound(_) | Self::TilemapNotFound(_) => {
                ErrorClass::NotFound
            }
        }
    }
}

/// Members of a scene collection, looked up by their handle.
trait Member {
    type Id: Copy + PartialEq;

    fn member_id(&self) -> Self::Id;
}

impl Member for Layer {
    type Id = LayerId;

    fn member_id(&self) -> LayerId {
        self.id()
    }
}

impl Member for Entity {
    type Id = EntityId;

    fn member_id(&self) -> EntityId {
        self.id()
    }
}

impl Member for Tilemap {
    type Id = TilemapId;

    fn member_id(&self) -> TilemapId {
        self.id()
    }
}

fn index_of<T: Member>(items: &[T], id: T::Id) -> Option<usize> {
    items.iter().position(|item| item.member_id() == id)
}

/// Insert at `index` (clamped to the end) unless the id is already present.
fn insert_unique<T: Member>(items: &mut Vec<T>, index: usize, item: T, duplicate: fn(T::Id) -> SceneError) -> Result<(), SceneError> {
    let id = item.member_id();
    if index_of(items, id).is_some() {
        return Err(duplicate(id));
    }
    items.insert(index.min(items.len()), item);
    Ok(())
}

/// Root aggregate of editable content.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Display name, written to the document.
    pub name: String,
    layers: Vec<Layer>,
    entities: Vec<Entity>,
    tilemaps: Vec<Tilemap>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_SCENE_NAME)
    }
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), layers: Vec::new(), entities: Vec::new(), tilemaps: Vec::new() }
    }

    /// Layers in draw order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Entities in draw order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Tilemaps in draw order.
    #[must_use]
    pub fn tilemaps(&self) -> &[Tilemap] {
        &self.tilemaps
    }

    /// Returns `true` if the scene owns no layers, entities, or tilemaps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty() && self.entities.is_empty() && self.tilemaps.is_empty()
    }

    /// Drop every layer, entity, and tilemap.
    pub fn clear(&mut self) {
        self.layers.clear();
        self.entities.clear();
        self.tilemaps.clear();
    }

    // --- Layers ---

    /// Append a layer on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateLayer`] if this layer (same id) is already in the scene.
    pub fn add_layer(&mut self, layer: Layer) -> Result<LayerId, SceneError> {
        let id = layer.id();
        insert_unique(&mut self.layers, usize::MAX, layer, SceneError::DuplicateLayer)?;
        Ok(id)
    }

    /// Insert a layer at `index`; indexes past the end append.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateLayer`] if this layer is already in the scene.
    pub fn insert_layer(&mut self, index: usize, layer: Layer) -> Result<(), SceneError> {
        insert_unique(&mut self.layers, index, layer, SceneError::DuplicateLayer)
    }

    /// # Errors
    ///
    /// Returns [`SceneError::LayerNotFound`] if the layer isn't owned by this scene.
    pub fn remove_layer(&mut self, id: LayerId) -> Result<Layer, SceneError> {
        let index = index_of(&self.layers, id).ok_or(SceneError::LayerNotFound(id))?;
        Ok(self.layers.remove(index))
    }

    /// Move a layer to `index` in the draw order (clamped to the top). Returns its previous index.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::LayerNotFound`] if the layer isn't owned by this scene.
    pub fn move_layer(&mut self, id: LayerId, index: usize) -> Result<usize, SceneError> {
        let from = index_of(&self.layers, id).ok_or(SceneError::LayerNotFound(id))?;
        let layer = self.layers.remove(from);
        self.layers.insert(index.min(self.layers.len()), layer);
        Ok(from)
    }

    #[must_use]
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id() == id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id() == id)
    }

    #[must_use]
    pub fn layer_index(&self, id: LayerId) -> Option<usize> {
        index_of(&self.layers, id)
    }

    /// First layer with this name, bottom-up.
    #[must_use]
    pub fn layer_by_name(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    // --- Entities ---

    /// Append an entity.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateEntity`] if an entity with the same id is already in the scene.
    pub fn add_entity(&mut self, entity: Entity) -> Result<EntityId, SceneError> {
        let id = entity.id();
        insert_unique(&mut self.entities, usize::MAX, entity, SceneError::DuplicateEntity)?;
        Ok(id)
    }

    /// Insert an entity at `index`; indexes past the end append.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateEntity`] if an entity with the same id is already in the scene.
    pub fn insert_entity(&mut self, index: usize, entity: Entity) -> Result<(), SceneError> {
        insert_unique(&mut self.entities, index, entity, SceneError::DuplicateEntity)
    }

    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the entity isn't owned by this scene.
    pub fn remove_entity(&mut self, id: EntityId) -> Result<Entity, SceneError> {
        let index = index_of(&self.entities, id).ok_or(SceneError::EntityNotFound(id))?;
        Ok(self.entities.remove(index))
    }

    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    #[must_use]
    pub fn entity_index(&self, id: EntityId) -> Option<usize> {
        index_of(&self.entities, id)
    }

    #[must_use]
    pub fn entity_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    // --- Tilemaps ---

    /// Append a tilemap.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateTilemap`] if this tilemap is already in the scene.
    pub fn add_tilemap(&mut self, tilemap: Tilemap) -> Result<TilemapId, SceneError> {
        let id = tilemap.id();
        insert_unique(&mut self.tilemaps, usize::MAX, tilemap, SceneError::DuplicateTilemap)?;
        Ok(id)
    }

    /// Insert a tilemap at `index`; indexes past the end append.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateTilemap`] if this tilemap is already in the scene.
    pub fn insert_tilemap(&mut self, index: usize, tilemap: Tilemap) -> Result<(), SceneError> {
        insert_unique(&mut self.tilemaps, index, tilemap, SceneError::DuplicateTilemap)
    }

    /// # Errors
    ///
    /// Returns [`SceneError::TilemapNotFound`] if the tilemap isn't owned by this scene.
    pub fn remove_tilemap(&mut self, id: TilemapId) -> Result<Tilemap, SceneError> {
        let index = index_of(&self.tilemaps, id).ok_or(SceneError::TilemapNotFound(id))?;
        Ok(self.tilemaps.remove(index))
    }

    #[must_use]
    pub fn tilemap(&self, id: TilemapId) -> Option<&Tilemap> {
        self.tilemaps.iter().find(|t| t.id() == id)
    }

    pub fn tilemap_mut(&mut self, id: TilemapId) -> Option<&mut Tilemap> {
        self.tilemaps.iter_mut().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn tilemap_index(&self, id: TilemapId) -> Option<usize> {
        index_of(&self.tilemaps, id)
    }

    #[must_use]
    pub fn tilemap_by_name(&self, name: &str) -> Option<&Tilemap> {
        self.tilemaps.iter().find(|t| t.name == name)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scene(name='{}', layers={}, entities={}, tilemaps={})",
            self.name,
            self.layers.len(),
            self.entities.len(),
            self.tilemaps.len()
        )
    }
}
