//! Reversible scene edits.
//!
//! Every edit a tool can make is one variant of [`EditAction`]. A variant
//! carries both the new state and whatever it overwrote, so
//! [`EditAction::inverse`] can build the opposite edit without consulting the
//! scene. Constructors named after the edit (`EditAction::remove_layer`, ...)
//! snapshot the before-state from a scene; they don't mutate it.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use serde_json::Value;

use crate::entity::{Entity, EntityId};
use crate::geom::Point;
use crate::layer::{Layer, LayerId};
use crate::scene::{Scene, SceneError};
use crate::tilemap::{Tile, Tilemap, TilemapId};

/// A single undoable edit to a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    /// Insert `layer` at `index` in the layer stack.
    AddLayer { index: usize, layer: Layer },
    /// Remove `layer`, which sits at `index`.
    RemoveLayer { index: usize, layer: Layer },
    /// Move a layer from one stack position to another.
    MoveLayer { layer: LayerId, from: usize, to: usize },
    SetLayerOpacity { layer: LayerId, from: f64, to: f64 },
    ToggleLayerVisibility { layer: LayerId },
    ToggleLayerLock { layer: LayerId },
    AddEntity { index: usize, entity: Entity },
    RemoveEntity { index: usize, entity: Entity },
    MoveEntity { entity: EntityId, from: Point, to: Point },
    /// Set (`Some`) or delete (`None`) a property.
    SetEntityProperty { entity: EntityId, key: String, from: Option<Value>, to: Option<Value> },
    AddTilemap { index: usize, tilemap: Tilemap },
    RemoveTilemap { index: usize, tilemap: Tilemap },
    /// Place `tile`, overwriting `replaced` if the cell was occupied.
    PaintTile { tilemap: TilemapId, tile: Tile, replaced: Option<Tile> },
    /// Clear the cell holding `tile`.
    EraseTile { tilemap: TilemapId, tile: Tile },
}

fn layer_mut(scene: &mut Scene, id: LayerId) -> Result<&mut Layer, SceneError> {
    scene.layer_mut(id).ok_or(SceneError::LayerNotFound(id))
}

fn entity_mut(scene: &mut Scene, id: EntityId) -> Result<&mut Entity, SceneError> {
    scene.entity_mut(id).ok_or(SceneError::EntityNotFound(id))
}

fn tilemap_mut(scene: &mut Scene, id: TilemapId) -> Result<&mut Tilemap, SceneError> {
    scene.tilemap_mut(id).ok_or(SceneError::TilemapNotFound(id))
}

fn tilemap(scene: &Scene, id: TilemapId) -> Result<&Tilemap, SceneError> {
    scene.tilemap(id).ok_or(SceneError::TilemapNotFound(id))
}

impl EditAction {
    // =========================================================================
    // RECORDING
    // =========================================================================

    /// Append `layer` on top of the stack.
    #[must_use]
    pub fn add_layer(scene: &Scene, layer: Layer) -> Self {
        Self::AddLayer { index: scene.layers().len(), layer }
    }

    /// # Errors
    ///
    /// Returns [`SceneError::LayerNotFound`] if the layer isn't in the scene.
    pub fn remove_layer(scene: &Scene, id: LayerId) -> Result<Self, SceneError> {
        let index = scene.layer_index(id).ok_or(SceneError::LayerNotFound(id))?;
        Ok(Self::RemoveLayer { index, layer: scene.layers()[index].clone() })
    }

    /// # Errors
    ///
    /// Returns [`SceneError::LayerNotFound`] if the layer isn't in the scene.
    pub fn move_layer(scene: &Scene, id: LayerId, to: usize) -> Result<Self, SceneError> {
        let from = scene.layer_index(id).ok_or(SceneError::LayerNotFound(id))?;
        let to = to.min(scene.layers().len().saturating_sub(1));
        Ok(Self::MoveLayer { layer: id, from, to })
    }

    /// # Errors
    ///
    /// Returns [`SceneError::LayerNotFound`] if the layer isn't in the scene, or
    /// [`SceneError::InvalidOpacity`] if `to` is outside `[0, 1]`.
    pub fn set_layer_opacity(scene: &Scene, id: LayerId, to: f64) -> Result<Self, SceneError> {
        let layer = scene.layer(id).ok_or(SceneError::LayerNotFound(id))?;
        if !(0.0..=1.0).contains(&to) {
            return Err(SceneError::InvalidOpacity(to));
        }
        Ok(Self::SetLayerOpacity { layer: id, from: layer.opacity(), to })
    }

    #[must_use]
    pub fn add_entity(scene: &Scene, entity: Entity) -> Self {
        Self::AddEntity { index: scene.entities().len(), entity }
    }

    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the entity isn't in the scene.
    pub fn remove_entity(scene: &Scene, id: EntityId) -> Result<Self, SceneError> {
        let index = scene.entity_index(id).ok_or(SceneError::EntityNotFound(id))?;
        Ok(Self::RemoveEntity { index, entity: scene.entities()[index].clone() })
    }

    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the entity isn't in the scene.
    pub fn move_entity(scene: &Scene, id: EntityId, to: Point) -> Result<Self, SceneError> {
        let entity = scene.entity(id).ok_or(SceneError::EntityNotFound(id))?;
        Ok(Self::MoveEntity { entity: id, from: entity.position, to })
    }

    /// Record setting (`Some`) or deleting (`None`) a property.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the entity isn't in the scene.
    pub fn set_entity_property(
        scene: &Scene,
        id: EntityId,
        key: impl Into<String>,
        to: Option<Value>,
    ) -> Result<Self, SceneError> {
        let entity = scene.entity(id).ok_or(SceneError::EntityNotFound(id))?;
        let key = key.into();
        let from = entity.get_property(&key).cloned();
        Ok(Self::SetEntityProperty { entity: id, key, from, to })
    }

    #[must_use]
    pub fn add_tilemap(scene: &Scene, tilemap: Tilemap) -> Self {
        Self::AddTilemap { index: scene.tilemaps().len(), tilemap }
    }

    /// # Errors
    ///
    /// Returns [`SceneError::TilemapNotFound`] if the tilemap isn't in the scene.
    pub fn remove_tilemap(scene: &Scene, id: TilemapId) -> Result<Self, SceneError> {
        let index = scene.tilemap_index(id).ok_or(SceneError::TilemapNotFound(id))?;
        Ok(Self::RemoveTilemap { index, tilemap: scene.tilemaps()[index].clone() })
    }

    /// # Errors
    ///
    /// Returns [`SceneError::TilemapNotFound`] if the tilemap isn't in the scene,
    /// or [`SceneError::TileOutOfBounds`] if `(x, y)` isn't a cell of it.
    pub fn paint_tile(
        scene: &Scene,
        id: TilemapId,
        x: i64,
        y: i64,
        tile_id: u32,
        tileset: impl Into<String>,
    ) -> Result<Self, SceneError> {
        let map = tilemap(scene, id)?;
        let replaced = map.get_tile(x, y)?.cloned();
        // In bounds, so both coordinates fit in u32.
        let (Ok(cx), Ok(cy)) = (u32::try_from(x), u32::try_from(y)) else {
            return Err(SceneError::TileOutOfBounds { x, y, width: map.width(), height: map.height() });
        };
        Ok(Self::PaintTile { tilemap: id, tile: Tile::new(cx, cy, tile_id, tileset), replaced })
    }

    /// Record erasing the tile at `(x, y)`. `Ok(None)` when the cell is already empty.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::TilemapNotFound`] if the tilemap isn't in the scene,
    /// or [`SceneError::TileOutOfBounds`] if `(x, y)` isn't a cell of it.
    pub fn erase_tile(scene: &Scene, id: TilemapId, x: i64, y: i64) -> Result<Option<Self>, SceneError> {
        let map = tilemap(scene, id)?;
        Ok(map.get_tile(x, y)?.map(|tile| Self::EraseTile { tilemap: id, tile: tile.clone() }))
    }

    // =========================================================================
    // APPLY / INVERT
    // =========================================================================

    /// Perform the edit.
    ///
    /// # Errors
    ///
    /// Returns the [`SceneError`] of the underlying scene operation, e.g.
    /// `*NotFound` when the target is no longer in the scene. The scene is
    /// unchanged on error.
    pub fn apply(&self, scene: &mut Scene) -> Result<(), SceneError> {
        match self {
            Self::AddLayer { index, layer } => scene.insert_layer(*index, layer.clone()),
            Self::RemoveLayer { layer, .. } => scene.remove_layer(layer.id()).map(drop),
            Self::MoveLayer { layer, to, .. } => scene.move_layer(*layer, *to).map(drop),
            Self::SetLayerOpacity { layer, to, .. } => layer_mut(scene, *layer)?.set_opacity(*to),
            Self::ToggleLayerVisibility { layer } => {
                layer_mut(scene, *layer)?.toggle_visibility();
                Ok(())
            }
            Self::ToggleLayerLock { layer } => {
                layer_mut(scene, *layer)?.toggle_lock();
                Ok(())
            }
            Self::AddEntity { index, entity } => scene.insert_entity(*index, entity.clone()),
            Self::RemoveEntity { entity, .. } => scene.remove_entity(entity.id()).map(drop),
            Self::MoveEntity { entity, to, .. } => {
                entity_mut(scene, *entity)?.update_position(*to);
                Ok(())
            }
            Self::SetEntityProperty { entity, key, to, .. } => {
                let target = entity_mut(scene, *entity)?;
                match to {
                    Some(value) => target.add_property(key.clone(), value.clone()),
                    None => target.remove_property(key),
                };
                Ok(())
            }
            Self::AddTilemap { index, tilemap } => scene.insert_tilemap(*index, tilemap.clone()),
            Self::RemoveTilemap { tilemap, .. } => scene.remove_tilemap(tilemap.id()).map(drop),
            Self::PaintTile { tilemap, tile, .. } => tilemap_mut(scene, *tilemap)?.put_tile(tile.clone()).map(drop),
            Self::EraseTile { tilemap, tile } => tilemap_mut(scene, *tilemap)?
                .remove_tile(i64::from(tile.x), i64::from(tile.y))
                .map(drop)
                .ok_or(SceneError::TileNotFound { x: tile.x, y: tile.y }),
        }
    }

    /// The edit that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self.clone() {
            Self::AddLayer { index, layer } => Self::RemoveLayer { index, layer },
            Self::RemoveLayer { index, layer } => Self::AddLayer { index, layer },
            Self::MoveLayer { layer, from, to } => Self::MoveLayer { layer, from: to, to: from },
            Self::SetLayerOpacity { layer, from, to } => Self::SetLayerOpacity { layer, from: to, to: from },
            toggle @ (Self::ToggleLayerVisibility { .. } | Self::ToggleLayerLock { .. }) => toggle,
            Self::AddEntity { index, entity } => Self::RemoveEntity { index, entity },
            Self::RemoveEntity { index, entity } => Self::AddEntity { index, entity },
            Self::MoveEntity { entity, from, to } => Self::MoveEntity { entity, from: to, to: from },
            Self::SetEntityProperty { entity, key, from, to } => Self::SetEntityProperty { entity, key, from: to, to: from },
            Self::AddTilemap { index, tilemap } => Self::RemoveTilemap { index, tilemap },
            Self::RemoveTilemap { index, tilemap } => Self::AddTilemap { index, tilemap },
            Self::PaintTile { tilemap, tile, replaced: Some(old) } => Self::PaintTile { tilemap, tile: old, replaced: Some(tile) },
            Self::PaintTile { tilemap, tile, replaced: None } => Self::EraseTile { tilemap, tile },
            Self::EraseTile { tilemap, tile } => Self::PaintTile { tilemap, tile, replaced: None },
        }
    }

    /// Undo the edit: apply its inverse.
    ///
    /// # Errors
    ///
    /// Same as [`EditAction::apply`].
    pub fn revert(&self, scene: &mut Scene) -> Result<(), SceneError> {
        self.inverse().apply(scene)
    }

    /// Short description for history menus and logs.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::AddLayer { layer, .. } => format!("Add layer '{}'", layer.name()),
            Self::RemoveLayer { layer, .. } => format!("Remove layer '{}'", layer.name()),
            Self::MoveLayer { from, to, .. } => format!("Move layer {from} -> {to}"),
            Self::SetLayerOpacity { to, .. } => format!("Set layer opacity to {to}"),
            Self::ToggleLayerVisibility { .. } => "Toggle layer visibility".to_owned(),
            Self::ToggleLayerLock { .. } => "Toggle layer lock".to_owned(),
            Self::AddEntity { entity, .. } => format!("Place '{}'", entity.name),
            Self::RemoveEntity { entity, .. } => format!("Delete '{}'", entity.name),
            Self::MoveEntity { to, .. } => format!("Move entity to ({}, {})", to.x, to.y),
            Self::SetEntityProperty { key, to: Some(_), .. } => format!("Set property '{key}'"),
            Self::SetEntityProperty { key, to: None, .. } => format!("Remove property '{key}'"),
            Self::AddTilemap { tilemap, .. } => format!("Add tilemap '{}'", tilemap.name),
            Self::RemoveTilemap { tilemap, .. } => format!("Remove tilemap '{}'", tilemap.name),
            Self::PaintTile { tile, .. } => format!("Paint tile {} at ({}, {})", tile.tile_id, tile.x, tile.y),
            Self::EraseTile { tile, .. } => format!("Erase tile at ({}, {})", tile.x, tile.y),
        }
    }
}
