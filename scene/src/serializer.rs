//! Scene documents: JSON encoding and file persistence.
//!
//! The document is a flat, versionless mapping:
//!
//! ```json
//! {
//!     "name": "Level 1",
//!     "layers":   [{ "name": "Background", "visible": true, "opacity": 1.0, "locked": false }],
//!     "entities": [{ "id": "…", "name": "Player", "x": 10.0, "y": 20.0, "width": 1.0, "height": 1.0, "properties": {} }],
//!     "tilemaps": [{ "name": "Ground", "tile_width": 32, "tile_height": 32, "rows": 10, "columns": 10,
//!                    "tiles": [{ "x": 0, "y": 0, "tile_id": 3, "tileset": "default" }],
//!                    "tilesets": {}, "layers": [] }]
//! }
//! ```
//!
//! List order is z-order and survives a round trip. Every key is optional on
//! read and falls back to the defaults in [`crate::consts`]; unknown keys are
//! ignored. Entity ids are kept, layer and tilemap ids are minted on load.

#[cfg(test)]
#[path = "serializer_test.rs"]
mod serializer_test;

use std::collections::{BTreeMap, HashSet};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::{
    DEFAULT_ENTITY_NAME, DEFAULT_LAYER_NAME, DEFAULT_SCENE_NAME, DEFAULT_TILE_SIZE, DEFAULT_TILEMAP_NAME,
    DEFAULT_TILESET, DOCUMENT_INDENT,
};
use crate::entity::{Entity, EntityId};
use crate::error::{ErrorClass, ErrorCode};
use crate::geom::{Point, Size};
use crate::layer::Layer;
use crate::scene::Scene;
use crate::tilemap::{Tile, Tilemap};

#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("scene cannot be encoded: {0}")]
    InvalidScene(String),
    #[error("invalid scene document: {0}")]
    Validation(String),
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("file already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("malformed scene document: {0}")]
    Malformed(String),
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ErrorCode for SerializeError {
    fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidScene(_) | Self::Validation(_) | Self::AlreadyExists { .. } => ErrorClass::Validation,
            Self::FileNotFound { .. } => ErrorClass::FileNotFound,
            Self::PermissionDenied { .. } => ErrorClass::PermissionDenied,
            Self::Malformed(_) => ErrorClass::Malformed,
            Self::Io { .. } => ErrorClass::Io,
        }
    }
}

fn io_error(path: &Path, source: io::Error) -> SerializeError {
    let path = path.to_path_buf();
    match source.kind() {
        io::ErrorKind::NotFound => SerializeError::FileNotFound { path },
        io::ErrorKind::PermissionDenied => SerializeError::PermissionDenied { path },
        io::ErrorKind::AlreadyExists => SerializeError::AlreadyExists { path },
        _ => SerializeError::Io { path, source },
    }
}

// =============================================================================
// DOCUMENT SHAPE
// =============================================================================

fn default_scene_name() -> String {
    DEFAULT_SCENE_NAME.to_owned()
}

fn default_layer_name() -> String {
    DEFAULT_LAYER_NAME.to_owned()
}

fn default_entity_name() -> String {
    DEFAULT_ENTITY_NAME.to_owned()
}

fn default_tilemap_name() -> String {
    DEFAULT_TILEMAP_NAME.to_owned()
}

fn default_tileset() -> String {
    DEFAULT_TILESET.to_owned()
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

#[derive(Debug, Serialize, Deserialize)]
struct SceneDoc {
    #[serde(default = "default_scene_name")]
    name: String,
    #[serde(default)]
    layers: Vec<LayerDoc>,
    #[serde(default)]
    entities: Vec<EntityDoc>,
    #[serde(default)]
    tilemaps: Vec<TilemapDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LayerDoc {
    #[serde(default = "default_layer_name")]
    name: String,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default = "default_one")]
    opacity: f64,
    #[serde(default)]
    locked: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct EntityDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<EntityId>,
    #[serde(default = "default_entity_name")]
    name: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default = "default_one")]
    width: f64,
    #[serde(default = "default_one")]
    height: f64,
    #[serde(default)]
    properties: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TilemapDoc {
    #[serde(default = "default_tilemap_name")]
    name: String,
    #[serde(default = "default_tile_size")]
    tile_width: u32,
    #[serde(default = "default_tile_size")]
    tile_height: u32,
    #[serde(default)]
    rows: u32,
    #[serde(default)]
    columns: u32,
    #[serde(default)]
    tiles: Vec<TileDoc>,
    #[serde(default)]
    tilesets: BTreeMap<String, String>,
    #[serde(default)]
    layers: Vec<LayerDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TileDoc {
    x: u32,
    y: u32,
    tile_id: u32,
    #[serde(default = "default_tileset")]
    tileset: String,
}

// =============================================================================
// SCENE -> DOCUMENT
// =============================================================================

fn layer_doc(layer: &Layer) -> LayerDoc {
    LayerDoc {
        name: layer.name().to_owned(),
        visible: layer.is_visible(),
        opacity: layer.opacity(),
        locked: layer.is_locked(),
    }
}

fn entity_doc(entity: &Entity) -> Result<EntityDoc, SerializeError> {
    let Point { x, y } = entity.position;
    let (width, height) = (entity.size.width(), entity.size.height());
    if ![x, y, width, height].iter().all(|v| v.is_finite()) {
        return Err(SerializeError::InvalidScene(format!(
            "entity '{}' has non-finite position or size",
            entity.name
        )));
    }
    Ok(EntityDoc {
        id: Some(entity.id()),
        name: entity.name.clone(),
        x,
        y,
        width,
        height,
        properties: entity.properties().clone(),
    })
}

fn tilemap_doc(tilemap: &Tilemap) -> TilemapDoc {
    TilemapDoc {
        name: tilemap.name.clone(),
        tile_width: tilemap.tile_width(),
        tile_height: tilemap.tile_height(),
        rows: tilemap.height(),
        columns: tilemap.width(),
        tiles: tilemap
            .tiles()
            .map(|t| TileDoc { x: t.x, y: t.y, tile_id: t.tile_id, tileset: t.tileset.clone() })
            .collect(),
        tilesets: tilemap.tilesets().clone(),
        layers: tilemap.layers().iter().map(layer_doc).collect(),
    }
}

fn scene_doc(scene: &Scene) -> Result<SceneDoc, SerializeError> {
    Ok(SceneDoc {
        name: scene.name.clone(),
        layers: scene.layers().iter().map(layer_doc).collect(),
        entities: scene.entities().iter().map(entity_doc).collect::<Result<_, _>>()?,
        tilemaps: scene.tilemaps().iter().map(tilemap_doc).collect(),
    })
}

/// Encode a scene as a document.
///
/// # Errors
///
/// Returns [`SerializeError::InvalidScene`] if the scene holds numbers JSON
/// can't represent (NaN or infinite entity positions).
pub fn serialize(scene: &Scene) -> Result<Value, SerializeError> {
    let doc = scene_doc(scene)?;
    serde_json::to_value(doc).map_err(|e| SerializeError::InvalidScene(e.to_string()))
}

// =============================================================================
// DOCUMENT -> SCENE
// =============================================================================

fn invalid(field: &str, detail: impl std::fmt::Display) -> SerializeError {
    SerializeError::Validation(format!("{field}: {detail}"))
}

fn build_layer(doc: LayerDoc, field: &str) -> Result<Layer, SerializeError> {
    let mut layer = Layer::with_opacity(doc.name, doc.opacity).map_err(|e| invalid(field, e))?;
    layer.set_visible(doc.visible);
    layer.set_locked(doc.locked);
    Ok(layer)
}

fn build_entity(doc: EntityDoc, field: &str) -> Result<Entity, SerializeError> {
    let position = Point::new(doc.x, doc.y);
    if !position.is_finite() {
        return Err(invalid(field, "position must be finite"));
    }
    let size = Size::new(doc.width, doc.height).map_err(|e| invalid(field, e))?;
    let mut entity = Entity::with_id(doc.id.unwrap_or_default(), doc.name, position);
    entity.size = size;
    for (key, value) in doc.properties {
        entity.add_property(key, value);
    }
    Ok(entity)
}

fn build_tilemap(doc: TilemapDoc, field: &str) -> Result<Tilemap, SerializeError> {
    let mut tilemap = Tilemap::with_tile_size(doc.name, doc.columns, doc.rows, doc.tile_width, doc.tile_height)
        .map_err(|e| invalid(field, e))?;
    for (i, tile) in doc.tiles.into_iter().enumerate() {
        tilemap
            .put_tile(Tile::new(tile.x, tile.y, tile.tile_id, tile.tileset))
            .map_err(|e| invalid(&format!("{field}.tiles[{i}]"), e))?;
    }
    for (name, image_ref) in doc.tilesets {
        tilemap.set_tileset(name, image_ref);
    }
    for (i, layer) in doc.layers.into_iter().enumerate() {
        tilemap.add_layer(build_layer(layer, &format!("{field}.layers[{i}]"))?);
    }
    Ok(tilemap)
}

/// Rebuild a scene from a document, preserving list order.
///
/// # Errors
///
/// Returns [`SerializeError::Validation`] if `document` isn't an object, a
/// key has the wrong shape, a value breaks a model invariant (opacity out of
/// range, tile outside its grid, negative size), or two entities share an id.
pub fn deserialize(document: &Value) -> Result<Scene, SerializeError> {
    if !document.is_object() {
        return Err(SerializeError::Validation("document must be a JSON object".to_owned()));
    }
    let doc = SceneDoc::deserialize(document).map_err(|e| SerializeError::Validation(e.to_string()))?;

    let mut scene = Scene::new(doc.name);
    for (i, layer) in doc.layers.into_iter().enumerate() {
        let field = format!("layers[{i}]");
        let layer = build_layer(layer, &field)?;
        scene.add_layer(layer).map_err(|e| invalid(&field, e))?;
    }

    let mut seen = HashSet::new();
    for (i, entity) in doc.entities.into_iter().enumerate() {
        let field = format!("entities[{i}]");
        let entity = build_entity(entity, &field)?;
        if !seen.insert(entity.id()) {
            return Err(invalid(&field, format!("duplicate entity id {}", entity.id())));
        }
        scene.add_entity(entity).map_err(|e| invalid(&field, e))?;
    }

    for (i, tilemap) in doc.tilemaps.into_iter().enumerate() {
        let field = format!("tilemaps[{i}]");
        let tilemap = build_tilemap(tilemap, &field)?;
        scene.add_tilemap(tilemap).map_err(|e| invalid(&field, e))?;
    }
    Ok(scene)
}

// =============================================================================
// TEXT AND FILES
// =============================================================================

/// Pretty-printed document text with 4-space indentation.
///
/// # Errors
///
/// Same as [`serialize`].
pub fn to_json_string(scene: &Scene) -> Result<String, SerializeError> {
    let document = serialize(scene)?;
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(DOCUMENT_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut ser).map_err(|e| SerializeError::InvalidScene(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| SerializeError::InvalidScene(e.to_string()))
}

/// # Errors
///
/// Returns [`SerializeError::Malformed`] if `text` isn't JSON, otherwise the
/// errors of [`deserialize`].
pub fn from_json_str(text: &str) -> Result<Scene, SerializeError> {
    let document: Value = serde_json::from_str(text).map_err(|e| SerializeError::Malformed(e.to_string()))?;
    deserialize(&document)
}

/// Write `scene` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`SerializeError::FileNotFound`] if the parent directory doesn't
/// exist, [`SerializeError::PermissionDenied`] if the OS refuses the write,
/// [`SerializeError::Io`] for other write failures, or the errors of
/// [`serialize`].
pub fn save_to_file(scene: &Scene, path: impl AsRef<Path>) -> Result<(), SerializeError> {
    let path = path.as_ref();
    let text = to_json_string(scene)?;
    fs::write(path, text).map_err(|e| io_error(path, e))
}

/// Write `scene` to a new file at `path`, refusing to replace an existing one.
///
/// # Errors
///
/// Returns [`SerializeError::AlreadyExists`] if `path` exists, otherwise the
/// errors of [`save_to_file`].
pub fn create_file(scene: &Scene, path: impl AsRef<Path>) -> Result<(), SerializeError> {
    let path = path.as_ref();
    let text = to_json_string(scene)?;
    let mut file = OpenOptions::new().write(true).create_new(true).open(path).map_err(|e| io_error(path, e))?;
    file.write_all(text.as_bytes()).map_err(|e| io_error(path, e))
}

/// Read a scene file written by [`save_to_file`].
///
/// # Errors
///
/// Returns [`SerializeError::FileNotFound`], [`SerializeError::PermissionDenied`]
/// or [`SerializeError::Io`] when the file can't be read,
/// [`SerializeError::Malformed`] when it isn't UTF-8 JSON, and the errors of
/// [`deserialize`] when it is JSON but not a valid scene.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Scene, SerializeError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    let document: Value = serde_json::from_slice(&bytes)
        .map_err(|e| SerializeError::Malformed(format!("{}: {e}", path.display())))?;
    deserialize(&document)
}
