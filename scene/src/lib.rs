//! Scene model, camera math, undo history and scene documents for the level editor.
//!
//! This crate is the editing core. It owns everything with real invariants:
//! the layer/entity/tilemap graph, the pan/zoom camera, the bounded undo log,
//! and the JSON document format used for save and load. Windowing, panels,
//! and rendering live outside and talk to the core only through the types
//! re-exported here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | `Point`, `Size`, and `Rect` value types |
//! | [`math`] | Clamp, lerp, grid snapping, and distance helpers |
//! | [`color`] | RGBA color with hex conversions |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`layer`] | Visibility/opacity-controlled z-order groups |
//! | [`entity`] | Placed entities with free-form properties |
//! | [`tilemap`] | Bounded tile grids with sparse storage |
//! | [`scene`] | Root aggregate owning layers, entities, and tilemaps |
//! | [`history`] | Fixed-capacity undo/redo log |
//! | [`action`] | Closed set of reversible scene edits |
//! | [`serializer`] | Scene document encoding and file persistence |
//! | [`error`] | Error codes and the shared error taxonomy |
//! | [`consts`] | Shared defaults (zoom limits, tile sizes, names) |

pub mod action;
pub mod camera;
pub mod color;
pub mod consts;
pub mod entity;
pub mod error;
pub mod geom;
pub mod history;
pub mod layer;
pub mod math;
pub mod scene;
pub mod serializer;
pub mod tilemap;

pub use action::EditAction;
pub use camera::{Camera, CameraBounds};
pub use entity::{Entity, EntityId};
pub use error::{ErrorClass, ErrorCode};
pub use geom::{Point, Rect, Size};
pub use history::History;
pub use layer::{Layer, LayerId};
pub use scene::{Scene, SceneError};
pub use serializer::SerializeError;
pub use tilemap::{Tile, Tilemap, TilemapId};
