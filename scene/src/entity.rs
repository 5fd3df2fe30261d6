//! Entities placed in a scene, each with an open-ended property bag.
//!
//! Properties are kept as a JSON map so tools and the inspector can store
//! whatever per-kind data they need (sprite name, spawn rules, tags) without
//! the core knowing about it. Typed access lives with the caller.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::geom::{Point, Rect, Size};

/// Unique identifier for an entity within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A placed object in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    /// Display name shown in the hierarchy panel.
    pub name: String,
    /// World-space position of the entity's anchor.
    pub position: Point,
    /// World-space extent, used for picking and selection outlines.
    pub size: Size,
    properties: Map<String, Value>,
}

impl Entity {
    /// Create an entity with a fresh id, unit size, and no properties.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self::with_id(EntityId::new(), name, position)
    }

    /// Create an entity with a known id (used when loading documents).
    #[must_use]
    pub fn with_id(id: EntityId, name: impl Into<String>, position: Point) -> Self {
        Self { id, name: name.into(), position, size: Size::default(), properties: Map::new() }
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn update_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Insert or overwrite a property, returning the previous value.
    pub fn add_property(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(key.into(), value)
    }

    #[must_use]
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.properties.remove(key)
    }

    #[must_use]
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Bounding box in world space, anchored at `position`.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(
            self.position,
            Point::new(self.position.x + self.size.width(), self.position.y + self.size.height()),
        )
    }
}
