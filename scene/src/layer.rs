//! Layers: named, ordered groups with visibility, lock, and opacity.

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scene::SceneError;

/// Stable handle for a layer. Identity, not structure, decides ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(Uuid);

impl LayerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A layer in a scene or an auxiliary tile layer of a tilemap.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: LayerId,
    name: String,
    visible: bool,
    locked: bool,
    opacity: f64,
}

impl Layer {
    /// Visible, unlocked, fully opaque layer with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: LayerId::new(), name: name.into(), visible: true, locked: false, opacity: 1.0 }
    }

    /// # Errors
    ///
    /// Returns [`SceneError::InvalidOpacity`] if `opacity` is outside `[0, 1]`.
    pub fn with_opacity(name: impl Into<String>, opacity: f64) -> Result<Self, SceneError> {
        let mut layer = Self::new(name);
        layer.set_opacity(opacity)?;
        Ok(layer)
    }

    #[must_use]
    pub fn id(&self) -> LayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// # Errors
    ///
    /// Returns [`SceneError::InvalidOpacity`] if `opacity` is outside `[0, 1]`
    /// (NaN included). The layer is unchanged on error.
    pub fn set_opacity(&mut self, opacity: f64) -> Result<(), SceneError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(SceneError::InvalidOpacity(opacity));
        }
        self.opacity = opacity;
        Ok(())
    }
}
