#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use crate::error::{ErrorClass, ErrorCode};
use crate::geom::{Point, Rect, Size};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("invalid zoom range: min {min} must be positive and <= max {max}")]
    InvalidZoomRange { min: f64, max: f64 },
    #[error("zoom {zoom} outside [{min}, {max}]")]
    ZoomOutOfRange { zoom: f64, min: f64, max: f64 },
    #[error("invalid bounds: min must not exceed max ({0:?})")]
    InvalidBounds(CameraBounds),
    #[error("position ({x}, {y}) outside camera bounds")]
    OutOfBounds { x: f64, y: f64 },
    #[error("non-finite camera coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

impl ErrorCode for CameraError {
    fn class(&self) -> ErrorClass {
        match self {
            Self::OutOfBounds { .. } => ErrorClass::OutOfBounds,
            Self::InvalidZoomRange { .. } | Self::ZoomOutOfRange { .. } | Self::InvalidBounds(_) | Self::NonFinite { .. } => {
                ErrorClass::Validation
            }
        }
    }
}

/// Rectangle the camera's focal point must stay inside, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl CameraBounds {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }
}

/// Pan/zoom view over the scene.
///
/// `x` / `y` is the world-space point drawn at the screen origin.
/// `zoom` is a scale factor (1.0 = one world unit per pixel).
///
/// Every mutator is all-or-nothing: on error the camera is unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    x: f64,
    y: f64,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    bounds: Option<CameraBounds>,
}

impl Default for Camera {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, zoom: 1.0, min_zoom: DEFAULT_MIN_ZOOM, max_zoom: DEFAULT_MAX_ZOOM, bounds: None }
    }
}

impl Camera {
    /// Camera at the origin with the given zoom limits. The initial zoom is 1.0
    /// clamped into `[min_zoom, max_zoom]`.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidZoomRange`] unless `0 < min_zoom <= max_zoom`.
    pub fn new(min_zoom: f64, max_zoom: f64) -> Result<Self, CameraError> {
        if !(min_zoom > 0.0 && min_zoom <= max_zoom && max_zoom.is_finite()) {
            return Err(CameraError::InvalidZoomRange { min: min_zoom, max: max_zoom });
        }
        Ok(Self { x: 0.0, y: 0.0, zoom: 1.0_f64.clamp(min_zoom, max_zoom), min_zoom, max_zoom, bounds: None })
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    #[must_use]
    pub fn bounds(&self) -> Option<CameraBounds> {
        self.bounds
    }

    fn check_position(&self, x: f64, y: f64) -> Result<(), CameraError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(CameraError::NonFinite { x, y });
        }
        if let Some(bounds) = self.bounds {
            if !bounds.contains(x, y) {
                return Err(CameraError::OutOfBounds { x, y });
            }
        }
        Ok(())
    }

    /// Move the focal point by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::OutOfBounds`] if the destination leaves the bounds.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<(), CameraError> {
        self.set_position(self.x + dx, self.y + dy)
    }

    /// Move the focal point to `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::OutOfBounds`] if `(x, y)` is outside the bounds.
    pub fn set_position(&mut self, x: f64, y: f64) -> Result<(), CameraError> {
        self.check_position(x, y)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Replace the zoom factor exactly. Out-of-range values are rejected, never clamped.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::ZoomOutOfRange`] if `zoom` is outside `[min_zoom, max_zoom]` or NaN.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), CameraError> {
        if !(self.min_zoom..=self.max_zoom).contains(&zoom) {
            return Err(CameraError::ZoomOutOfRange { zoom, min: self.min_zoom, max: self.max_zoom });
        }
        self.zoom = zoom;
        Ok(())
    }

    /// Set or clear the movement bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidBounds`] if a min exceeds its max, or
    /// [`CameraError::OutOfBounds`] if the current position lies outside the new
    /// bounds. The previous bounds are kept on error.
    pub fn set_bounds(&mut self, bounds: Option<CameraBounds>) -> Result<(), CameraError> {
        if let Some(b) = bounds {
            if !b.is_valid() {
                return Err(CameraError::InvalidBounds(b));
            }
            if !b.contains(self.x, self.y) {
                return Err(CameraError::OutOfBounds { x: self.x, y: self.y });
            }
        }
        self.bounds = bounds;
        Ok(())
    }

    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn apply_transform(&self, world: Point) -> Point {
        Point {
            x: (world.x - self.x) * self.zoom,
            y: (world.y - self.y) * self.zoom,
        }
    }

    /// Convert a screen-space point to world coordinates. Inverse of [`Camera::apply_transform`].
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: screen.x / self.zoom + self.x,
            y: screen.y / self.zoom + self.y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// World-space region covered by a viewport of the given pixel size.
    #[must_use]
    pub fn visible_world_rect(&self, viewport: Size) -> Rect {
        Rect::from_corners(self.position(), self.screen_to_world(Point::new(viewport.width(), viewport.height())))
    }
}
