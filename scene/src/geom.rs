//! Plain geometric value types: points, sizes, and axis-aligned rectangles.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorClass, ErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("width and height must be finite and non-negative (got {width} x {height})")]
    NegativeSize { width: f64, height: f64 },
    #[error("min must be less than or equal to max (got min {min}, max {max})")]
    InvalidRange { min: f64, max: f64 },
    #[error("interpolation factor must be within [0, 1] (got {0})")]
    InterpolationFactor(f64),
    #[error("grid size must be positive (got {0})")]
    InvalidGridSize(f64),
}

impl ErrorCode for GeometryError {
    fn class(&self) -> ErrorClass {
        ErrorClass::Validation
    }
}

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Non-negative extent. Only [`Size::new`] and `Default` build one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeSize`] if either dimension is negative or not finite.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        check_dimensions(width, height)?;
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Size {
    fn default() -> Self {
        Self { width: 1.0, height: 1.0 }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// Width and height are never negative; every constructor and mutator that
/// could break that returns an error instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

fn check_dimensions(width: f64, height: f64) -> Result<(), GeometryError> {
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(GeometryError::NegativeSize { width, height });
    }
    Ok(())
}

impl Rect {
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeSize`] if `width` or `height` is negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        check_dimensions(width, height)?;
        Ok(Self { x, y, width, height })
    }

    /// Rectangle spanning two corners given in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self { x: left, y: top, width: (a.x - b.x).abs(), height: (a.y - b.y).abs() }
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
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `point` lies inside or on the edge of the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x && point.x <= self.right() && self.y <= point.y && point.y <= self.bottom()
    }

    /// Whether the two rectangles overlap. Rectangles that only share an edge don't.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x && self.y < other.bottom() && self.bottom() > other.y
    }

    /// The overlapping region, or `None` when the rectangles don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Some(Rect {
            x,
            y,
            width: self.right().min(other.right()) - x,
            height: self.bottom().min(other.bottom()) - y,
        })
    }

    /// Smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    /// Grow by `dx` on the left and right and by `dy` on the top and bottom.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeSize`] if a negative delta would shrink a
    /// dimension below zero. The rectangle is unchanged on error.
    pub fn inflate(&mut self, dx: f64, dy: f64) -> Result<(), GeometryError> {
        let width = self.width + 2.0 * dx;
        let height = self.height + 2.0 * dy;
        check_dimensions(width, height)?;
        self.x -= dx;
        self.y -= dy;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Shrink by `dx` on the left and right and by `dy` on the top and bottom.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeSize`] if the result would have a negative
    /// dimension. The rectangle is unchanged on error.
    pub fn deflate(&mut self, dx: f64, dy: f64) -> Result<(), GeometryError> {
        self.inflate(-dx, -dy)
    }
}
