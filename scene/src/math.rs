//! Scalar helpers used by tools and the camera.

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;

use crate::geom::{GeometryError, Point};

/// Clamp `value` into `[min, max]`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidRange`] if `min > max`.
pub fn clamp(value: f64, min: f64, max: f64) -> Result<f64, GeometryError> {
    if min > max {
        return Err(GeometryError::InvalidRange { min, max });
    }
    Ok(value.max(min).min(max))
}

/// Linear interpolation from `a` to `b`.
///
/// # Errors
///
/// Returns [`GeometryError::InterpolationFactor`] if `t` is outside `[0, 1]`.
pub fn lerp(a: f64, b: f64, t: f64) -> Result<f64, GeometryError> {
    if !(0.0..=1.0).contains(&t) {
        return Err(GeometryError::InterpolationFactor(t));
    }
    Ok(a + (b - a) * t)
}

/// Snap `value` to the nearest multiple of `grid_size`. Halves round away from zero.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGridSize`] if `grid_size` is zero, negative, or NaN.
pub fn snap_to_grid(value: f64, grid_size: f64) -> Result<f64, GeometryError> {
    if grid_size.is_nan() || grid_size <= 0.0 {
        return Err(GeometryError::InvalidGridSize(grid_size));
    }
    Ok((value / grid_size).round() * grid_size)
}

/// Snap both coordinates of `point` to the grid.
///
/// # Errors
///
/// Same as [`snap_to_grid`].
pub fn snap_point(point: Point, grid_size: f64) -> Result<Point, GeometryError> {
    Ok(Point::new(snap_to_grid(point.x, grid_size)?, snap_to_grid(point.y, grid_size)?))
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}
