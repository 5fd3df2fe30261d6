#![allow(clippy::float_cmp)]

use super::*;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, w, h).unwrap()
}

// --- construction ---

#[test]
fn rect_new_rejects_negative_width() {
    let err = Rect::new(0.0, 0.0, -1.0, 10.0).unwrap_err();
    assert!(matches!(err, GeometryError::NegativeSize { .. }));
}

#[test]
fn rect_new_rejects_negative_height() {
    assert!(Rect::new(0.0, 0.0, 10.0, -0.5).is_err());
}

#[test]
fn rect_new_rejects_nan() {
    assert!(Rect::new(0.0, 0.0, f64::NAN, 1.0).is_err());
}

#[test]
fn rect_new_allows_zero_size() {
    let r = rect(3.0, 4.0, 0.0, 0.0);
    assert_eq!(r.width(), 0.0);
    assert_eq!(r.height(), 0.0);
}

#[test]
fn rect_from_corners_normalizes_order() {
    let r = Rect::from_corners(Point::new(10.0, 20.0), Point::new(0.0, 5.0));
    assert_eq!(r, rect(0.0, 5.0, 10.0, 15.0));
}

#[test]
fn size_new_rejects_negative() {
    assert!(Size::new(-1.0, 1.0).is_err());
    assert_eq!(Size::new(2.0, 3.0).unwrap(), Size { width: 2.0, height: 3.0 });
}

#[test]
fn size_new_rejects_non_finite() {
    assert!(matches!(Size::new(f64::INFINITY, 1.0), Err(GeometryError::NegativeSize { .. })));
    assert!(Size::new(1.0, f64::NAN).is_err());
}

#[test]
fn size_accessors() {
    let size = Size::new(4.0, 0.5).unwrap();
    assert_eq!((size.width(), size.height()), (4.0, 0.5));
}

#[test]
fn size_default_is_unit() {
    assert_eq!(Size::default(), Size { width: 1.0, height: 1.0 });
}

// --- containment ---

#[test]
fn contains_interior_point() {
    assert!(rect(0.0, 0.0, 10.0, 10.0).contains(Point::new(5.0, 5.0)));
}

#[test]
fn contains_is_inclusive_on_edges() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
}

#[test]
fn contains_rejects_outside_point() {
    assert!(!rect(0.0, 0.0, 10.0, 10.0).contains(Point::new(10.1, 5.0)));
}

// --- intersection ---

#[test]
fn overlapping_rects_intersect() {
    assert!(rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(5.0, 5.0, 10.0, 10.0)));
}

#[test]
fn distant_rects_do_not_intersect() {
    assert!(!rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(20.0, 20.0, 5.0, 5.0)));
}

#[test]
fn touching_rects_do_not_intersect() {
    assert!(!rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(10.0, 0.0, 5.0, 5.0)));
}

#[test]
fn intersection_returns_overlap() {
    let overlap = rect(0.0, 0.0, 10.0, 10.0).intersection(&rect(5.0, 5.0, 10.0, 10.0));
    assert_eq!(overlap, Some(rect(5.0, 5.0, 5.0, 5.0)));
}

#[test]
fn intersection_none_when_disjoint() {
    assert_eq!(rect(0.0, 0.0, 1.0, 1.0).intersection(&rect(5.0, 5.0, 1.0, 1.0)), None);
}

#[test]
fn union_encloses_both() {
    let u = rect(0.0, 0.0, 10.0, 10.0).union(&rect(20.0, 5.0, 5.0, 20.0));
    assert_eq!(u, rect(0.0, 0.0, 25.0, 25.0));
}

// --- inflate / deflate ---

#[test]
fn inflate_grows_symmetrically() {
    let mut r = rect(10.0, 10.0, 10.0, 10.0);
    r.inflate(2.0, 3.0).unwrap();
    assert_eq!(r, rect(8.0, 7.0, 14.0, 16.0));
}

#[test]
fn deflate_shrinks_symmetrically() {
    let mut r = rect(0.0, 0.0, 10.0, 10.0);
    r.deflate(2.0, 1.0).unwrap();
    assert_eq!(r, rect(2.0, 1.0, 6.0, 8.0));
}

#[test]
fn deflate_past_zero_fails_and_leaves_rect_unchanged() {
    let mut r = rect(0.0, 0.0, 10.0, 10.0);
    let err = r.deflate(6.0, 0.0).unwrap_err();
    assert!(matches!(err, GeometryError::NegativeSize { .. }));
    assert_eq!(r, rect(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn deflate_to_exactly_zero_is_allowed() {
    let mut r = rect(0.0, 0.0, 10.0, 4.0);
    r.deflate(5.0, 2.0).unwrap();
    assert_eq!(r.size(), Size { width: 0.0, height: 0.0 });
    assert_eq!(r.center(), Point::new(5.0, 2.0));
}
