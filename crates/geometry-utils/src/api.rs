//! Flat function surface over the crate's types.
//!
//! Callers that work on plain point slices and boxes (no methods, no
//! containers) import from here. Each function is a thin forward to the
//! owning module; behavior and errors are documented there.

// Ring routines
pub use crate::polygon::{
    first_self_intersection, polygon_area, polygon_centroid, polygon_inside, polygon_inside_many,
    polygon_is_simple, polygon_rotation_is_clockwise, polygon_signed_area,
};
// Point ingestion
pub use crate::coords::{points_from_flat, points_from_pairs, points_from_rows};

use crate::bbox::BoundingBox;
use crate::coords::Point;
use crate::error::Result;

/// `BoundingBox::from_corners`.
#[inline]
pub fn bounding_box_from_corners(min: Point, max: Point) -> Result<BoundingBox> {
    BoundingBox::from_corners(min, max)
}

/// `BoundingBox::from_points`.
#[inline]
pub fn bounding_box_from_points(points: &[Point]) -> Result<BoundingBox> {
    BoundingBox::from_points(points)
}

/// `BoundingBox::from_boxes`.
#[inline]
pub fn bounding_box_from_boxes(boxes: &[BoundingBox]) -> Result<BoundingBox> {
    BoundingBox::from_boxes(boxes)
}

/// Closed rectangles `a` and `b` share a point (touching counts).
#[inline]
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.overlaps(b)
}

/// `outer` holds all of `inner`.
#[inline]
pub fn contains(outer: &BoundingBox, inner: &BoundingBox) -> bool {
    outer.contains(inner)
}

/// `p` lies inside `b` or on its border.
#[inline]
pub fn contains_point(b: &BoundingBox, p: Point) -> bool {
    b.contains_point(p)
}

/// Grow `target` in place to cover `other`.
#[inline]
pub fn merge(target: &mut BoundingBox, other: &BoundingBox) {
    target.merge(other)
}
