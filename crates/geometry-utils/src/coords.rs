//! Points, vectors and reshaping of raw coordinate sequences.
//!
//! - `Point` and `Vector` are the same type (`Vector2<f64>`); the names only
//!   carry intent (position vs displacement).
//! - `points_from_*` turn caller data into `Vec<Point>`, failing with
//!   `GeomError::Shape` when the data is not a sequence of pairs.
//! - Ring helpers shared by the polygon routines live here too.

use nalgebra::Vector2;

use crate::cfg::MIN_RING_VERTICES;
use crate::error::{GeomError, Result};

/// A position in the plane.
pub type Point = Vector2<f64>;
/// A displacement in the plane.
pub type Vector = Vector2<f64>;

/// Build a point from its coordinates.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Build a vector from its components.
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector2::new(x, y)
}

/// Reshape `[x0, y0, x1, y1, ...]` into points. Odd lengths are rejected.
pub fn points_from_flat(coords: &[f64]) -> Result<Vec<Point>> {
    if coords.len() % 2 != 0 {
        return Err(GeomError::shape(
            "an even number of coordinates",
            format!("{} values", coords.len()),
        ));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Vector2::new(xy[0], xy[1]))
        .collect())
}

/// Reshape rows of length 2 (`[[x, y], ...]`, `Vec<Vec<f64>>`, ...) into points.
pub fn points_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Point>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| match row.as_ref() {
            [x, y] => Ok(Vector2::new(*x, *y)),
            other => Err(GeomError::shape(
                "rows of 2 coordinates",
                format!("row {i} with {} values", other.len()),
            )),
        })
        .collect()
}

/// Convert `(x, y)` tuples into points. Cannot fail; provided for symmetry.
pub fn points_from_pairs(pairs: &[(f64, f64)]) -> Vec<Point> {
    pairs.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

/// True if the ring repeats its first vertex as its last one.
#[inline]
pub(crate) fn is_closed(verts: &[Point]) -> bool {
    verts.len() > 1 && verts.first() == verts.last()
}

/// The ring without its duplicated closing vertex (if any).
#[inline]
pub(crate) fn open_ring(verts: &[Point]) -> &[Point] {
    if is_closed(verts) {
        &verts[..verts.len() - 1]
    } else {
        verts
    }
}

/// Reject rings with fewer than `MIN_RING_VERTICES` input vertices.
pub(crate) fn check_ring(verts: &[Point]) -> Result<()> {
    if verts.len() < MIN_RING_VERTICES {
        return Err(GeomError::shape(
            "a ring of at least 3 vertices",
            format!("{} vertices", verts.len()),
        ));
    }
    Ok(())
}
