//! Render-driven vertex thinning.
//!
//! Scale every vertex to the target pixel grid and round it, then drop each
//! vertex whose rounded position equals its predecessor's. The surviving
//! vertices keep their original (unrounded) coordinates, so drawing the
//! thinned ring at that scale produces the same pixels as the full ring.
//!
//! - In a run of vertices that share a pixel, the first one is kept. The walk
//!   is order-sensitive: reversing the input need not reverse the output.
//! - A closed input ring (last == first) yields a closed output ring.
//! - If fewer than 2 vertices survive, the result is empty.
//!
//! Rounding is half-to-even so `2.5` and `3.5` land on different pixels
//! (`2` and `4`).

use nalgebra::Vector2;

use crate::coords::{is_closed, Point, Vector};

#[inline]
fn to_grid(p: &Point, scale: &Vector) -> Vector2<f64> {
    p.component_mul(scale).map(f64::round_ties_even)
}

/// Thin `verts` at `scale` (world units → pixels, per axis).
pub(crate) fn thin_ring(verts: &[Point], scale: Vector) -> Vec<Point> {
    let Some(first) = verts.first() else {
        return Vec::new();
    };
    let closed = is_closed(verts);
    let walk = if closed { &verts[..verts.len() - 1] } else { verts };

    let mut kept = vec![*first];
    let mut prev = to_grid(first, &scale);
    for p in &walk[1..] {
        let g = to_grid(p, &scale);
        if g != prev {
            kept.push(*p);
        }
        prev = g;
    }
    if kept.len() < 2 {
        tracing::trace!(input = verts.len(), "thinning collapsed ring");
        return Vec::new();
    }
    if closed {
        kept.push(*first);
    }
    tracing::trace!(input = verts.len(), kept = kept.len(), "thinned ring");
    kept
}
