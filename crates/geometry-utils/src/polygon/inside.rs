//! Point-in-polygon by ray casting (even-odd rule).
//!
//! A horizontal ray from the query point toward `+x` toggles the inside flag
//! at every edge it crosses. Edge `(p, q)` counts for query `(x, y)` iff
//! - `min(p.y, q.y) < y <= max(p.y, q.y)` (lower bound exclusive, upper
//!   inclusive, so a vertex shared by two edges is counted once), and
//! - the edge's x-intercept at height `y` is strictly greater than `x`
//!   (a vertical edge uses its own x).
//!
//! Horizontal and zero-length edges never count. Points exactly on the
//! boundary are classified by these rules rather than by the continuous
//! definition: on an axis-aligned square the left and top edges read as
//! inside, the right and bottom edges as outside. Other libraries may pick
//! differently.

use crate::coords::{check_ring, open_ring, Point};
use crate::error::Result;

/// Whether the ray from `p` toward `+x` crosses the edge `(a, b)`.
#[inline]
fn ray_crosses(a: Point, b: Point, p: Point) -> bool {
    let (lo, hi) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
    if !(lo < p.y && p.y <= hi) {
        return false;
    }
    // lo < hi here, so the edge is not horizontal.
    let x_cross = if a.x == b.x {
        a.x
    } else {
        a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y)
    };
    x_cross > p.x
}

/// Classify one point against a ring of at least 3 vertices.
pub fn polygon_inside(verts: &[Point], p: Point) -> Result<bool> {
    check_ring(verts)?;
    let ring = open_ring(verts);
    let n = ring.len();
    let mut inside = false;
    for i in 0..n {
        if ray_crosses(ring[i], ring[(i + 1) % n], p) {
            inside = !inside;
        }
    }
    Ok(inside)
}

/// Classify many points; same answers as calling `polygon_inside` per point.
///
/// The edge loop is outermost so the inner loop streams over the queries.
pub fn polygon_inside_many(verts: &[Point], points: &[Point]) -> Result<Vec<bool>> {
    check_ring(verts)?;
    let ring = open_ring(verts);
    let n = ring.len();
    let mut inside = vec![false; points.len()];
    for i in 0..n {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        if a.y == b.y {
            continue;
        }
        for (flag, p) in inside.iter_mut().zip(points) {
            if ray_crosses(a, b, *p) {
                *flag = !*flag;
            }
        }
    }
    Ok(inside)
}
