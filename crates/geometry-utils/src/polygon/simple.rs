//! Simple-polygon test: does the ring's boundary touch or cross itself?
//!
//! Pairwise scan over the edges of the closed ring (`O(n²)` segment tests).
//! With `n` the closed-ring length and edges `e_i = (v_i, v_{i+1})`, each pair
//! `0 <= i < j < n - 1` is handled as:
//! - `j == i + 1` (consecutive edges sharing `v_{i+1}`): fails only when the
//!   pair folds back onto itself, i.e. `v_i == v_{i+2}`.
//! - `i == 0 && j == n - 2` (first and last edge, sharing the closing vertex):
//!   skipped.
//! - otherwise: fails on any contact reported by `segment_contact`.
//!
//! Known limitation: a ring that visits the same point twice without folding
//! an edge (e.g. a repeated vertex `[a, b, b, c, d]`) makes two non-adjacent
//! edges share that point, which counts as contact, so the ring is reported
//! as not simple.
//!
//! The segment primitive is kept separate so a sweep-line scan can replace
//! the pair loop without touching the adjacency rules above.

use crate::coords::{check_ring, Point};
use crate::error::Result;
use crate::segment::{segment_contact, Segment};

/// True if no two edges of the ring touch or cross (adjacency excepted).
pub fn polygon_is_simple(verts: &[Point]) -> Result<bool> {
    Ok(first_self_intersection(verts)?.is_none())
}

/// First failing edge pair `(i, j)`, indices into the closed ring's edges.
pub fn first_self_intersection(verts: &[Point]) -> Result<Option<(usize, usize)>> {
    check_ring(verts)?;
    let mut ring = verts.to_vec();
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }
    let n = ring.len();
    let edge = |k: usize| Segment::new(ring[k], ring[k + 1]);

    for i in 0..n - 1 {
        let e_i = edge(i);
        for j in (i + 1)..(n - 1) {
            if j == i + 1 {
                if ring[i] == ring[i + 2] {
                    tracing::debug!(i, j, "consecutive edges fold back on each other");
                    return Ok(Some((i, j)));
                }
                continue;
            }
            if i == 0 && j == n - 2 {
                continue;
            }
            let contact = segment_contact(&e_i, &edge(j));
            if contact.is_contact() {
                tracing::debug!(i, j, ?contact, "non-adjacent edges meet");
                return Ok(Some((i, j)));
            }
        }
    }
    Ok(None)
}
