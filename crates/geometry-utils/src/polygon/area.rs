//! Shoelace accumulation: signed area, winding and centroid in one pass.
//!
//! For each edge `(p_i, p_{i+1})` of the ring (closing edge included, a
//! duplicated closing vertex dropped first):
//!
//! ```text
//! a_i   = x_i y_{i+1} - x_{i+1} y_i
//! 2A    = Σ a_i
//! 6A Cx = Σ (x_i + x_{i+1}) a_i
//! 6A Cy = Σ (y_i + y_{i+1}) a_i
//! ```
//!
//! `A < 0` means clockwise, `A > 0` counter-clockwise. Winding and centroid
//! are undefined for `A == 0` and fail with `GeomError::ZeroArea`.

use nalgebra::Vector2;

use crate::coords::{check_ring, open_ring, Point};
use crate::error::{GeomError, Result};

/// Running sums of the shoelace formula over one ring.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shoelace {
    /// `Σ a_i` (twice the signed area).
    pub twice_area: f64,
    /// `Σ (x_i + x_{i+1}) a_i`.
    pub cx: f64,
    /// `Σ (y_i + y_{i+1}) a_i`.
    pub cy: f64,
}

impl Shoelace {
    /// Accumulate over a ring (open or closed). No length check.
    pub fn over_ring(verts: &[Point]) -> Self {
        let ring = open_ring(verts);
        let n = ring.len();
        let mut acc = Shoelace::default();
        for i in 0..n {
            acc.add_edge(ring[i], ring[(i + 1) % n]);
        }
        acc
    }

    #[inline]
    fn add_edge(&mut self, p: Point, q: Point) {
        let a = p.x * q.y - q.x * p.y;
        self.twice_area += a;
        self.cx += (p.x + q.x) * a;
        self.cy += (p.y + q.y) * a;
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * self.twice_area
    }

    /// Clockwise flag, `ZeroArea` for a degenerate ring.
    pub fn is_clockwise(&self) -> Result<bool> {
        let a = self.signed_area();
        if a < 0.0 {
            Ok(true)
        } else if a > 0.0 {
            Ok(false)
        } else {
            tracing::debug!(signed_area = a, "winding requested on a zero-area ring");
            Err(GeomError::ZeroArea)
        }
    }

    /// Area-weighted centroid, `ZeroArea` for a degenerate ring.
    pub fn centroid(&self) -> Result<Point> {
        let a = self.signed_area();
        if a == 0.0 {
            tracing::debug!("centroid requested on a zero-area ring");
            return Err(GeomError::ZeroArea);
        }
        let denom = 6.0 * a;
        Ok(Vector2::new(self.cx / denom, self.cy / denom))
    }
}

/// Signed area: negative for clockwise rings.
pub fn polygon_signed_area(verts: &[Point]) -> Result<f64> {
    check_ring(verts)?;
    Ok(Shoelace::over_ring(verts).signed_area())
}

/// Unsigned area.
pub fn polygon_area(verts: &[Point]) -> Result<f64> {
    polygon_signed_area(verts).map(f64::abs)
}

/// Winding order: `true` for clockwise, `false` for counter-clockwise.
///
/// Only meaningful for simple rings; self-intersecting input is not checked.
pub fn polygon_rotation_is_clockwise(verts: &[Point]) -> Result<bool> {
    check_ring(verts)?;
    Shoelace::over_ring(verts).is_clockwise()
}

/// Centroid ("center of gravity") of the enclosed region.
///
/// For non-convex rings the result may fall outside the boundary.
pub fn polygon_centroid(verts: &[Point]) -> Result<Point> {
    check_ring(verts)?;
    Shoelace::over_ring(verts).centroid()
}
