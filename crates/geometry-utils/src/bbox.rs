//! Axis-aligned bounding boxes with null and infinite sentinels.
//!
//! A box is conceptually the 2×2 matrix `[[min_x, min_y], [max_x, max_y]]`.
//! Two sentinel states are carried as tagged variants instead of magic values:
//! - null: no extent yet. Reports NaN for every component; merging a box
//!   into it yields that box; it overlaps only the infinite box and contains
//!   nothing.
//! - infinite: the whole plane, `(-∞, -∞)..(+∞, +∞)`. Overlaps and contains
//!   everything and absorbs any box on merge.
//!
//! The tagged state is private: every box comes out of `from_corners`,
//! `from_points`, `from_boxes` (or the sentinel constructors), and decoding
//! goes through `from_corners` as well. Corner pairs that spell out a
//! sentinel (all NaN, or the full infinite extent) are normalized to it, so
//! equality stays structural.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use crate::cfg::BOX_COMPONENTS;
use crate::coords::Point;
use crate::error::{GeomError, Result};

/// Tagged state behind `BoundingBox`; also its serialized form.
///
/// Invariant for `Extent`: `min.x <= max.x` and `min.y <= max.y`, no NaN
/// component, not the full plane. Zero-area extents are valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
enum Kind {
    #[default]
    Null,
    Infinite,
    Extent { min: Point, max: Point },
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Kind", into = "Kind")]
pub struct BoundingBox(Kind);

impl TryFrom<Kind> for BoundingBox {
    type Error = GeomError;

    fn try_from(kind: Kind) -> Result<Self> {
        match kind {
            Kind::Null => Ok(BoundingBox::null()),
            Kind::Infinite => Ok(BoundingBox::infinite()),
            Kind::Extent { min, max } => BoundingBox::from_corners(min, max),
        }
    }
}

impl From<BoundingBox> for Kind {
    fn from(b: BoundingBox) -> Self {
        b.0
    }
}

impl BoundingBox {
    /// The null sentinel.
    #[inline]
    pub fn null() -> Self {
        BoundingBox(Kind::Null)
    }

    /// The infinite sentinel.
    #[inline]
    pub fn infinite() -> Self {
        BoundingBox(Kind::Infinite)
    }

    /// Box from explicit corners.
    ///
    /// Fails with `InvalidBounds` when a minimum exceeds its maximum, or when
    /// only some components are NaN. All-NaN corners give the null box.
    pub fn from_corners(min: Point, max: Point) -> Result<Self> {
        if [min.x, min.y, max.x, max.y].iter().all(|v| v.is_nan()) {
            return Ok(BoundingBox::null());
        }
        if !is_valid_bounds(min, max) {
            return Err(GeomError::InvalidBounds { min, max });
        }
        Ok(Self::from_extent(min, max))
    }

    /// Smallest box holding every point. A single point gives a zero-area box.
    ///
    /// Points with a NaN coordinate carry no position and are skipped; if no
    /// point is left the result is the null box. `EmptyInput` only for an
    /// empty slice.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(GeomError::EmptyInput);
        }
        let mut valid = points.iter().filter(|p| !(p.x.is_nan() || p.y.is_nan()));
        let Some(first) = valid.next() else {
            return Ok(BoundingBox::null());
        };
        let (min, max) = valid.fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Ok(Self::from_extent(min, max))
    }

    /// Union of many boxes. Null boxes are skipped; an infinite box absorbs.
    pub fn from_boxes(boxes: &[BoundingBox]) -> Result<Self> {
        if boxes.is_empty() {
            return Err(GeomError::EmptyInput);
        }
        let mut out = BoundingBox::null();
        for b in boxes {
            out.merge(b);
        }
        Ok(out)
    }

    /// Box from the matrix layout `[[min_x, min_y], [max_x, max_y]]`.
    pub fn from_matrix(m: &Matrix2<f64>) -> Result<Self> {
        Self::from_corners(
            Vector2::new(m[(0, 0)], m[(0, 1)]),
            Vector2::new(m[(1, 0)], m[(1, 1)]),
        )
    }

    /// Box from a flat `[min_x, min_y, max_x, max_y]`.
    pub fn from_slice(data: &[f64]) -> Result<Self> {
        match data {
            [x0, y0, x1, y1] => Self::from_corners(Vector2::new(*x0, *y0), Vector2::new(*x1, *y1)),
            _ => Err(GeomError::shape(
                "4 values [min_x, min_y, max_x, max_y]",
                format!("{} values (need {BOX_COMPONENTS})", data.len()),
            )),
        }
    }

    /// Matrix layout `[[min_x, min_y], [max_x, max_y]]` (NaN for null, ±∞ for infinite).
    pub fn as_matrix(&self) -> Matrix2<f64> {
        let (lo, hi) = (self.min(), self.max());
        Matrix2::new(lo.x, lo.y, hi.x, hi.y)
    }

    /// Assumes corners already validated; collapses the full plane to infinite.
    fn from_extent(min: Point, max: Point) -> Self {
        if min.x == f64::NEG_INFINITY
            && min.y == f64::NEG_INFINITY
            && max.x == f64::INFINITY
            && max.y == f64::INFINITY
        {
            BoundingBox(Kind::Infinite)
        } else {
            BoundingBox(Kind::Extent { min, max })
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.0, Kind::Null)
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self.0, Kind::Infinite)
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> Point {
        match self.0 {
            Kind::Null => Vector2::new(f64::NAN, f64::NAN),
            Kind::Infinite => Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            Kind::Extent { min, .. } => min,
        }
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> Point {
        match self.0 {
            Kind::Null => Vector2::new(f64::NAN, f64::NAN),
            Kind::Infinite => Vector2::new(f64::INFINITY, f64::INFINITY),
            Kind::Extent { max, .. } => max,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.min().x
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.max().x
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.min().y
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.max().y
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.top() - self.bottom()
    }

    /// `(min + max) / 2` componentwise (NaN for both sentinels).
    #[inline]
    pub fn center(&self) -> Point {
        (self.min() + self.max()) / 2.0
    }

    /// Closed rectangles intersect (touching counts); always true against the
    /// infinite box; never true between a null box and a non-infinite box.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        match (self.0, other.0) {
            (Kind::Infinite, _) | (_, Kind::Infinite) => true,
            (Kind::Null, _) | (_, Kind::Null) => false,
            (Kind::Extent { min: a0, max: a1 }, Kind::Extent { min: b0, max: b1 }) => {
                a1.x >= b0.x && a0.x <= b1.x && a1.y >= b0.y && a0.y <= b1.y
            }
        }
    }

    /// `other` lies entirely inside `self` (boundary inclusive).
    pub fn contains(&self, other: &BoundingBox) -> bool {
        match (self.0, other.0) {
            (Kind::Infinite, _) => true,
            (Kind::Null, _) => false,
            (Kind::Extent { .. }, Kind::Null | Kind::Infinite) => false,
            (Kind::Extent { min: a0, max: a1 }, Kind::Extent { min: b0, max: b1 }) => {
                b0.x >= a0.x && b1.x <= a1.x && b0.y >= a0.y && b1.y <= a1.y
            }
        }
    }

    /// Point inside or on the border.
    pub fn contains_point(&self, p: Point) -> bool {
        match self.0 {
            Kind::Null => false,
            Kind::Infinite => !(p.x.is_nan() || p.y.is_nan()),
            Kind::Extent { min, max } => {
                p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
            }
        }
    }

    /// Grow `self` to cover `other`.
    pub fn merge(&mut self, other: &BoundingBox) {
        *self = match (self.0, other.0) {
            (Kind::Null, _) => *other,
            (_, Kind::Null) => *self,
            (Kind::Infinite, _) | (_, Kind::Infinite) => BoundingBox::infinite(),
            (Kind::Extent { min: a0, max: a1 }, Kind::Extent { min: b0, max: b1 }) => {
                Self::from_extent(a0.inf(&b0), a1.sup(&b1))
            }
        };
    }

    /// Non-mutating `merge`.
    #[inline]
    pub fn merged(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        out.merge(other);
        out
    }

    /// Corners starting at the min corner:
    /// `(min_x, min_y), (min_x, max_y), (max_x, max_y), (max_x, min_y)`.
    /// Clockwise with the y axis pointing up.
    pub fn corners(&self) -> [Point; 4] {
        let (lo, hi) = (self.min(), self.max());
        [
            Vector2::new(lo.x, lo.y),
            Vector2::new(lo.x, hi.y),
            Vector2::new(hi.x, hi.y),
            Vector2::new(hi.x, lo.y),
        ]
    }
}

/// True if `min <= max` componentwise (zero size allowed, NaN rejected).
#[inline]
pub fn is_valid_bounds(min: Point, max: Point) -> bool {
    min.x <= max.x && min.y <= max.y
}
