//! Segment intersection primitive.
//!
//! `segment_contact` classifies how two closed segments meet. It knows nothing
//! about polygons: adjacency rules (shared vertices between consecutive edges)
//! are applied by the caller, see `polygon::simple`.
//!
//! Method
//! - General position: orientation signs (2D cross products) of each endpoint
//!   against the other segment's supporting line.
//! - All four points collinear: project onto the dominant axis and intersect
//!   the two closed intervals.
//!
//! Predicates are exact float comparisons; no tolerance is applied.

use serde::{Deserialize, Serialize};

use crate::coords::Point;

/// Ordered pair of points. Ephemeral; built on the fly from ring vertices.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Contact classification against `other`; see `segment_contact`.
    #[inline]
    pub fn contact(&self, other: &Segment) -> SegmentContact {
        segment_contact(self, other)
    }
}

/// Closed 1D interval `[lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// Interval spanned by two values, in either order.
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.hi - self.lo
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.lo <= v && v <= self.hi
    }

    /// Closed intersection; a single shared end value yields a zero-length interval.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        (lo <= hi).then_some(Interval { lo, hi })
    }
}

/// How two segments meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentContact {
    /// No common point.
    Disjoint,
    /// Interiors cross at exactly one point.
    Crossing,
    /// A single common point involving at least one endpoint
    /// (shared endpoints, T-junctions, collinear end-to-end contact).
    Touching,
    /// Collinear with a common stretch of positive length.
    CollinearOverlap,
}

impl SegmentContact {
    #[inline]
    pub fn is_contact(self) -> bool {
        self != SegmentContact::Disjoint
    }
}

/// Classify the contact between two closed segments.
pub fn segment_contact(a: &Segment, b: &Segment) -> SegmentContact {
    let d1 = cross(b.start, b.end, a.start);
    let d2 = cross(b.start, b.end, a.end);
    let d3 = cross(a.start, a.end, b.start);
    let d4 = cross(a.start, a.end, b.end);

    if d1 == 0.0 && d2 == 0.0 && d3 == 0.0 && d4 == 0.0 {
        return collinear_contact(a, b);
    }
    if opposite(d1, d2) && opposite(d3, d4) {
        return SegmentContact::Crossing;
    }
    if (d1 == 0.0 && within_extent(a.start, b))
        || (d2 == 0.0 && within_extent(a.end, b))
        || (d3 == 0.0 && within_extent(b.start, a))
        || (d4 == 0.0 && within_extent(b.end, a))
    {
        return SegmentContact::Touching;
    }
    SegmentContact::Disjoint
}

/// True if the segments have any point in common.
#[inline]
pub fn segments_cross(a: &Segment, b: &Segment) -> bool {
    segment_contact(a, b).is_contact()
}

/// Orientation of `c` relative to the directed line `a → b` (twice the signed
/// triangle area). Positive for a left turn.
#[inline]
pub(crate) fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[inline]
fn opposite(u: f64, v: f64) -> bool {
    (u > 0.0 && v < 0.0) || (u < 0.0 && v > 0.0)
}

/// `p` is known to lie on the supporting line of `s`; check it is within `s`.
#[inline]
fn within_extent(p: Point, s: &Segment) -> bool {
    Interval::new(s.start.x, s.end.x).contains(p.x) && Interval::new(s.start.y, s.end.y).contains(p.y)
}

fn collinear_contact(a: &Segment, b: &Segment) -> SegmentContact {
    let xs = Interval::new(a.start.x.min(a.end.x), a.start.x.max(a.end.x));
    let xs = Interval::new(xs.lo.min(b.start.x).min(b.end.x), xs.hi.max(b.start.x).max(b.end.x));
    let ys = Interval::new(a.start.y.min(a.end.y), a.start.y.max(a.end.y));
    let ys = Interval::new(ys.lo.min(b.start.y).min(b.end.y), ys.hi.max(b.start.y).max(b.end.y));
    // Project on the axis along which the common line extends most.
    let (ia, ib) = if xs.length() >= ys.length() {
        (Interval::new(a.start.x, a.end.x), Interval::new(b.start.x, b.end.x))
    } else {
        (Interval::new(a.start.y, a.end.y), Interval::new(b.start.y, b.end.y))
    };
    match ia.intersection(&ib) {
        None => SegmentContact::Disjoint,
        Some(common) if common.length() > 0.0 => SegmentContact::CollinearOverlap,
        Some(_) => SegmentContact::Touching,
    }
}
