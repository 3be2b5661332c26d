//! `Polygon`: an owned ring plus free-form metadata.
//!
//! Vertices and metadata are separate fields; the metadata never takes part
//! in geometry. Equality compares both.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::coords::{self, Point, Vector};
use crate::error::Result;

use super::{area, inside, simple, thin};

/// Arbitrary per-polygon data (names, ids, styling, ...).
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Ordered vertices (traversal order) with attached metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
    #[serde(default)]
    metadata: Metadata,
}

impl Polygon {
    /// Take ownership of `points` (no copy).
    #[inline]
    pub fn new(points: Vec<Point>, metadata: Metadata) -> Self {
        Self { points, metadata }
    }

    /// Copy `points`; empty metadata.
    pub fn from_points(points: &[Point]) -> Self {
        Self::new(points.to_vec(), Metadata::new())
    }

    /// Reshape `[x0, y0, x1, y1, ...]`; odd lengths fail with `Shape`.
    pub fn from_flat(coords: &[f64]) -> Result<Self> {
        Ok(Self::new(coords::points_from_flat(coords)?, Metadata::new()))
    }

    /// Copy of `source`'s vertices; metadata defaults to `source`'s own.
    pub fn derived(source: &Polygon, metadata: Option<Metadata>) -> Self {
        Self::new(
            source.points.clone(),
            metadata.unwrap_or_else(|| source.metadata.clone()),
        )
    }

    /// Builder-style metadata replacement.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[inline]
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertex `i`, if present.
    #[inline]
    pub fn get(&self, i: usize) -> Option<Point> {
        self.points.get(i).copied()
    }

    /// Sub-range of the vertices as a new polygon carrying the same metadata.
    /// `None` if the range is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> Option<Polygon> {
        let pts = self.points.get(range)?;
        Some(Self::new(pts.to_vec(), self.metadata.clone()))
    }

    /// First vertex repeated as the last one.
    #[inline]
    pub fn is_closed(&self) -> bool {
        coords::is_closed(&self.points)
    }

    /// Bounding box of the vertices; `EmptyInput` for an empty polygon.
    pub fn bounding_box(&self) -> Result<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }

    /// Pixel-grid thinning; see `thin::thin_ring`.
    pub fn thin(&self, scale: Vector) -> Polygon {
        let kept = thin::thin_ring(&self.points, scale);
        Self::new(kept, self.metadata.clone())
    }

    pub fn signed_area(&self) -> Result<f64> {
        area::polygon_signed_area(&self.points)
    }

    pub fn area(&self) -> Result<f64> {
        area::polygon_area(&self.points)
    }

    pub fn is_clockwise(&self) -> Result<bool> {
        area::polygon_rotation_is_clockwise(&self.points)
    }

    pub fn centroid(&self) -> Result<Point> {
        area::polygon_centroid(&self.points)
    }

    pub fn contains_point(&self, p: Point) -> Result<bool> {
        inside::polygon_inside(&self.points, p)
    }

    pub fn contains_points(&self, ps: &[Point]) -> Result<Vec<bool>> {
        inside::polygon_inside_many(&self.points, ps)
    }

    pub fn is_simple(&self) -> Result<bool> {
        simple::polygon_is_simple(&self.points)
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points, Metadata::new())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon with {} points.\nmetadata: {:?}", self.len(), self.metadata)
    }
}
