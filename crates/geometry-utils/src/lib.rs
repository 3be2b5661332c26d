//! Planar geometry on flat arrays of 2D points.
//!
//! Purpose
//! - Bounding-box algebra with null/infinite sentinels (`BoundingBox`).
//! - Polygon rings as plain point slices: point-in-polygon, signed area,
//!   winding, centroid and a simple-polygon (self-intersection) check.
//! - A small `Polygon` container carrying metadata next to its vertices.
//!
//! Conventions
//! - Points and vectors are `nalgebra::Vector2<f64>` (`Point`, `Vector`).
//! - A ring may or may not repeat its first vertex at the end; every routine
//!   treats both forms the same (the closing edge is implicit).
//! - Everything is a pure function of its inputs. The only in-place mutation
//!   is `BoundingBox::merge`.
//! - Failures come back as `GeomError`; nothing panics on bad input.

pub mod api;
pub mod bbox;
pub mod cfg;
pub mod coords;
pub mod error;
pub mod polygon;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::*;
pub use bbox::BoundingBox;
pub use coords::{point, vector, Point, Vector};
pub use error::{GeomError, Result};
pub use polygon::{Metadata, Polygon};
pub use segment::{Interval, Segment, SegmentContact};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::*;
    pub use crate::bbox::BoundingBox;
    pub use crate::coords::{point, points_from_flat, points_from_rows, vector, Point, Vector};
    pub use crate::error::{GeomError, Result};
    pub use crate::polygon::{Metadata, Polygon};
    pub use crate::segment::{segment_contact, segments_cross, Segment, SegmentContact};
    pub use nalgebra::{vector, Vector2};
}
