//! Polygon rings: container, point-in-polygon, shoelace metrics, simplicity.
//!
//! Purpose
//! - Routines work on plain `&[Point]` rings so callers never have to build a
//!   container just to ask a question. `Polygon` wraps an owned ring plus
//!   metadata and forwards to the same routines.
//!
//! Ring convention
//! - Open (`[a, b, c]`) and closed (`[a, b, c, a]`) rings are equivalent; the
//!   closing edge is implicit.
//! - Ring routines require at least 3 input vertices (counted before the
//!   closing duplicate is dropped) and fail with `GeomError::Shape` otherwise.
//!
//! Code cross-refs: `segment::segment_contact`, `bbox::BoundingBox`.

mod area;
mod inside;
mod simple;
mod thin;
mod types;

pub use area::{polygon_area, polygon_centroid, polygon_rotation_is_clockwise, polygon_signed_area, Shoelace};
pub use inside::{polygon_inside, polygon_inside_many};
pub use simple::{first_self_intersection, polygon_is_simple};
pub use types::{Metadata, Polygon};

#[cfg(test)]
mod tests;
