//! Fixed constants for ring and box handling (internal).
//!
//! Policy
//! - Predicates are exact (no epsilons): equality and orientation tests use
//!   plain float comparisons. The constants below only describe shapes.

/// Smallest vertex count accepted by the ring routines (inside, area,
/// rotation, centroid, simple check). Counted on the raw input, before a
/// duplicated closing vertex is dropped.
pub(crate) const MIN_RING_VERTICES: usize = 3;

/// Number of scalars in a flat bounding box `[min_x, min_y, max_x, max_y]`.
pub(crate) const BOX_COMPONENTS: usize = 4;
