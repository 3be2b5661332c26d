//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

use crate::coords::Point;

/// Errors surfaced by box construction and polygon routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Explicit corner construction with a minimum above the maximum.
    #[error(
        "bounding box corners not aligned: min ({}, {}) exceeds max ({}, {})",
        .min.x, .min.y, .max.x, .max.y
    )]
    InvalidBounds { min: Point, max: Point },

    /// A point (or box) set was empty where at least one element is required.
    #[error("empty input: at least one element is required")]
    EmptyInput,

    /// Input could not be reshaped into the expected layout.
    #[error("shape error: expected {expected}, got {got}")]
    Shape { expected: &'static str, got: String },

    /// Rotation or centroid requested on a ring with zero signed area.
    #[error("polygon has zero area: winding and centroid are undefined")]
    ZeroArea,
}

impl GeomError {
    pub(crate) fn shape(expected: &'static str, got: impl ToString) -> Self {
        GeomError::Shape {
            expected,
            got: got.to_string(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeomError>;
