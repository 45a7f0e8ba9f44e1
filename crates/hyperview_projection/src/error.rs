//! Projection error types
//!
//! Every degenerate configuration is reported as an error before any output
//! is produced, so callers never receive NaN or infinite coordinates.

use std::fmt;

/// Basis vector whose construction collapsed to zero length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisAxis {
    /// Gaze direction: `look_at` coincides with `eye`
    Wd,
    /// First complement axis: `up` lies in the span of `over` and the gaze
    Wa,
    /// Second complement axis: `over` is degenerate against the gaze and `Wa`
    Wb,
}

impl fmt::Display for BasisAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisAxis::Wd => write!(f, "look-at point and eye position are the same"),
            BasisAxis::Wa => write!(f, "up vector is parallel to the over/view plane"),
            BasisAxis::Wb => write!(f, "over vector is parallel to the view basis"),
        }
    }
}

/// Rejected projection parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidParameter {
    /// Parallel projection radius must be finite and > 0
    Radius(f32),
    /// Perspective viewing angle must be in (0°, 180°)
    ViewingAngle(f32),
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidParameter::Radius(r) => {
                write!(f, "radius must be greater than 0, got {}", r)
            }
            InvalidParameter::ViewingAngle(a) => {
                write!(f, "viewing angle must be between 0 and 180 degrees (exclusive), got {}", a)
            }
        }
    }
}

/// Error type for view-basis construction and projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// A view-basis vector had (numerically) zero norm
    DegenerateBasis(BasisAxis),
    /// A point lies on the hyperplane through the eye orthogonal to the gaze
    DegenerateProjection {
        /// Index of the offending point in the input
        index: usize,
        /// Its depth along the gaze axis
        depth: f32,
    },
    /// Mode parameter out of range
    InvalidParameter(InvalidParameter),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::DegenerateBasis(axis) => {
                write!(f, "Degenerate view basis ({:?}): {}", axis, axis)
            }
            ProjectionError::DegenerateProjection { index, depth } => {
                write!(f, "Degenerate projection: point {} has depth {} along the view axis", index, depth)
            }
            ProjectionError::InvalidParameter(param) => {
                write!(f, "Invalid projection parameter: {}", param)
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

impl From<InvalidParameter> for ProjectionError {
    fn from(param: InvalidParameter) -> Self {
        ProjectionError::InvalidParameter(param)
    }
}
