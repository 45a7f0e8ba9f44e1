//! 4D view basis and projection
//!
//! Turns rotated 4D points into 3D points for rendering:
//!
//! - [`ViewConfig`] / [`ViewBasis`] - eye, look-at, up and over vectors, and the
//!   orthonormal 4D frame built from them
//! - [`Projector`] - parallel or perspective projection of a point slice
//! - [`ProjectionError`] - degenerate basis, degenerate point, or bad parameter
//!
//! All operations are pure; every call allocates its own output.

pub mod error;
pub mod view;
pub mod projector;

pub use error::{BasisAxis, InvalidParameter, ProjectionError};
pub use view::{ViewBasis, ViewConfig, DEGENERATE_EPSILON};
pub use projector::{focal_factor, project_parallel, project_perspective, ProjectionMode, Projector};
