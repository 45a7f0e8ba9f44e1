//! 4D Mathematics Library
//!
//! Vector, rotation and topology types for projecting a tesseract from 4D
//! into 3D.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - projected 3D point
//! - [`Mat4`] - 4x4 matrix (column-major), see [`mat4`]
//! - [`RotationPlane`] / [`RotationAngles`] - plane rotations and their composite
//! - [`cross4`] - generalized cross product of three 4D vectors
//!
//! ## Topology
//!
//! - [`tesseract`] - static vertex and face tables of the hypercube

mod vec4;
mod cross;
mod rotation;
pub mod mat4;
pub mod tesseract;

pub use vec4::{Vec4, Vec3};
pub use cross::cross4;
pub use rotation::{RotationPlane, RotationAngles};
pub use mat4::Mat4;
pub use tesseract::{TESSERACT_VERTICES, TESSERACT_CELLS};
