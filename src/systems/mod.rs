//! Application systems
//!
//! Frame-by-frame state around the projection kernel: rotation angles and
//! auto-rotation, and the per-frame projection driver.

mod frame;
mod rotation;

pub use frame::{FrameDriver, FrameError, MeshIndices, ProjectedFrame};
pub use rotation::{slider_value, AutoRotate, PlaneDegrees, DEFAULT_ROTATION_SPEED, MAX_STEP};
