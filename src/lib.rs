//! Hyperview - tesseract projection
//!
//! Headless driver around the 4D projection kernel: layered configuration,
//! auto-rotation, and per-frame projection of the tesseract into 3D.

pub mod config;
pub mod systems;

pub use hyperview_math as math;
pub use hyperview_projection as projection;
