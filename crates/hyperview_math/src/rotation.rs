//! Plane rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 coordinate planes: XY, YZ, ZX, XW, YW, ZW.
//!
//! The planes do not share one handedness. Each plane's sign convention is
//! fixed by [`RotationPlane::axes`]:
//!
//! | Plane | Output equations                                  |
//! |-------|---------------------------------------------------|
//! | XY    | `x' = cos·x + sin·y`, `y' = -sin·x + cos·y`       |
//! | YZ    | `y' = cos·y + sin·z`, `z' = -sin·y + cos·z`       |
//! | ZX    | `x' = cos·x - sin·z`, `z' = sin·x + cos·z`        |
//! | XW    | `x' = cos·x + sin·w`, `w' = -sin·x + cos·w`       |
//! | YW    | `y' = cos·y - sin·w`, `w' = sin·y + cos·w`        |
//! | ZW    | `z' = cos·z - sin·w`, `w' = sin·z + cos·w`        |

use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4};

/// The 6 coordinate rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane
    XY,
    /// YZ plane
    YZ,
    /// ZX plane
    ZX,
    /// XW plane
    XW,
    /// YW plane
    YW,
    /// ZW plane
    ZW,
}

impl RotationPlane {
    /// All planes, in composite multiplication order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::YZ,
        RotationPlane::ZX,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Axis pair `(p1, p2)` passed to [`mat4::plane_rotation`]
    ///
    /// A positive angle turns `p1` toward `p2`.
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (1, 0),
            RotationPlane::YZ => (2, 1),
            RotationPlane::ZX => (0, 2),
            RotationPlane::XW => (3, 0),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Rotation matrix for this plane
    ///
    /// # Arguments
    /// * `angle` - Rotation angle in radians
    pub fn matrix(self, angle: f32) -> Mat4 {
        let (p1, p2) = self.axes();
        mat4::plane_rotation(angle, p1, p2)
    }
}

/// Six plane angles in radians
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationAngles {
    pub xy: f32,
    pub yz: f32,
    pub zx: f32,
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
}

impl RotationAngles {
    pub const ZERO: Self = Self { xy: 0.0, yz: 0.0, zx: 0.0, xw: 0.0, yw: 0.0, zw: 0.0 };

    /// Angles given in radians
    pub const fn new(xy: f32, yz: f32, zx: f32, xw: f32, yw: f32, zw: f32) -> Self {
        Self { xy, yz, zx, xw, yw, zw }
    }

    /// Angles given in degrees
    pub fn from_degrees(xy: f32, yz: f32, zx: f32, xw: f32, yw: f32, zw: f32) -> Self {
        Self::new(
            xy.to_radians(),
            yz.to_radians(),
            zx.to_radians(),
            xw.to_radians(),
            yw.to_radians(),
            zw.to_radians(),
        )
    }

    /// Angle for one plane, in radians
    pub fn get(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::XY => self.xy,
            RotationPlane::YZ => self.yz,
            RotationPlane::ZX => self.zx,
            RotationPlane::XW => self.xw,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    /// Composite rotation `Mxy · Myz · Mzx · Mxw · Myw · Mzw`
    ///
    /// The order is fixed; rotations in different planes do not commute.
    pub fn to_matrix(&self) -> Mat4 {
        RotationPlane::ALL
            .iter()
            .fold(mat4::IDENTITY, |acc, &plane| mat4::mul(acc, plane.matrix(self.get(plane))))
    }
}
