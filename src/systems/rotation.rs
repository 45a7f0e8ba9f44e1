//! Rotation state and auto-rotation
//!
//! Angles are held in degrees, as a UI slider would present them, and are
//! converted to radians only when the composite matrix is built.

use hyperview_math::RotationAngles;

/// Default auto-rotation speed in degrees per second
pub const DEFAULT_ROTATION_SPEED: f32 = 14.0;

/// Largest time step applied in one update, in seconds
pub const MAX_STEP: f32 = 0.25;

/// Six plane angles in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneDegrees {
    pub xy: f32,
    pub yz: f32,
    pub zx: f32,
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
}

impl PlaneDegrees {
    pub fn to_radians(&self) -> RotationAngles {
        RotationAngles::from_degrees(self.xy, self.yz, self.zx, self.xw, self.yw, self.zw)
    }

    /// Slider positions in [0, 1), in XY, YZ, ZX, XW, YW, ZW order
    pub fn sliders(&self) -> [f32; 6] {
        [self.xy, self.yz, self.zx, self.xw, self.yw, self.zw].map(slider_value)
    }
}

/// Map an angle in degrees to a slider position in [0, 1)
pub fn slider_value(angle: f32) -> f32 {
    let v = angle.rem_euclid(360.0) / 360.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if v >= 1.0 { 0.0 } else { v }
}

/// Advances the XY, ZX and YW angles at a constant rate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoRotate {
    /// Degrees per second
    pub speed: f32,
}

impl Default for AutoRotate {
    fn default() -> Self {
        Self { speed: DEFAULT_ROTATION_SPEED }
    }
}

impl AutoRotate {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Advance `angles` by `speed * dt`
    ///
    /// `dt` is capped at [`MAX_STEP`] so a stalled frame does not jump the
    /// rotation; negative `dt` is treated as zero.
    pub fn step(&self, angles: &mut PlaneDegrees, dt: f32) {
        let dt = dt.clamp(0.0, MAX_STEP);
        let amount = self.speed * dt;
        angles.xy += amount;
        angles.zx += amount;
        angles.yw += amount;
    }
}
