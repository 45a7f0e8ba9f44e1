//! 4D view configuration and orthonormal view basis
//!
//! The basis is the 4D analogue of a camera's right/up/forward frame, with one
//! extra axis. It is built in a fixed order:
//!
//! 1. `Wd = normalize(look_at - eye)` (gaze)
//! 2. `Wa = normalize(cross4(up, over, Wd))`
//! 3. `Wb = normalize(cross4(over, Wd, Wa))`
//! 4. `Wc = cross4(Wd, Wa, Wb)` (unit length by construction)

use hyperview_math::{cross4, Vec4};
use serde::{Serialize, Deserialize};

use crate::error::{BasisAxis, ProjectionError};

/// Norms and depths at or below this are treated as zero
///
/// The gaze length and the projection depth are compared against it directly.
/// `Wa` and `Wb` are cross products that scale with `up` and `over`, so their
/// threshold is scaled by those lengths.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Where the 4D eye sits and how it is oriented
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Eye position
    pub eye: Vec4,
    /// Point the eye looks at; must differ from `eye`
    pub look_at: Vec4,
    /// Up reference; must not lie in the plane of `over` and the gaze
    pub up: Vec4,
    /// Secondary ("over") reference
    pub over: Vec4,
}

impl Default for ViewConfig {
    /// Eye on the -W axis looking at the origin
    fn default() -> Self {
        Self {
            eye: Vec4::new(0.0, 0.0, 0.0, -5.0),
            look_at: Vec4::ZERO,
            up: Vec4::Y,
            over: Vec4::X,
        }
    }
}

impl ViewConfig {
    pub fn new(eye: Vec4, look_at: Vec4, up: Vec4, over: Vec4) -> Self {
        Self { eye, look_at, up, over }
    }

    /// Build the orthonormal basis for this configuration
    pub fn basis(&self) -> Result<ViewBasis, ProjectionError> {
        ViewBasis::build(self.eye, self.look_at, self.up, self.over)
    }
}

/// Orthonormal 4D frame anchored at the eye
///
/// `wd` is the gaze direction; `wa`, `wb`, `wc` span its orthogonal
/// complement and become the x, y, z of projected points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBasis {
    pub wa: Vec4,
    pub wb: Vec4,
    pub wc: Vec4,
    pub wd: Vec4,
}

impl ViewBasis {
    /// Construct the basis, or fail with [`ProjectionError::DegenerateBasis`]
    /// naming the first axis whose norm collapsed.
    ///
    /// The whole basis is returned or nothing is.
    pub fn build(eye: Vec4, look_at: Vec4, up: Vec4, over: Vec4) -> Result<Self, ProjectionError> {
        let wd = (look_at - eye)
            .try_normalized(DEGENERATE_EPSILON)
            .ok_or(ProjectionError::DegenerateBasis(BasisAxis::Wd))?;

        let up_len = up.length();
        let over_len = over.length();

        let wa = cross4(up, over, wd)
            .try_normalized(DEGENERATE_EPSILON * up_len * over_len)
            .ok_or(ProjectionError::DegenerateBasis(BasisAxis::Wa))?;

        let wb = cross4(over, wd, wa)
            .try_normalized(DEGENERATE_EPSILON * over_len)
            .ok_or(ProjectionError::DegenerateBasis(BasisAxis::Wb))?;

        let wc = cross4(wd, wa, wb);

        log::debug!("View basis: wa={:?} wb={:?} wc={:?} wd={:?}", wa, wb, wc, wd);

        Ok(Self { wa, wb, wc, wd })
    }

    /// Basis vectors in `[wa, wb, wc, wd]` order
    pub fn axes(&self) -> [Vec4; 4] {
        [self.wa, self.wb, self.wc, self.wd]
    }

    /// Coordinates of an eye-relative vector along `wa`, `wb`, `wc`, `wd`
    #[inline]
    pub fn coordinates(&self, v: Vec4) -> [f32; 4] {
        [v.dot(self.wa), v.dot(self.wb), v.dot(self.wc), v.dot(self.wd)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn assert_orthonormal(basis: &ViewBasis) {
        let axes = basis.axes();
        for i in 0..4 {
            assert!(approx_eq(axes[i].length(), 1.0), "axis {} has length {}", i, axes[i].length());
            for j in (i + 1)..4 {
                assert!(axes[i].dot(axes[j]).abs() < EPSILON,
                    "axes {} and {} not orthogonal: {}", i, j, axes[i].dot(axes[j]));
            }
        }
    }

    #[test]
    fn test_default_basis() {
        let basis = ViewConfig::default().basis().unwrap();
        assert!(vec_approx_eq(basis.wd, Vec4::W));
        assert!(vec_approx_eq(basis.wa, Vec4::new(0.0, 0.0, -1.0, 0.0)));
        assert!(vec_approx_eq(basis.wb, Vec4::new(0.0, -1.0, 0.0, 0.0)));
        assert!(vec_approx_eq(basis.wc, Vec4::new(-1.0, 0.0, 0.0, 0.0)));
        assert_orthonormal(&basis);
    }

    #[test]
    fn test_orthonormal_for_general_configs() {
        let configs = [
            ViewConfig::new(
                Vec4::new(3.0, 1.0, -2.0, 4.0),
                Vec4::new(0.5, 0.0, 0.0, -1.0),
                Vec4::new(0.1, 1.0, 0.2, 0.0),
                Vec4::new(1.0, 0.0, 0.3, 0.1),
            ),
            ViewConfig::new(
                Vec4::new(0.0, 0.0, -10.0, 0.0),
                Vec4::ZERO,
                Vec4::Y,
                Vec4::X,
            ),
            ViewConfig::new(
                Vec4::new(-2.0, 4.0, 1.0, 1.0),
                Vec4::new(1.0, 1.0, 1.0, 1.0),
                Vec4::new(0.0, 0.0, 1.0, 1.0),
                Vec4::new(2.0, -1.0, 0.0, 0.0),
            ),
        ];

        for config in &configs {
            let basis = config.basis().unwrap();
            assert_orthonormal(&basis);
            let gaze = (config.look_at - config.eye).try_normalized(DEGENERATE_EPSILON).unwrap();
            assert!(vec_approx_eq(basis.wd, gaze));
        }
    }

    #[test]
    fn test_eye_equals_look_at() {
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let err = ViewBasis::build(p, p, Vec4::Y, Vec4::X).unwrap_err();
        assert_eq!(err, ProjectionError::DegenerateBasis(BasisAxis::Wd));
    }

    #[test]
    fn test_up_parallel_to_gaze() {
        let config = ViewConfig {
            up: Vec4::W * 2.0,
            ..ViewConfig::default()
        };
        assert_eq!(config.basis().unwrap_err(), ProjectionError::DegenerateBasis(BasisAxis::Wa));
    }

    #[test]
    fn test_up_parallel_to_over() {
        let config = ViewConfig {
            up: Vec4::X,
            over: Vec4::X * -3.0,
            ..ViewConfig::default()
        };
        assert_eq!(config.basis().unwrap_err(), ProjectionError::DegenerateBasis(BasisAxis::Wa));
    }

    #[test]
    fn test_zero_over() {
        let config = ViewConfig {
            over: Vec4::ZERO,
            ..ViewConfig::default()
        };
        // A zero over vector collapses Wa first
        assert_eq!(config.basis().unwrap_err(), ProjectionError::DegenerateBasis(BasisAxis::Wa));
    }

    #[test]
    fn test_short_reference_vectors() {
        let config = ViewConfig {
            up: Vec4::Y * 1e-3,
            over: Vec4::X * 1e-3,
            ..ViewConfig::default()
        };
        let basis = config.basis().unwrap();
        let reference = ViewConfig::default().basis().unwrap();
        for (a, b) in basis.axes().iter().zip(reference.axes()) {
            assert!(vec_approx_eq(*a, b), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_nearly_parallel_up_and_over() {
        // Long vectors do not hide a near-parallel pair
        let config = ViewConfig {
            up: Vec4::new(1e4, 1e-7, 0.0, 0.0),
            over: Vec4::X * 1e4,
            ..ViewConfig::default()
        };
        assert_eq!(config.basis().unwrap_err(), ProjectionError::DegenerateBasis(BasisAxis::Wa));
    }

    #[test]
    fn test_non_finite_up() {
        let config = ViewConfig {
            up: Vec4::new(f32::INFINITY, 1.0, 0.0, 0.0),
            ..ViewConfig::default()
        };
        assert_eq!(config.basis().unwrap_err(), ProjectionError::DegenerateBasis(BasisAxis::Wa));
    }

    #[test]
    fn test_coordinates() {
        let basis = ViewConfig::default().basis().unwrap();
        let c = basis.coordinates(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert!(approx_eq(c[0], -3.0));
        assert!(approx_eq(c[1], -2.0));
        assert!(approx_eq(c[2], -1.0));
        assert!(approx_eq(c[3], 4.0));
    }
}
