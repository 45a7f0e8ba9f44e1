//! 4D to 3D projection
//!
//! Each point is rotated (`M · p`), made eye-relative (`- eye`), and then
//! expressed in the view basis. The gaze component `Wd` is either discarded
//! (parallel) or used as the perspective divisor.
//!
//! Output is index-aligned with input: point `i` of the result is the
//! projection of point `i` of the input.

use hyperview_math::{mat4::{self, Mat4}, tesseract, Vec3, Vec4};
use serde::{Serialize, Deserialize};

use crate::error::{InvalidParameter, ProjectionError};
use crate::view::{ViewBasis, ViewConfig, DEGENERATE_EPSILON};

/// Projection operator and its parameter
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Orthographic along the gaze axis, scaled by `1 / radius`
    Parallel {
        /// Scale divisor, > 0
        radius: f32,
    },
    /// Pinhole perspective using the 4D depth
    Perspective {
        /// Full viewing angle in degrees, in (0, 180)
        viewing_angle: f32,
    },
}

impl Default for ProjectionMode {
    fn default() -> Self {
        ProjectionMode::Perspective { viewing_angle: 60.0 }
    }
}

impl ProjectionMode {
    /// Reject out-of-range parameters
    ///
    /// A parameter is also rejected when its derived scale (`1 / radius` or the
    /// focal factor) overflows, as it does for subnormal inputs.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        match *self {
            ProjectionMode::Parallel { radius } => {
                if radius > 0.0 && radius.is_finite() && (1.0 / radius).is_finite() {
                    Ok(())
                } else {
                    Err(InvalidParameter::Radius(radius))
                }
            }
            ProjectionMode::Perspective { viewing_angle } => {
                if viewing_angle > 0.0 && viewing_angle < 180.0 && focal_factor(viewing_angle).is_finite() {
                    Ok(())
                } else {
                    Err(InvalidParameter::ViewingAngle(viewing_angle))
                }
            }
        }
    }
}

/// Focal factor `1 / tan(angle / 2)` for a viewing angle in degrees
#[inline]
pub fn focal_factor(viewing_angle: f32) -> f32 {
    1.0 / (viewing_angle.to_radians() / 2.0).tan()
}

/// Projects 4D points into 3D for one frame's rotation, view and mode
///
/// The view basis is rebuilt on every call; nothing is cached between calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub rotation: Mat4,
    pub view: ViewConfig,
    pub mode: ProjectionMode,
}

impl Projector {
    pub fn new(rotation: Mat4, view: ViewConfig, mode: ProjectionMode) -> Self {
        Self { rotation, view, mode }
    }

    /// Project `points`, returning one 3D point per input point
    ///
    /// Parameters are validated and the basis is built before any point is
    /// touched, so a bad configuration fails even for an empty slice.
    pub fn project(&self, points: &[Vec4]) -> Result<Vec<Vec3>, ProjectionError> {
        let basis = self.prepare()?;
        self.project_with(&basis, points)
    }

    /// Project each tesseract face separately, index-aligned with
    /// [`tesseract::TESSERACT_CELLS`]
    ///
    /// On a degenerate point the reported index is the tesseract vertex index.
    pub fn project_cells(&self) -> Result<Vec<[Vec3; 4]>, ProjectionError> {
        let basis = self.prepare()?;

        tesseract::TESSERACT_CELLS
            .iter()
            .map(|cell| -> Result<[Vec3; 4], ProjectionError> {
                let points = tesseract::cell_points(cell);
                let projected = self.project_with(&basis, &points).map_err(|e| match e {
                    ProjectionError::DegenerateProjection { index, depth } => {
                        ProjectionError::DegenerateProjection { index: cell[index] as usize, depth }
                    }
                    other => other,
                })?;
                Ok([projected[0], projected[1], projected[2], projected[3]])
            })
            .collect()
    }

    fn prepare(&self) -> Result<ViewBasis, ProjectionError> {
        self.mode.validate()?;
        self.view.basis()
    }

    fn project_with(&self, basis: &ViewBasis, points: &[Vec4]) -> Result<Vec<Vec3>, ProjectionError> {
        log::debug!("Projecting {} points ({:?})", points.len(), self.mode);

        match self.mode {
            ProjectionMode::Parallel { radius } => {
                let s = 1.0 / radius;
                points
                    .iter()
                    .enumerate()
                    .map(|(index, &p)| {
                        let (v, depth) = self.view_coordinates(basis, index, p)?;
                        finite_point(index, depth, v * s)
                    })
                    .collect()
            }
            ProjectionMode::Perspective { viewing_angle } => {
                let t = focal_factor(viewing_angle);
                points
                    .iter()
                    .enumerate()
                    .map(|(index, &p)| {
                        let (v, depth) = self.view_coordinates(basis, index, p)?;
                        if depth.abs() <= DEGENERATE_EPSILON {
                            return Err(degenerate(index, depth));
                        }
                        finite_point(index, depth, v * (t / depth))
                    })
                    .collect()
            }
        }
    }

    /// Basis coordinates of a rotated, eye-relative point, split into the
    /// image-plane part and the gaze depth
    fn view_coordinates(&self, basis: &ViewBasis, index: usize, p: Vec4) -> Result<(Vec3, f32), ProjectionError> {
        let rel = mat4::transform(self.rotation, p) - self.view.eye;
        let [a, b, c, depth] = basis.coordinates(rel);
        if !rel.is_finite() || !depth.is_finite() {
            return Err(degenerate(index, depth));
        }
        Ok((Vec3::new(a, b, c), depth))
    }
}

fn degenerate(index: usize, depth: f32) -> ProjectionError {
    log::warn!("Point {} cannot be projected (depth {})", index, depth);
    ProjectionError::DegenerateProjection { index, depth }
}

fn finite_point(index: usize, depth: f32, point: Vec3) -> Result<Vec3, ProjectionError> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(degenerate(index, depth))
    }
}

/// Parallel (orthographic) projection of `points`
pub fn project_parallel(
    points: &[Vec4],
    rotation: Mat4,
    radius: f32,
    view: &ViewConfig,
) -> Result<Vec<Vec3>, ProjectionError> {
    Projector::new(rotation, *view, ProjectionMode::Parallel { radius }).project(points)
}

/// Perspective projection of `points` with `viewing_angle` in degrees
pub fn project_perspective(
    points: &[Vec4],
    rotation: Mat4,
    viewing_angle: f32,
    view: &ViewConfig,
) -> Result<Vec<Vec3>, ProjectionError> {
    Projector::new(rotation, *view, ProjectionMode::Perspective { viewing_angle }).project(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BasisAxis;
    use hyperview_math::{RotationAngles, TESSERACT_VERTICES};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_reference_perspective_point() {
        let out = project_perspective(&[Vec4::new(1.0, 1.0, 1.0, 1.0)], mat4::IDENTITY, 60.0, &ViewConfig::default())
            .unwrap();
        // depth 6, focal factor sqrt(3), all three basis coordinates -1
        let expected = -(3.0f32.sqrt()) / 6.0;
        assert!(vec3_approx_eq(out[0], Vec3::new(expected, expected, expected)), "got {:?}", out[0]);
    }

    #[test]
    fn test_reference_parallel_point() {
        let out = project_parallel(&[Vec4::new(1.0, 2.0, 3.0, 4.0)], mat4::IDENTITY, 2.0, &ViewConfig::default())
            .unwrap();
        assert!(vec3_approx_eq(out[0], Vec3::new(-1.5, -1.0, -0.5)), "got {:?}", out[0]);
    }

    #[test]
    fn test_parallel_ignores_depth() {
        let view = ViewConfig::default();
        let near = project_parallel(&[Vec4::new(1.0, 1.0, 1.0, -2.0)], mat4::IDENTITY, 1.0, &view).unwrap();
        let far = project_parallel(&[Vec4::new(1.0, 1.0, 1.0, 40.0)], mat4::IDENTITY, 1.0, &view).unwrap();
        assert_eq!(near, far);
    }

    #[test]
    fn test_index_alignment() {
        let view = ViewConfig::default();
        let rotation = RotationAngles::from_degrees(10.0, 20.0, 30.0, 40.0, 50.0, 60.0).to_matrix();
        let projector = Projector::new(rotation, view, ProjectionMode::Perspective { viewing_angle: 45.0 });

        for len in [0usize, 1, 5, 16] {
            let points = &TESSERACT_VERTICES[..len];
            let all = projector.project(points).unwrap();
            assert_eq!(all.len(), len);
            for (i, p) in points.iter().enumerate() {
                let single = projector.project(std::slice::from_ref(p)).unwrap();
                assert_eq!(all[i], single[0], "index {} misaligned", i);
            }
        }
    }

    #[test]
    fn test_parallel_radius_scaling() {
        let view = ViewConfig::default();
        let rotation = RotationAngles::from_degrees(15.0, 0.0, 25.0, 35.0, 0.0, 45.0).to_matrix();
        let a = project_parallel(&TESSERACT_VERTICES, rotation, 1.5, &view).unwrap();
        let b = project_parallel(&TESSERACT_VERTICES, rotation, 3.0, &view).unwrap();
        for (pa, pb) in a.iter().zip(&b) {
            assert!(vec3_approx_eq(*pa * 0.5, *pb), "{:?} vs {:?}", pa, pb);
        }
    }

    #[test]
    fn test_perspective_converges_to_zero_near_180() {
        let view = ViewConfig::default();
        let mut previous = f32::INFINITY;
        for angle in [60.0, 120.0, 170.0, 179.0, 179.9] {
            let out = project_perspective(&TESSERACT_VERTICES, mat4::IDENTITY, angle, &view).unwrap();
            let max = out.iter().map(|p| p.length()).fold(0.0, f32::max);
            assert!(max < previous, "magnitude should shrink as the angle widens");
            previous = max;
        }
        assert!(previous < 1e-3);
    }

    #[test]
    fn test_focal_factor() {
        assert!(approx_eq(focal_factor(90.0), 1.0));
        assert!(approx_eq(focal_factor(60.0), 3.0f32.sqrt()));
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        // Point with w = -5 lies on the eye hyperplane of the default view
        let points = [Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(2.0, 0.0, 0.0, -5.0)];
        let err = project_perspective(&points, mat4::IDENTITY, 60.0, &ViewConfig::default()).unwrap_err();
        assert_eq!(err, ProjectionError::DegenerateProjection { index: 1, depth: 0.0 });

        // Parallel mode has no divisor, so the same point is fine
        let out = project_parallel(&points, mat4::IDENTITY, 1.0, &ViewConfig::default()).unwrap();
        assert!(out.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_invalid_parameters() {
        let view = ViewConfig::default();
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = project_parallel(&[], mat4::IDENTITY, radius, &view).unwrap_err();
            assert!(matches!(err, ProjectionError::InvalidParameter(InvalidParameter::Radius(_))));
        }
        for angle in [0.0, 180.0, -10.0, 200.0, f32::NAN] {
            let err = project_perspective(&[], mat4::IDENTITY, angle, &view).unwrap_err();
            assert!(matches!(err, ProjectionError::InvalidParameter(InvalidParameter::ViewingAngle(_))));
        }
    }

    #[test]
    fn test_subnormal_parameters_rejected() {
        let view = ViewConfig::default();
        let err = project_parallel(&TESSERACT_VERTICES, mat4::IDENTITY, 1e-39, &view).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidParameter(InvalidParameter::Radius(_))));

        let err = project_perspective(&TESSERACT_VERTICES, mat4::IDENTITY, 1e-37, &view).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidParameter(InvalidParameter::ViewingAngle(_))));
    }

    #[test]
    fn test_non_finite_rotation_is_rejected() {
        let mut rotation = mat4::IDENTITY;
        rotation[0][0] = f32::NAN;
        let modes = [ProjectionMode::Parallel { radius: 1.0 }, ProjectionMode::default()];
        for mode in modes {
            let err = Projector::new(rotation, ViewConfig::default(), mode)
                .project(&[Vec4::new(1.0, 1.0, 1.0, 1.0)])
                .unwrap_err();
            assert!(matches!(err, ProjectionError::DegenerateProjection { index: 0, .. }), "{:?}", err);
        }
    }

    #[test]
    fn test_overflowing_output_is_rejected() {
        // Valid radius, but 1e10 * 1e30 overflows f32
        let points = [Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(1e10, 0.0, 0.0, 0.0)];
        let err = project_parallel(&points, mat4::IDENTITY, 1e-30, &ViewConfig::default()).unwrap_err();
        assert!(matches!(err, ProjectionError::DegenerateProjection { index: 1, .. }), "{:?}", err);
    }

    #[test]
    fn test_degenerate_basis_fails_before_points() {
        let p = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let view = ViewConfig { eye: p, look_at: p, ..ViewConfig::default() };
        for mode in [ProjectionMode::Parallel { radius: 1.0 }, ProjectionMode::default()] {
            let err = Projector::new(mat4::IDENTITY, view, mode).project(&[]).unwrap_err();
            assert_eq!(err, ProjectionError::DegenerateBasis(BasisAxis::Wd));
        }
    }

    #[test]
    fn test_rotation_applied_before_view() {
        // Quarter turn in XW carries W onto X; the default view maps X to -Wc
        let rotation = RotationAngles::new(0.0, 0.0, 0.0, std::f32::consts::FRAC_PI_2, 0.0, 0.0).to_matrix();
        let out = project_parallel(&[Vec4::W], rotation, 1.0, &ViewConfig::default()).unwrap();
        assert!(vec3_approx_eq(out[0], Vec3::new(0.0, 0.0, -1.0)), "got {:?}", out[0]);
    }

    #[test]
    fn test_project_cells() {
        let projector = Projector::new(mat4::IDENTITY, ViewConfig::default(), ProjectionMode::default());
        let cells = projector.project_cells().unwrap();
        let vertices = projector.project(&TESSERACT_VERTICES).unwrap();
        assert_eq!(cells.len(), tesseract::TESSERACT_CELLS.len());
        for (quad, cell) in cells.iter().zip(&tesseract::TESSERACT_CELLS) {
            for k in 0..4 {
                assert_eq!(quad[k], vertices[cell[k] as usize]);
            }
        }
    }

    #[test]
    fn test_project_cells_reports_vertex_index() {
        // Eye at w = 1 puts every w = 1 vertex on the eye hyperplane
        let view = ViewConfig {
            eye: Vec4::new(0.0, 0.0, 0.0, 1.0),
            look_at: Vec4::new(0.0, 0.0, 0.0, 5.0),
            ..ViewConfig::default()
        };
        let projector = Projector::new(mat4::IDENTITY, view, ProjectionMode::default());
        match projector.project_cells().unwrap_err() {
            ProjectionError::DegenerateProjection { index, .. } => {
                assert_eq!(TESSERACT_VERTICES[index].w, 1.0);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
