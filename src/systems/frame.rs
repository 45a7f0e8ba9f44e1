//! Per-frame projection
//!
//! Owns the frame's rotation angles, view and projection mode, and produces
//! the projected tesseract each frame. Index buffers for wireframe and filled
//! meshes are built once, since topology never changes.

use hyperview_math::{tesseract, Vec3, TESSERACT_VERTICES};
use hyperview_projection::{ProjectionError, ProjectionMode, Projector, ViewConfig};

use crate::config::AppConfig;
use super::rotation::{AutoRotate, PlaneDegrees};

/// Frame error types
#[derive(Debug)]
pub enum FrameError {
    /// The view or projection could not produce finite points
    Projection(ProjectionError),
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::Projection(err) => write!(f, "Frame error: {}", err),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Projection(err) => Some(err),
        }
    }
}

impl From<ProjectionError> for FrameError {
    fn from(err: ProjectionError) -> Self {
        FrameError::Projection(err)
    }
}

/// Index buffers and edge list for the tesseract mesh
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshIndices {
    pub lines: Vec<u32>,
    pub triangles: Vec<u32>,
    /// Deduplicated wireframe edges
    pub edges: Vec<[u32; 2]>,
}

impl MeshIndices {
    pub fn tesseract() -> Self {
        Self {
            lines: tesseract::line_indices(),
            triangles: tesseract::triangle_indices(),
            edges: tesseract::unique_edges(),
        }
    }
}

/// One frame's output
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedFrame {
    /// Frame counter, starting at 0
    pub index: u64,
    /// Angles the frame was projected with, in degrees
    pub angles: PlaneDegrees,
    /// Projected tesseract vertices, index-aligned with `TESSERACT_VERTICES`
    pub points: Vec<Vec3>,
}

/// Drives the projection from frame to frame
pub struct FrameDriver {
    angles: PlaneDegrees,
    view: ViewConfig,
    mode: ProjectionMode,
    auto_rotate: Option<AutoRotate>,
    indices: MeshIndices,
    frame: u64,
}

impl FrameDriver {
    /// Create a driver, rejecting a degenerate view or bad parameter up front
    pub fn new(
        angles: PlaneDegrees,
        view: ViewConfig,
        mode: ProjectionMode,
        auto_rotate: Option<AutoRotate>,
    ) -> Result<Self, FrameError> {
        mode.validate().map_err(ProjectionError::from)?;
        view.basis()?;

        Ok(Self {
            angles,
            view,
            mode,
            auto_rotate,
            indices: MeshIndices::tesseract(),
            frame: 0,
        })
    }

    /// Create a driver from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, FrameError> {
        let auto_rotate = config
            .rotation
            .auto_rotate
            .then(|| AutoRotate::new(config.rotation.speed));

        Self::new(
            config.rotation.degrees(),
            config.view.to_view_config(),
            config.projection.to_mode(),
            auto_rotate,
        )
    }

    pub fn angles(&self) -> PlaneDegrees {
        self.angles
    }

    /// Replace the angles, as a slider change would
    pub fn set_angles(&mut self, angles: PlaneDegrees) {
        self.angles = angles;
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Switch projection mode; the new parameter is validated first
    pub fn set_mode(&mut self, mode: ProjectionMode) -> Result<(), FrameError> {
        mode.validate().map_err(ProjectionError::from)?;
        self.mode = mode;
        Ok(())
    }

    pub fn indices(&self) -> &MeshIndices {
        &self.indices
    }

    /// Project the tesseract at the current angles
    ///
    /// The rotation and view basis are rebuilt on every call.
    pub fn project_frame(&self) -> Result<ProjectedFrame, FrameError> {
        let rotation = self.angles.to_radians().to_matrix();
        let points = Projector::new(rotation, self.view, self.mode).project(&TESSERACT_VERTICES)?;

        Ok(ProjectedFrame {
            index: self.frame,
            angles: self.angles,
            points,
        })
    }

    /// Project the current frame, then advance auto-rotation by `dt`
    pub fn step(&mut self, dt: f32) -> Result<ProjectedFrame, FrameError> {
        let frame = self.project_frame()?;

        if let Some(auto) = &self.auto_rotate {
            auto.step(&mut self.angles, dt);
        }
        self.frame += 1;

        Ok(frame)
    }
}
