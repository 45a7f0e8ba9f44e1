//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hyperview_math::Vec4;
use hyperview_projection::{ProjectionMode, ViewConfig};
use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::systems::PlaneDegrees;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 4D eye configuration
    #[serde(default)]
    pub view: ViewSettings,
    /// Projection mode and parameters
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Plane rotations
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Frame loop
    #[serde(default)]
    pub run: RunConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HV_PROJECTION__RADIUS=3 -> projection.radius = 3
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// View configuration, as `[x, y, z, w]` arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Eye position
    pub eye: [f32; 4],
    /// Look-at point
    pub look_at: [f32; 4],
    /// Up reference vector
    pub up: [f32; 4],
    /// Over reference vector
    pub over: [f32; 4],
}

impl Default for ViewSettings {
    fn default() -> Self {
        let view = ViewConfig::default();
        Self {
            eye: view.eye.to_array(),
            look_at: view.look_at.to_array(),
            up: view.up.to_array(),
            over: view.over.to_array(),
        }
    }
}

impl ViewSettings {
    pub fn to_view_config(&self) -> ViewConfig {
        ViewConfig::new(
            Vec4::from(self.eye),
            Vec4::from(self.look_at),
            Vec4::from(self.up),
            Vec4::from(self.over),
        )
    }
}

/// Which projection operator to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    Parallel,
    Perspective,
}

/// Projection configuration
///
/// Both parameters are kept so switching `mode` needs no other change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub mode: ProjectionKind,
    /// Perspective viewing angle in degrees
    pub viewing_angle: f32,
    /// Parallel projection radius
    pub radius: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionKind::Perspective,
            viewing_angle: 60.0,
            radius: 2.0,
        }
    }
}

impl ProjectionConfig {
    pub fn to_mode(&self) -> ProjectionMode {
        match self.mode {
            ProjectionKind::Parallel => ProjectionMode::Parallel { radius: self.radius },
            ProjectionKind::Perspective => ProjectionMode::Perspective { viewing_angle: self.viewing_angle },
        }
    }
}

/// Rotation configuration (angles in degrees)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub xy: f32,
    pub yz: f32,
    pub zx: f32,
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
    /// Advance XY, ZX and YW every frame
    pub auto_rotate: bool,
    /// Auto-rotation speed in degrees per second
    pub speed: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            xy: 0.0,
            yz: 0.0,
            zx: 0.0,
            xw: 0.0,
            yw: 0.0,
            zw: 0.0,
            auto_rotate: false,
            speed: crate::systems::DEFAULT_ROTATION_SPEED,
        }
    }
}

impl RotationConfig {
    pub fn degrees(&self) -> PlaneDegrees {
        PlaneDegrees {
            xy: self.xy,
            yz: self.yz,
            zx: self.zx,
            xw: self.xw,
            yw: self.yw,
            zw: self.zw,
        }
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of frames to project
    pub frames: u32,
    /// Simulated seconds per frame
    pub frame_dt: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 1,
            frame_dt: 1.0 / 60.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.view.eye, [0.0, 0.0, 0.0, -5.0]);
        assert_eq!(config.projection.to_mode(), ProjectionMode::Perspective { viewing_angle: 60.0 });
        assert_eq!(config.rotation.speed, 14.0);
        assert!(!config.rotation.auto_rotate);
    }

    #[test]
    fn test_default_view_matches_reference() {
        assert_eq!(ViewSettings::default().to_view_config(), ViewConfig::default());
    }

    #[test]
    fn test_parallel_mode() {
        let projection = ProjectionConfig {
            mode: ProjectionKind::Parallel,
            ..ProjectionConfig::default()
        };
        assert_eq!(projection.to_mode(), ProjectionMode::Parallel { radius: 2.0 });
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("look_at"));
        assert!(toml.contains("viewing_angle"));
        assert!(toml.contains("perspective"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[projection]\nmode = \"parallel\"\nradius = 4.0\n").unwrap();
        assert_eq!(config.projection.to_mode(), ProjectionMode::Parallel { radius: 4.0 });
        assert_eq!(config.projection.viewing_angle, 60.0);
        assert_eq!(config.run.frames, 1);
    }
}
