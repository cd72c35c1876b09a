//! Shared configuration for SkySketch
//!
//! This crate is the single source of truth for the defaults used while
//! drawing (stroke width and color), when projecting onto the sky sphere,
//! and for the fallback camera used when the host does not supply one.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default stroke width in NDC units
pub const DEFAULT_STROKE_WIDTH: f32 = 0.02;

/// Default stroke color (opaque white)
pub const DEFAULT_STROKE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Default sky sphere radius in world units
pub const DEFAULT_SKY_RADIUS: f32 = 500.0;

/// Default vertical field of view in radians (60 degrees)
pub const DEFAULT_FOV_Y: f32 = std::f32::consts::FRAC_PI_3;

/// Default near clip distance
pub const DEFAULT_NEAR: f32 = 0.1;

/// Default far clip distance
pub const DEFAULT_FAR: f32 = 1000.0;

/// Settings applied to each new stroke
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeDefaults {
    /// Full stroke width in NDC units
    pub width: f32,
    /// RGBA color
    pub color: [f32; 4],
}

impl Default for StrokeDefaults {
    fn default() -> Self {
        Self {
            width: DEFAULT_STROKE_WIDTH,
            color: DEFAULT_STROKE_COLOR,
        }
    }
}

/// Sky sphere placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyDefaults {
    /// Sphere center in world space
    pub center: [f32; 3],
    /// Sphere radius in world units
    pub radius: f32,
}

impl Default for SkyDefaults {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, 0.0],
            radius: DEFAULT_SKY_RADIUS,
        }
    }
}

/// Perspective parameters for the fallback camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDefaults {
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            fov_y: DEFAULT_FOV_Y,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

/// Complete sketching configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct SketchConfig {
    pub stroke: StrokeDefaults,
    pub sky: SkyDefaults,
    pub camera: CameraDefaults,
}

impl SketchConfig {
    /// Create a config with the given stroke width and otherwise default values
    pub fn with_stroke_width(width: f32) -> Self {
        Self {
            stroke: StrokeDefaults {
                width,
                ..StrokeDefaults::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SketchConfig::default();
        assert_eq!(config.stroke.width, DEFAULT_STROKE_WIDTH);
        assert_eq!(config.stroke.color, DEFAULT_STROKE_COLOR);
        assert_eq!(config.sky.radius, DEFAULT_SKY_RADIUS);
        assert_eq!(config.camera.near, DEFAULT_NEAR);
    }

    #[test]
    fn test_with_stroke_width() {
        let config = SketchConfig::with_stroke_width(0.1);
        assert_eq!(config.stroke.width, 0.1);
        assert_eq!(config.sky, SkyDefaults::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SketchConfig =
            serde_json::from_str(r#"{ "stroke": { "width": 0.05 } }"#).unwrap();
        assert_eq!(config.stroke.width, 0.05);
        assert_eq!(config.stroke.color, DEFAULT_STROKE_COLOR);
        assert_eq!(config.camera, CameraDefaults::default());
    }
}
