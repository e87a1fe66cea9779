//! Camera and fog parameters.

use serde::{Deserialize, Serialize};

/// Perspective camera parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_m: f32,

    /// Far clipping plane (meters)
    pub far_m: f32,

    /// Smallest allowed far - near gap (meters)
    pub min_gap_m: f32,

    pub position: [f32; 3],

    /// Orbit target
    pub target: [f32; 3],
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near_m: 0.1,
            far_m: 100.0,
            min_gap_m: 0.1,
            position: [0.0, 10.0, 20.0],
            target: [0.0, 5.0, 0.0],
        }
    }
}

/// Linear fog parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogParams {
    /// Distance where fog starts (meters)
    pub near_m: f32,

    /// Distance where fog is opaque (meters)
    pub far_m: f32,

    /// `#rrggbb`
    pub color: String,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            near_m: 10.0,
            far_m: 150.0,
            color: "#b1e1ff".to_string(),
        }
    }
}
