//! Light rig parameters.

use serde::{Deserialize, Serialize};

/// A light with a single color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightParams {
    /// `#rrggbb`
    pub color: String,
    pub intensity: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            intensity: 1.0,
        }
    }
}

/// Sky/ground gradient light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HemisphereLightParams {
    pub sky_color: String,
    pub ground_color: String,
    pub intensity: f32,
}

impl Default for HemisphereLightParams {
    fn default() -> Self {
        Self {
            sky_color: "#b1e1ff".to_string(),
            ground_color: "#b97a20".to_string(),
            intensity: 1.0,
        }
    }
}

/// Directional light aimed at a target point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalLightParams {
    pub color: String,
    pub intensity: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl Default for DirectionalLightParams {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            intensity: 1.0,
            position: [0.0, 10.0, 0.0],
            target: [-5.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingParams {
    pub ambient: LightParams,
    pub hemisphere: HemisphereLightParams,
    pub directional: DirectionalLightParams,
}
