//! Water surface parameters.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// How the water fragment color is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    /// Constant base color. The reference shader's Fresnel term compares two
    /// fixed up vectors, so its blend factor is always zero.
    #[default]
    Flat,

    /// Fresnel blend toward white from the real surface normal and view direction
    Fresnel,
}

impl ShadingMode {
    /// Value written into the uniform block
    pub fn as_u32(self) -> u32 {
        match self {
            ShadingMode::Flat => 0,
            ShadingMode::Fresnel => 1,
        }
    }
}

/// Water surface parameters (editable between frames)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Time scale applied to each frame delta (dimensionless)
    pub speed: f32,

    /// Peak displacement (meters)
    pub amplitude_m: f32,

    /// Spatial frequency (radians per meter)
    pub frequency: f32,

    pub base_color: Rgb,

    pub shading: ShadingMode,

    /// Plane edge length (meters)
    pub surface_size_m: f32,

    /// Grid subdivisions per side
    pub grid_segments: u32,

    /// Water plane height (meters)
    pub level_m: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            amplitude_m: 0.5,
            frequency: 0.5,
            base_color: Rgb::from_u32(0x1E90FF),
            shading: ShadingMode::Flat,
            surface_size_m: 200.0,
            grid_segments: 128,
            level_m: -1.0,
        }
    }
}
