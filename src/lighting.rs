//! Ambient, hemisphere, and directional lights with the operator-panel edit ranges.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{ensure_finite, ensure_finite_vec3, Result};
use crate::params::LightingParams;

/// Intensity slider range
pub const INTENSITY_RANGE: (f32, f32) = (0.0, 5.0);

/// Directional light target limits per axis (meters)
pub const TARGET_X_RANGE: (f32, f32) = (-10.0, 10.0);
pub const TARGET_Y_RANGE: (f32, f32) = (0.0, 10.0);
pub const TARGET_Z_RANGE: (f32, f32) = (-10.0, 10.0);

fn clamp_intensity(v: f32) -> Result<f32> {
    Ok(ensure_finite("intensity", v)?.clamp(INTENSITY_RANGE.0, INTENSITY_RANGE.1))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: Rgb,
    intensity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HemisphereLight {
    pub sky_color: Rgb,
    pub ground_color: Rgb,
    intensity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: Rgb,
    intensity: f32,
    pub position: Vec3,
    target: Vec3,
}

macro_rules! intensity_accessors {
    ($ty:ty) => {
        impl $ty {
            pub fn intensity(&self) -> f32 {
                self.intensity
            }

            /// Clamped to [`INTENSITY_RANGE`]
            pub fn set_intensity(&mut self, v: f32) -> Result<()> {
                self.intensity = clamp_intensity(v)?;
                Ok(())
            }
        }
    };
}

intensity_accessors!(AmbientLight);
intensity_accessors!(HemisphereLight);
intensity_accessors!(DirectionalLight);

impl DirectionalLight {
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Move the target, clamping each axis to its panel range
    pub fn set_target(&mut self, target: Vec3) -> Result<()> {
        let t = ensure_finite_vec3("target", target)?;
        self.target = Vec3::new(
            t.x.clamp(TARGET_X_RANGE.0, TARGET_X_RANGE.1),
            t.y.clamp(TARGET_Y_RANGE.0, TARGET_Y_RANGE.1),
            t.z.clamp(TARGET_Z_RANGE.0, TARGET_Z_RANGE.1),
        );
        Ok(())
    }

    /// Unit vector from the light toward its target (straight down if they coincide)
    pub fn direction(&self) -> Vec3 {
        let d = (self.target - self.position).normalize_or_zero();
        if d == Vec3::ZERO {
            Vec3::NEG_Y
        } else {
            d
        }
    }
}

/// The scene's light rig
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub hemisphere: HemisphereLight,
    pub directional: DirectionalLight,
}

impl LightRig {
    pub fn from_params(params: &LightingParams) -> Result<Self> {
        let d = &params.directional;
        let mut directional = DirectionalLight {
            color: Rgb::from_hex(&d.color)?,
            intensity: clamp_intensity(d.intensity)?,
            position: ensure_finite_vec3("directional.position", Vec3::from_array(d.position))?,
            target: Vec3::ZERO,
        };
        directional.set_target(Vec3::from_array(d.target))?;

        Ok(Self {
            ambient: AmbientLight {
                color: Rgb::from_hex(&params.ambient.color)?,
                intensity: clamp_intensity(params.ambient.intensity)?,
            },
            hemisphere: HemisphereLight {
                sky_color: Rgb::from_hex(&params.hemisphere.sky_color)?,
                ground_color: Rgb::from_hex(&params.hemisphere.ground_color)?,
                intensity: clamp_intensity(params.hemisphere.intensity)?,
            },
            directional,
        })
    }
}

/// Replace a color from a `#rrggbb` string. The color is untouched on error.
pub fn set_color_hex(color: &mut Rgb, hex: &str) -> Result<()> {
    *color = Rgb::from_hex(hex)?;
    Ok(())
}
