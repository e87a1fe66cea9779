//! Top-level scene configuration and JSON loading.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::{CameraParams, CastleLayout, FogParams, LightingParams, RenderConfig, WaveParams};
use crate::color::Rgb;
use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, Result, SceneError};
use crate::wave::MAX_GRID_SEGMENTS;

/// Decorative props and external asset references placed around the castle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropParams {
    /// Ground plane edge length (meters)
    pub floor_size_m: f32,
    pub floor_texture: String,

    /// Static cube edge (meters)
    pub cube_size_m: f32,
    pub cube_color: String,

    pub sphere_radius_m: f32,
    pub sphere_color: String,

    /// Spinning textured cube edge (meters)
    pub spinner_size_m: f32,
    pub spinner_texture: String,

    pub tree_model: String,
    pub tree_materials: String,
    pub tree_position: [f32; 3],
    pub tree_scale: f32,

    /// Cube map faces in +x, -x, +y, -y, +z, -z upload order
    pub skybox_faces: [String; 6],
}

impl Default for PropParams {
    fn default() -> Self {
        let face = |name: &str| format!("resources/sky cubemap/{name}.jpg");
        Self {
            floor_size_m: 200.0,
            floor_texture: "resources/images/checker.png".to_string(),
            cube_size_m: 4.0,
            cube_color: "#8AC".to_string(),
            sphere_radius_m: 3.0,
            sphere_color: "#CA8".to_string(),
            spinner_size_m: 2.0,
            spinner_texture: "resources/images/wall.jpg".to_string(),
            tree_model: "resources/tree/model.obj".to_string(),
            tree_materials: "resources/tree/materials.mtl".to_string(),
            tree_position: [-7.5, 7.5, 0.0],
            tree_scale: 2.0,
            skybox_faces: [
                face("left"),
                face("right"),
                face("top"),
                face("bottom"),
                face("back"),
                face("front"),
            ],
        }
    }
}

/// Everything needed to assemble the scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub castle: CastleLayout,
    pub wave: WaveParams,
    pub camera: CameraParams,
    pub fog: FogParams,
    pub lighting: LightingParams,
    pub props: PropParams,
    pub render: RenderConfig,
}

impl SceneParams {
    /// Load parameters from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let params: SceneParams = serde_json::from_str(&text)?;
        params.validate()?;
        info!("Loaded scene parameters from {}", path.display());
        Ok(params)
    }

    /// Check every range up front so assembly cannot fail halfway through
    pub fn validate(&self) -> Result<()> {
        let c = &self.castle;
        ensure_positive("castle.half_extent_m", c.half_extent_m)?;
        ensure_positive("castle.tower_height_m", c.tower_height_m)?;
        ensure_positive("castle.wall_height_m", c.wall_height_m)?;
        if let Some(keep) = c.keep {
            for v in keep {
                ensure_positive("castle.keep", v)?;
            }
        }
        for v in c.origin {
            ensure_finite("castle.origin", v)?;
        }

        let w = &self.wave;
        ensure_non_negative("wave.speed", w.speed)?;
        ensure_non_negative("wave.amplitude_m", w.amplitude_m)?;
        ensure_non_negative("wave.frequency", w.frequency)?;
        ensure_positive("wave.surface_size_m", w.surface_size_m)?;
        ensure_finite("wave.level_m", w.level_m)?;
        if w.grid_segments == 0 {
            return Err(SceneError::invalid(
                "wave.grid_segments",
                0.0,
                "must be at least 1",
            ));
        }
        if w.grid_segments > MAX_GRID_SEGMENTS {
            return Err(SceneError::invalid(
                "wave.grid_segments",
                w.grid_segments as f32,
                "exceeds MAX_GRID_SEGMENTS",
            ));
        }

        let cam = &self.camera;
        ensure_positive("camera.fov_degrees", cam.fov_degrees)?;
        ensure_positive("camera.near_m", cam.near_m)?;
        ensure_positive("camera.far_m", cam.far_m)?;
        ensure_positive("camera.min_gap_m", cam.min_gap_m)?;

        ensure_non_negative("fog.near_m", self.fog.near_m)?;
        ensure_non_negative("fog.far_m", self.fog.far_m)?;
        Rgb::from_hex(&self.fog.color)?;

        let l = &self.lighting;
        Rgb::from_hex(&l.ambient.color)?;
        Rgb::from_hex(&l.hemisphere.sky_color)?;
        Rgb::from_hex(&l.hemisphere.ground_color)?;
        Rgb::from_hex(&l.directional.color)?;

        let p = &self.props;
        ensure_positive("props.floor_size_m", p.floor_size_m)?;
        ensure_positive("props.cube_size_m", p.cube_size_m)?;
        ensure_positive("props.sphere_radius_m", p.sphere_radius_m)?;
        ensure_positive("props.spinner_size_m", p.spinner_size_m)?;
        ensure_positive("props.tree_scale", p.tree_scale)?;
        Rgb::from_hex(&p.cube_color)?;
        Rgb::from_hex(&p.sphere_color)?;

        if self.render.fps == 0 {
            return Err(SceneError::invalid("render.fps", 0.0, "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ShadingMode;

    #[test]
    fn test_defaults_are_valid() {
        SceneParams::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "wave": { "amplitude_m": 2.0, "shading": "fresnel" } }"#;
        let params: SceneParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.wave.amplitude_m, 2.0);
        assert_eq!(params.wave.shading, ShadingMode::Fresnel);
        assert_eq!(params.wave.speed, WaveParams::default().speed);
        assert_eq!(params.castle, CastleLayout::default());
    }

    #[test]
    fn test_validate_rejects_negative_amplitude() {
        let mut params = SceneParams::default();
        params.wave.amplitude_m = -0.5;
        assert!(matches!(
            params.validate(),
            Err(SceneError::InvalidParameter {
                name: "wave.amplitude_m",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_light_color() {
        let mut params = SceneParams::default();
        params.lighting.ambient.color = "white".to_string();
        assert!(matches!(params.validate(), Err(SceneError::InvalidColor(_))));
    }

    #[test]
    fn test_validate_rejects_zero_clip_gap() {
        let mut params = SceneParams::default();
        params.camera.near_m = 5.0;
        params.camera.far_m = 5.0;
        params.camera.min_gap_m = 0.0;
        assert!(matches!(
            params.validate(),
            Err(SceneError::InvalidParameter {
                name: "camera.min_gap_m",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let mut params = SceneParams::default();
        params.wave.grid_segments = u32::MAX;
        assert!(matches!(
            params.validate(),
            Err(SceneError::InvalidParameter {
                name: "wave.grid_segments",
                ..
            })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let mut params = SceneParams::default();
        params.castle.keep = None;
        params.castle.tower_height_m = 18.5;
        params.wave.shading = ShadingMode::Fresnel;
        params.wave.level_m = -3.25;
        params.fog.color = "#102030".to_string();

        let json = serde_json::to_string_pretty(&params).unwrap();
        let back: SceneParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
        assert_eq!(back.castle.keep, None);
        back.validate().unwrap();
    }

    #[test]
    fn test_load_reads_file() {
        let dir = std::env::temp_dir().join(format!("castlewave-params-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scene.json");
        std::fs::write(&path, r#"{ "castle": { "tower_height_m": 22.0 } }"#).unwrap();

        let params = SceneParams::load(&path).unwrap();
        assert_eq!(params.castle.tower_height_m, 22.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
