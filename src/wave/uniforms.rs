//! Per-frame uniform block for the water shader.

use bytemuck::{Pod, Zeroable};

use super::WaveSurfaceState;
use crate::camera::Camera;
use crate::params::ShadingMode;

/// Uniform buffer for the water shader. Field order and padding follow the
/// WGSL `WaveUniforms` struct (112 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct WaveUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub time: f32,
    pub base_color: [f32; 3],
    pub amplitude: f32,
    pub frequency: f32,
    pub level: f32,
    pub shading_mode: u32,
    pub _padding: f32,
}

impl WaveUniforms {
    /// Snapshot host state for upload. Rebuilt every frame; the device never
    /// writes back.
    pub fn sync(
        state: &WaveSurfaceState,
        camera: &Camera,
        shading: ShadingMode,
        level: f32,
    ) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_pos: camera.position.to_array(),
            time: state.elapsed_time(),
            base_color: state.base_color().to_array(),
            amplitude: state.amplitude(),
            frequency: state.frequency(),
            level,
            shading_mode: shading.as_u32(),
            _padding: 0.0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::params::CameraParams;

    #[test]
    fn test_uniform_size_is_wgsl_aligned() {
        assert_eq!(std::mem::size_of::<WaveUniforms>(), 112);
        assert_eq!(std::mem::size_of::<WaveUniforms>() % 16, 0);
    }

    #[test]
    fn test_sync_copies_state() {
        let camera = Camera::from_params(&CameraParams::default(), (800, 600)).unwrap();
        let state = WaveSurfaceState::new(2.0, 0.75, 0.3, Rgb::new(0.1, 0.2, 0.3))
            .unwrap()
            .advance(0.5)
            .unwrap();

        let u = WaveUniforms::sync(&state, &camera, ShadingMode::Fresnel, -1.0);

        assert_eq!(u.time, 1.0);
        assert_eq!(u.amplitude, 0.75);
        assert_eq!(u.frequency, 0.3);
        assert_eq!(u.base_color, [0.1, 0.2, 0.3]);
        assert_eq!(u.level, -1.0);
        assert_eq!(u.shading_mode, 1);
        assert_eq!(u.camera_pos, [0.0, 10.0, 20.0]);
        assert_eq!(u.as_bytes().len(), 112);
    }
}
