//! Perspective camera with coupled near/far planes and a matching fog range.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{ensure_finite, ensure_finite_vec3, ensure_non_negative, ensure_positive, Result};
use crate::params::{CameraParams, FogParams};

/// Field of view limits (degrees)
const FOV_RANGE: (f32, f32) = (1.0, 180.0);

/// A min/max pair that keeps `max >= min + min_gap` whenever either end is edited
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairedRange {
    pub min: f32,
    pub max: f32,
    pub min_gap: f32,
}

impl PairedRange {
    pub fn new(min: f32, max: f32, min_gap: f32) -> Self {
        Self { min, max, min_gap }.with_min(min)
    }

    /// Set `min`, pushing `max` up if it would fall inside the gap
    pub fn with_min(self, v: f32) -> Self {
        Self {
            min: v,
            max: self.max.max(v + self.min_gap),
            ..self
        }
    }

    /// Set `max`, then re-apply `min` so the gap still holds
    pub fn with_max(self, v: f32) -> Self {
        let min = self.min;
        Self { max: v, ..self }.with_min(min)
    }
}

/// Perspective camera looking at an orbit target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    fov_degrees: f32,
    aspect: f32,
    clip: PairedRange,
    viewport: (u32, u32),
}

impl Camera {
    pub fn from_params(params: &CameraParams, viewport: (u32, u32)) -> Result<Self> {
        ensure_positive("near_m", params.near_m)?;
        ensure_positive("far_m", params.far_m)?;
        ensure_positive("min_gap_m", params.min_gap_m)?;
        let mut camera = Self {
            position: ensure_finite_vec3("position", Vec3::from_array(params.position))?,
            target: ensure_finite_vec3("target", Vec3::from_array(params.target))?,
            fov_degrees: 0.0,
            aspect: 1.0,
            clip: PairedRange::new(params.near_m, params.far_m, params.min_gap_m),
            viewport: (0, 0),
        };
        camera.set_fov(params.fov_degrees)?;
        camera.resize(viewport.0, viewport.1);
        Ok(camera)
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.clip.min
    }

    pub fn far(&self) -> f32 {
        self.clip.max
    }

    pub fn set_fov(&mut self, degrees: f32) -> Result<()> {
        self.fov_degrees = ensure_finite("fov_degrees", degrees)?.clamp(FOV_RANGE.0, FOV_RANGE.1);
        Ok(())
    }

    /// Move the near plane; the far plane follows if needed
    pub fn set_near(&mut self, near: f32) -> Result<()> {
        self.clip = self.clip.with_min(ensure_positive("near", near)?);
        Ok(())
    }

    /// Move the far plane; it never drops below near + gap
    pub fn set_far(&mut self, far: f32) -> Result<()> {
        self.clip = self.clip.with_max(ensure_positive("far", far)?);
        Ok(())
    }

    /// Track the display size. Returns true if the aspect ratio was updated.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if (width, height) == self.viewport || width == 0 || height == 0 {
            return false;
        }
        self.viewport = (width, height);
        self.aspect = width as f32 / height as f32;
        true
    }

    pub fn view(&self) -> Mat4 {
        // Always keep Y as up vector (camera never rolls)
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.clip.min,
            self.clip.max,
        )
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// Linear fog between two distances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fog {
    range: PairedRange,
    pub color: Rgb,
}

impl Fog {
    pub fn from_params(params: &FogParams) -> Result<Self> {
        ensure_non_negative("fog.near_m", params.near_m)?;
        ensure_non_negative("fog.far_m", params.far_m)?;
        Ok(Self {
            range: PairedRange::new(params.near_m, params.far_m, 0.1),
            color: Rgb::from_hex(&params.color)?,
        })
    }

    pub fn near(&self) -> f32 {
        self.range.min
    }

    pub fn far(&self) -> f32 {
        self.range.max
    }

    pub fn set_near(&mut self, near: f32) -> Result<()> {
        self.range = self.range.with_min(ensure_non_negative("fog.near", near)?);
        Ok(())
    }

    pub fn set_far(&mut self, far: f32) -> Result<()> {
        self.range = self.range.with_max(ensure_non_negative("fog.far", far)?);
        Ok(())
    }

    /// Fog blend factor at a view distance, 0 before `near` and 1 past `far`
    pub fn factor(&self, distance: f32) -> f32 {
        ((distance - self.range.min) / (self.range.max - self.range.min)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::from_params(&CameraParams::default(), (1280, 720)).unwrap()
    }

    #[test]
    fn test_raising_near_pushes_far() {
        let mut cam = camera();
        cam.set_far(5.0).unwrap();
        cam.set_near(8.0).unwrap();

        assert_eq!(cam.near(), 8.0);
        assert!((cam.far() - 8.1).abs() < 1e-5);
    }

    #[test]
    fn test_lowering_far_below_near_is_clamped() {
        let mut cam = camera();
        cam.set_near(10.0).unwrap();
        cam.set_far(2.0).unwrap();

        assert_eq!(cam.near(), 10.0);
        assert!((cam.far() - 10.1).abs() < 1e-5);
    }

    #[test]
    fn test_far_edit_inside_gap_keeps_near() {
        let range = PairedRange::new(1.0, 50.0, 0.1).with_max(30.0);
        assert_eq!(range.min, 1.0);
        assert_eq!(range.max, 30.0);
    }

    #[test]
    fn test_fov_is_clamped() {
        let mut cam = camera();
        cam.set_fov(500.0).unwrap();
        assert_eq!(cam.fov_degrees(), 180.0);
        cam.set_fov(0.0).unwrap();
        assert_eq!(cam.fov_degrees(), 1.0);
        assert!(cam.set_fov(f32::NAN).is_err());
    }

    #[test]
    fn test_resize_only_reports_changes() {
        let mut cam = camera();
        assert!(!cam.resize(1280, 720));
        assert!(cam.resize(800, 800));
        assert_eq!(cam.aspect(), 1.0);
        assert!(!cam.resize(0, 600));
    }

    #[test]
    fn test_view_proj_is_finite() {
        let m = camera().view_proj();
        assert_ne!(m, Mat4::IDENTITY);
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_zero_clip_gap_rejected() {
        let params = CameraParams {
            near_m: 5.0,
            far_m: 5.0,
            min_gap_m: 0.0,
            ..CameraParams::default()
        };
        assert!(Camera::from_params(&params, (1280, 720)).is_err());

        let params = CameraParams {
            min_gap_m: 0.5,
            ..params
        };
        let cam = Camera::from_params(&params, (1280, 720)).unwrap();
        assert!(cam.far() > cam.near());
        assert!(cam.view_proj().to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_invalid_near_rejected() {
        let mut cam = camera();
        assert!(cam.set_near(0.0).is_err());
        assert!(cam.set_near(-1.0).is_err());
    }

    #[test]
    fn test_fog_range_coupling_and_factor() {
        let mut fog = Fog::from_params(&FogParams::default()).unwrap();
        fog.set_near(200.0).unwrap();
        assert!(fog.far() >= fog.near() + 0.1 - 1e-5);

        fog.set_near(0.0).unwrap();
        fog.set_far(100.0).unwrap();
        assert_eq!(fog.factor(0.0), 0.0);
        assert_eq!(fog.factor(50.0), 0.5);
        assert_eq!(fog.factor(500.0), 1.0);
    }
}
