//! Water surface state and the height function.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{ensure_finite, ensure_non_negative, Result};
use crate::params::{ShadingMode, WaveParams};

/// Fresnel blend weight toward white: `(1 - cos θ)² · 0.5`
pub fn fresnel_factor(cos_theta: f32) -> f32 {
    let k = (1.0 - cos_theta).clamp(0.0, 1.0);
    k * k * 0.5
}

fn finite_color(color: Rgb) -> Result<Rgb> {
    for channel in color.to_array() {
        ensure_finite("base_color", channel)?;
    }
    Ok(color)
}

/// Time and shape parameters of the water surface.
///
/// `elapsed_time` only moves forward through [`advance`](Self::advance); the
/// other fields may be edited between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSurfaceState {
    elapsed_time: f32,
    speed: f32,
    amplitude: f32,
    frequency: f32,
    base_color: Rgb,
}

impl WaveSurfaceState {
    pub fn new(speed: f32, amplitude: f32, frequency: f32, base_color: Rgb) -> Result<Self> {
        Ok(Self {
            elapsed_time: 0.0,
            speed: ensure_non_negative("speed", speed)?,
            amplitude: ensure_non_negative("amplitude", amplitude)?,
            frequency: ensure_non_negative("frequency", frequency)?,
            base_color: finite_color(base_color)?,
        })
    }

    pub fn from_params(params: &WaveParams) -> Result<Self> {
        Self::new(
            params.speed,
            params.amplitude_m,
            params.frequency,
            params.base_color,
        )
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn base_color(&self) -> Rgb {
        self.base_color
    }

    /// Zero pauses the animation
    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        self.speed = ensure_non_negative("speed", speed)?;
        Ok(())
    }

    pub fn set_amplitude(&mut self, amplitude: f32) -> Result<()> {
        self.amplitude = ensure_non_negative("amplitude", amplitude)?;
        Ok(())
    }

    pub fn set_frequency(&mut self, frequency: f32) -> Result<()> {
        self.frequency = ensure_non_negative("frequency", frequency)?;
        Ok(())
    }

    pub fn set_base_color(&mut self, color: Rgb) -> Result<()> {
        self.base_color = finite_color(color)?;
        Ok(())
    }

    /// Step the clock by a frame delta scaled by `speed`
    pub fn advance(self, dt_s: f32) -> Result<Self> {
        let dt_s = ensure_non_negative("dt_s", dt_s)?;
        let elapsed_time = self.elapsed_time + dt_s * self.speed;
        ensure_finite("elapsed_time", elapsed_time)?;
        Ok(Self {
            elapsed_time,
            ..self
        })
    }

    /// `sin(x·f + t) · cos(z·f + t) · a`
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let t = self.elapsed_time;
        let f = self.frequency;
        (x * f + t).sin() * (z * f + t).cos() * self.amplitude
    }

    /// Unit surface normal from the analytic partial derivatives of [`height_at`](Self::height_at)
    pub fn normal_at(&self, x: f32, z: f32) -> Vec3 {
        let t = self.elapsed_time;
        let f = self.frequency;
        let (a, b) = (x * f + t, z * f + t);
        let dh_dx = self.amplitude * f * a.cos() * b.cos();
        let dh_dz = -self.amplitude * f * a.sin() * b.sin();
        Vec3::new(-dh_dx, 1.0, -dh_dz).normalize()
    }

    /// Base color blended toward white by [`fresnel_factor`]
    pub fn color_at(&self, normal_dot_up: f32) -> Rgb {
        self.base_color
            .mix(Rgb::WHITE, fresnel_factor(normal_dot_up))
    }

    /// Fragment color at a surface point seen from `eye`, with the surface
    /// resting at `level` like the vertex stage places it.
    ///
    /// `Flat` reproduces the reference shader, whose blend compares the up axis
    /// with itself and so always yields `base_color`. `Fresnel` uses the real
    /// normal and view direction.
    pub fn shade(&self, mode: ShadingMode, level: f32, x: f32, z: f32, eye: Vec3) -> Rgb {
        match mode {
            ShadingMode::Flat => self.color_at(Vec3::Y.dot(Vec3::Y)),
            ShadingMode::Fresnel => {
                let point = Vec3::new(x, level + self.height_at(x, z), z);
                let view = (eye - point).normalize_or_zero();
                self.color_at(self.normal_at(x, z).dot(view).max(0.0))
            }
        }
    }
}
