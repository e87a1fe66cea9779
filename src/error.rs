//! Error type shared by the builders, the water surface, and the scene driver.

use thiserror::Error;

/// Errors reported to callers. Every numeric operation in the crate is pure, so
/// the only failures are precondition violations and the I/O done by the driver.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, SceneError>;

impl SceneError {
    pub fn invalid(name: &'static str, value: f32, reason: &'static str) -> Self {
        SceneError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SceneError::invalid(name, value, "must be finite"))
    }
}

/// Reject non-finite and non-positive values.
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<f32> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SceneError::invalid(name, value, "must be > 0"))
    }
}

/// Reject non-finite and negative values.
pub(crate) fn ensure_non_negative(name: &'static str, value: f32) -> Result<f32> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(SceneError::invalid(name, value, "must be >= 0"))
    }
}

pub(crate) fn ensure_finite_vec3(name: &'static str, v: glam::Vec3) -> Result<glam::Vec3> {
    for c in v.to_array() {
        ensure_finite(name, c)?;
    }
    Ok(v)
}
