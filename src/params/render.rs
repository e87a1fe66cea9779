//! Host frame configuration.

use serde::{Deserialize, Serialize};

/// Frame loop configuration for the headless driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Viewport width (pixels)
    pub width: u32,

    /// Viewport height (pixels)
    pub height: u32,

    /// Simulated display refresh rate (frames per second)
    pub fps: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fps: 60,
        }
    }
}

impl RenderConfig {
    /// Host timestamp (milliseconds) of the given frame
    pub fn frame_time_ms(&self, frame: u64) -> f64 {
        frame as f64 * 1000.0 / self.fps.max(1) as f64
    }
}
