//! Parameter definitions with units and documented defaults.
//!
//! Defaults reproduce the values of the original castle scene. Every struct
//! deserializes with `#[serde(default)]`, so a JSON config only needs the
//! fields it overrides.

mod camera;
mod lighting;
mod render;
mod scene;
mod structure;
mod wave;

// Re-export all types
pub use camera::{CameraParams, FogParams};
pub use lighting::{DirectionalLightParams, HemisphereLightParams, LightParams, LightingParams};
pub use render::RenderConfig;
pub use scene::{PropParams, SceneParams};
pub use structure::{CastleLayout, StructurePalette, TowerDims, WALL_DEPTH_M};
pub use wave::{ShadingMode, WaveParams};
