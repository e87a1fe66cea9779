//! castlewave - procedural castle scene with an animated water surface

pub mod camera;
pub mod cli;
pub mod color;
pub mod error;
pub mod labels;
pub mod lighting;
pub mod params;
pub mod scene;
pub mod structure;
pub mod wave;

pub use error::{Result, SceneError};
