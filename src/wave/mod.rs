//! Animated water surface: a closed-form height field advanced once per frame.
//!
//! The same height function runs in three places: [`WaveSurfaceState::height_at`]
//! on the CPU, [`WaveGrid::displace`] over a vertex grid, and the vertex stage of
//! [`WAVE_SHADER_WGSL`] fed by [`WaveUniforms`].

mod heightmap;
mod mesh;
mod shader;
mod state;
mod uniforms;

// Re-export public types
pub use heightmap::{heightmap_image, save_heightmap};
pub use mesh::{Vertex, WaveGrid, MAX_GRID_SEGMENTS};
pub use shader::WAVE_SHADER_WGSL;
pub use state::{fresnel_factor, WaveSurfaceState};
pub use uniforms::WaveUniforms;
