//! Water grid mesh with CPU displacement.

use bytemuck::{Pod, Zeroable};

use super::WaveSurfaceState;
use crate::error::{ensure_finite, ensure_positive, Result, SceneError};

/// Largest grid resolution per side; keeps vertex indices well inside `u32`
pub const MAX_GRID_SEGMENTS: u32 = 4096;

/// Vertex data for the water mesh (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Square water grid centred on the origin in the XZ plane
pub struct WaveGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    segments: u32,
    level: f32,
}

impl WaveGrid {
    /// Create a flat grid `size_m` wide with `segments` cells per side at height `level_m`
    pub fn new(size_m: f32, segments: u32, level_m: f32) -> Result<Self> {
        let size_m = ensure_positive("size_m", size_m)?;
        let level = ensure_finite("level_m", level_m)?;
        if segments == 0 {
            return Err(SceneError::invalid("segments", 0.0, "must be at least 1"));
        }
        if segments > MAX_GRID_SEGMENTS {
            return Err(SceneError::invalid(
                "segments",
                segments as f32,
                "exceeds MAX_GRID_SEGMENTS",
            ));
        }
        let spacing = size_m / segments as f32;
        let half_size = size_m / 2.0;
        let n = segments as usize;

        let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
        let mut indices = Vec::with_capacity(n * n * 6);

        // Generate flat XZ plane grid
        for z in 0..=segments {
            for x in 0..=segments {
                vertices.push(Vertex {
                    position: [
                        x as f32 * spacing - half_size,
                        level,
                        z as f32 * spacing - half_size,
                    ],
                    normal: [0.0, 1.0, 0.0],
                    uv: [x as f32 / segments as f32, z as f32 / segments as f32],
                });
            }
        }

        // Generate triangle indices (counter-clockwise winding)
        for z in 0..segments {
            for x in 0..segments {
                let top_left = z * (segments + 1) + x;
                let top_right = top_left + 1;
                let bottom_left = (z + 1) * (segments + 1) + x;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Ok(Self {
            vertices,
            indices,
            segments,
            level,
        })
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Write the height field into every vertex. Vertices are independent,
    /// so this matches the GPU vertex stage exactly.
    pub fn displace(&mut self, state: &WaveSurfaceState) {
        for vertex in &mut self.vertices {
            let [x, _, z] = vertex.position;
            vertex.position[1] = self.level + state.height_at(x, z);
            vertex.normal = state.normal_at(x, z).to_array();
        }
    }

    /// Lowest and highest vertex height
    pub fn height_range(&self) -> (f32, f32) {
        self.vertices
            .iter()
            .map(|v| v.position[1])
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            })
    }
}
