//! Castle geometry parameters.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Fixed wall thickness (meters)
pub const WALL_DEPTH_M: f32 = 4.0;

/// Tower part dimensions. The defaults are the only values the tower builder
/// is specified with; they are kept here so the numbers live in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerDims {
    /// Body cylinder radius (meters)
    pub body_radius_m: f32,
    /// Body cylinder radial segments
    pub body_segments: u32,
    /// Roof cone base radius (meters)
    pub roof_radius_m: f32,
    /// Roof cone height (meters)
    pub roof_height_m: f32,
    /// Roof cone radial segments
    pub roof_segments: u32,
    /// Battlement cube edge (meters)
    pub battlement_size_m: f32,
    /// Battlement ring radius from the tower axis (meters)
    pub battlement_ring_m: f32,
    /// Battlement drop below the tower top (meters)
    pub battlement_drop_m: f32,
}

impl TowerDims {
    pub const STANDARD: TowerDims = TowerDims {
        body_radius_m: 2.5,
        body_segments: 12,
        roof_radius_m: 4.0,
        roof_height_m: 6.0,
        roof_segments: 8,
        battlement_size_m: 1.5,
        battlement_ring_m: 3.5,
        battlement_drop_m: 2.0,
    };
}

/// Material colors for castle parts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructurePalette {
    pub stone: Rgb,
    pub roof: Rgb,
    pub battlement: Rgb,
    pub wall: Rgb,
    pub keep: Rgb,
}

impl Default for StructurePalette {
    fn default() -> Self {
        Self {
            stone: Rgb::from_u32(0x808080),
            roof: Rgb::from_u32(0x8B0000),
            battlement: Rgb::from_u32(0x696969),
            wall: Rgb::from_u32(0xA9A9A9),
            keep: Rgb::from_u32(0x778899),
        }
    }
}

/// Castle layout: square curtain wall with a tower on each corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastleLayout {
    /// Distance from the castle center to each corner tower along x and z (meters)
    pub half_extent_m: f32,

    /// Corner tower height (meters)
    pub tower_height_m: f32,

    /// Curtain wall height (meters)
    pub wall_height_m: f32,

    /// Central keep footprint and height (meters); `None` builds no keep
    pub keep: Option<[f32; 3]>,

    /// Castle center on the ground plane (meters)
    pub origin: [f32; 3],

    pub palette: StructurePalette,
}

impl Default for CastleLayout {
    fn default() -> Self {
        Self {
            half_extent_m: 45.0,
            tower_height_m: 15.0,
            wall_height_m: 10.0,
            keep: Some([16.0, 20.0, 16.0]),
            origin: [0.0, 0.0, 0.0],
            palette: StructurePalette::default(),
        }
    }
}

impl CastleLayout {
    /// Curtain wall length between two adjacent towers
    pub fn wall_length_m(&self) -> f32 {
        self.half_extent_m * 2.0
    }
}
