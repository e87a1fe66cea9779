//! Tower, wall, and keep builders plus the square castle layout.
//!
//! Builders are pure: the same arguments always give the same tree.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};

use super::{Aabb, MaterialRef, Primitive, SceneNode, Shape, Transform};
use crate::error::{ensure_finite, ensure_finite_vec3, ensure_positive, Result};
use crate::labels::LabelSet;
use crate::params::{CastleLayout, TowerDims, WALL_DEPTH_M};

/// Keep battlement edge (meters)
const KEEP_BATTLEMENT_M: f32 = 1.5;

/// Label height above the top of a structure (meters)
const LABEL_CLEARANCE_M: f32 = 2.0;

/// Input to [`StructureDescriptor::build`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StructureDescriptor {
    Tower {
        height: f32,
        position: Vec3,
    },
    Wall {
        length: f32,
        height: f32,
        position: Vec3,
        rotation_y: f32,
    },
    Keep {
        width: f32,
        height: f32,
        depth: f32,
        position: Vec3,
    },
}

impl StructureDescriptor {
    pub fn build(&self) -> Result<SceneNode> {
        match *self {
            StructureDescriptor::Tower { height, position } => build_tower(height, position),
            StructureDescriptor::Wall {
                length,
                height,
                position,
                rotation_y,
            } => build_wall(length, height, position, rotation_y),
            StructureDescriptor::Keep {
                width,
                height,
                depth,
                position,
            } => build_keep(width, height, depth, position),
        }
    }
}

/// Round tower with a conical roof and four battlements.
///
/// Primitive order: body cylinder, roof cone, battlements at 0°, 90°, 180°,
/// 270° counter-clockwise from +x.
pub fn build_tower(height: f32, position: Vec3) -> Result<SceneNode> {
    ensure_positive("height", height)?;
    ensure_finite_vec3("position", position)?;
    let d = TowerDims::STANDARD;

    let mut node = SceneNode::new("tower", Transform::from_translation(position))
        .with_primitive(Primitive::new(
            Shape::Cylinder {
                radius_top: d.body_radius_m,
                radius_bottom: d.body_radius_m,
                height,
                radial_segments: d.body_segments,
            },
            Vec3::new(0.0, height / 2.0, 0.0),
            MaterialRef::Stone,
        ))
        .with_primitive(Primitive::new(
            Shape::Cone {
                radius: d.roof_radius_m,
                height: d.roof_height_m,
                radial_segments: d.roof_segments,
            },
            Vec3::new(0.0, height + d.roof_height_m / 2.0, 0.0),
            MaterialRef::Roof,
        ));

    let y = height - d.battlement_drop_m;
    for i in 0..4 {
        let angle = i as f32 * FRAC_PI_2;
        let offset = Vec3::new(
            d.battlement_ring_m * angle.cos(),
            y,
            d.battlement_ring_m * angle.sin(),
        );
        node.primitives.push(Primitive::new(
            Shape::cube(d.battlement_size_m),
            offset,
            MaterialRef::Battlement,
        ));
    }
    Ok(node)
}

/// Straight wall segment `length` long along local x, centred on `position`
/// and turned `rotation_y` radians about its own vertical axis.
pub fn build_wall(length: f32, height: f32, position: Vec3, rotation_y: f32) -> Result<SceneNode> {
    ensure_positive("length", length)?;
    ensure_positive("height", height)?;
    ensure_finite_vec3("position", position)?;
    ensure_finite("rotation_y", rotation_y)?;

    let transform =
        Transform::from_translation(position).with_rotation(Quat::from_rotation_y(rotation_y));
    Ok(SceneNode::new("wall", transform).with_primitive(Primitive::new(
        Shape::Cuboid {
            width: length,
            height,
            depth: WALL_DEPTH_M,
        },
        Vec3::ZERO,
        MaterialRef::Wall,
    )))
}

/// Rectangular keep standing on `position`, with a battlement on each top corner
pub fn build_keep(width: f32, height: f32, depth: f32, position: Vec3) -> Result<SceneNode> {
    ensure_positive("width", width)?;
    ensure_positive("height", height)?;
    ensure_positive("depth", depth)?;
    ensure_finite_vec3("position", position)?;

    let mut node = SceneNode::new("keep", Transform::from_translation(position)).with_primitive(
        Primitive::new(
            Shape::Cuboid {
                width,
                height,
                depth,
            },
            Vec3::new(0.0, height / 2.0, 0.0),
            MaterialRef::Keep,
        ),
    );

    let y = height + KEEP_BATTLEMENT_M / 2.0;
    for (sx, sz) in [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
        node.primitives.push(Primitive::new(
            Shape::cube(KEEP_BATTLEMENT_M),
            Vec3::new(sx * width / 2.0, y, sz * depth / 2.0),
            MaterialRef::Battlement,
        ));
    }
    Ok(node)
}

/// Assembled castle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Castle {
    pub towers: Vec<SceneNode>,
    pub walls: Vec<SceneNode>,
    pub keep: Option<SceneNode>,
}

impl Castle {
    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> {
        self.towers
            .iter()
            .chain(self.walls.iter())
            .chain(self.keep.iter())
    }

    pub fn primitive_count(&self) -> usize {
        self.nodes().map(SceneNode::primitive_count).sum()
    }

    /// Bounds of every part, roofs and battlements included
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::union_all(self.nodes().filter_map(SceneNode::world_bounds))
    }

    /// Bounds of the curtain walls alone
    pub fn wall_footprint(&self) -> Option<Aabb> {
        Aabb::union_all(self.walls.iter().filter_map(SceneNode::world_bounds))
    }
}

/// Four corner towers joined by four curtain walls, plus an optional central keep.
///
/// One label per tower and keep is appended to `labels`.
pub fn build_castle(layout: &CastleLayout, labels: &mut LabelSet) -> Result<Castle> {
    let origin = ensure_finite_vec3("origin", Vec3::from_array(layout.origin))?;
    let half = ensure_positive("half_extent_m", layout.half_extent_m)?;
    let length = layout.wall_length_m();
    let wall_y = layout.wall_height_m / 2.0;
    let roof_top = layout.tower_height_m + TowerDims::STANDARD.roof_height_m;

    // North is -z
    let corners = [
        ("North-East Tower", Vec3::new(half, 0.0, -half)),
        ("North-West Tower", Vec3::new(-half, 0.0, -half)),
        ("South-West Tower", Vec3::new(-half, 0.0, half)),
        ("South-East Tower", Vec3::new(half, 0.0, half)),
    ];
    let mut towers = Vec::with_capacity(corners.len());
    for (name, corner) in corners {
        let position = origin + corner;
        let mut tower = build_tower(layout.tower_height_m, position)?;
        tower.name = name.to_string();
        labels.push(name, position + Vec3::Y * (roof_top + LABEL_CLEARANCE_M));
        towers.push(tower);
    }

    let sides = [
        ("North Wall", Vec3::new(0.0, wall_y, -half), 0.0),
        ("South Wall", Vec3::new(0.0, wall_y, half), 0.0),
        ("East Wall", Vec3::new(half, wall_y, 0.0), FRAC_PI_2),
        ("West Wall", Vec3::new(-half, wall_y, 0.0), FRAC_PI_2),
    ];
    let mut walls = Vec::with_capacity(sides.len());
    for (name, offset, rotation_y) in sides {
        let mut wall = build_wall(length, layout.wall_height_m, origin + offset, rotation_y)?;
        wall.name = name.to_string();
        walls.push(wall);
    }

    let keep = match layout.keep {
        Some([width, height, depth]) => {
            let keep = build_keep(width, height, depth, origin)?;
            labels.push(
                "Keep",
                origin + Vec3::Y * (height + KEEP_BATTLEMENT_M + LABEL_CLEARANCE_M),
            );
            Some(keep)
        }
        None => None,
    };

    let castle = Castle {
        towers,
        walls,
        keep,
    };
    debug!(
        "Built castle: {} towers, {} walls, {} primitives",
        castle.towers.len(),
        castle.walls.len(),
        castle.primitive_count()
    );
    Ok(castle)
}
