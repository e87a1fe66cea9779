//! Scene-node tree handed to the renderer.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::Aabb;
use crate::color::Rgb;
use crate::params::StructurePalette;

/// Primitive geometry, centred on its local origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Lies in the local XY plane
    Plane { width: f32, height: f32 },
}

impl Shape {
    pub fn cube(edge: f32) -> Self {
        Shape::Cuboid {
            width: edge,
            height: edge,
            depth: edge,
        }
    }

    pub fn local_bounds(&self) -> Aabb {
        let half = match *self {
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                ..
            } => {
                let r = radius_top.max(radius_bottom);
                Vec3::new(r, height * 0.5, r)
            }
            Shape::Cone { radius, height, .. } => Vec3::new(radius, height * 0.5, radius),
            Shape::Cuboid {
                width,
                height,
                depth,
            } => Vec3::new(width, height, depth) * 0.5,
            Shape::Sphere { radius, .. } => Vec3::splat(radius),
            Shape::Plane { width, height } => Vec3::new(width * 0.5, height * 0.5, 0.0),
        };
        Aabb::from_half_extents(half)
    }
}

/// Material reference resolved by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MaterialRef {
    Stone,
    Roof,
    Battlement,
    Wall,
    Keep,
    Color(Rgb),
    /// Texture path, tinted white
    Textured(String),
}

impl MaterialRef {
    pub fn resolve(&self, palette: &StructurePalette) -> Rgb {
        match self {
            MaterialRef::Stone => palette.stone,
            MaterialRef::Roof => palette.roof,
            MaterialRef::Battlement => palette.battlement,
            MaterialRef::Wall => palette.wall,
            MaterialRef::Keep => palette.keep,
            MaterialRef::Color(c) => *c,
            MaterialRef::Textured(_) => Rgb::WHITE,
        }
    }
}

/// Translation, rotation, and scale. The matrix applies scale, then rotation
/// about the local origin, then translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A shape placed in its node's local space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub shape: Shape,
    pub transform: Transform,
    pub material: MaterialRef,
}

impl Primitive {
    pub fn new(shape: Shape, translation: Vec3, material: MaterialRef) -> Self {
        Self {
            shape,
            transform: Transform::from_translation(translation),
            material,
        }
    }
}

/// Transform node with primitives and child nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub primitives: Vec<Primitive>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            primitives: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Primitives in this node and all descendants
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
            + self
                .children
                .iter()
                .map(SceneNode::primitive_count)
                .sum::<usize>()
    }

    /// Visit every primitive with its world matrix
    pub fn visit_primitives<F>(&self, parent: &Mat4, visit: &mut F)
    where
        F: FnMut(&Primitive, &Mat4),
    {
        let world = *parent * self.transform.matrix();
        for primitive in &self.primitives {
            visit(primitive, &(world * primitive.transform.matrix()));
        }
        for child in &self.children {
            child.visit_primitives(&world, visit);
        }
    }

    /// World-space bounds of every primitive in the tree, `None` if the tree is empty
    pub fn world_bounds(&self) -> Option<Aabb> {
        let mut bounds: Option<Aabb> = None;
        self.visit_primitives(&Mat4::IDENTITY, &mut |primitive: &Primitive, world: &Mat4| {
            let b = primitive.shape.local_bounds().transformed(world);
            bounds = Some(bounds.map_or(b, |acc| acc.union(b)));
        });
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_bounds_compose_transforms() {
        let child = SceneNode::new("child", Transform::from_translation(Vec3::new(0.0, 2.0, 0.0)))
            .with_primitive(Primitive::new(
                Shape::cube(2.0),
                Vec3::ZERO,
                MaterialRef::Stone,
            ));
        let mut root = SceneNode::new("root", Transform::from_translation(Vec3::X * 10.0));
        root.children.push(child);

        let b = root.world_bounds().unwrap();
        assert!(b.min.abs_diff_eq(Vec3::new(9.0, 1.0, -1.0), 1e-6));
        assert!(b.max.abs_diff_eq(Vec3::new(11.0, 3.0, 1.0), 1e-6));
        assert_eq!(root.primitive_count(), 1);
    }

    #[test]
    fn test_empty_node_has_no_bounds() {
        assert!(SceneNode::new("empty", Transform::IDENTITY)
            .world_bounds()
            .is_none());
    }

    #[test]
    fn test_textured_material_resolves_white() {
        let palette = StructurePalette::default();
        let m = MaterialRef::Textured("wall.jpg".into());
        assert_eq!(m.resolve(&palette), Rgb::WHITE);
        assert_eq!(MaterialRef::Roof.resolve(&palette), palette.roof);
    }
}
