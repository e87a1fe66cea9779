//! Procedural castle pieces: towers, walls, and a keep assembled as scene-node trees.

mod bounds;
mod builder;
mod node;

// Re-export public types
pub use bounds::Aabb;
pub use builder::{build_castle, build_keep, build_tower, build_wall, Castle, StructureDescriptor};
pub use node::{MaterialRef, Primitive, SceneNode, Shape, Transform};
