//! Axis-aligned bounding boxes.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centred on the origin
    pub fn from_half_extents(half: Vec3) -> Self {
        Self::new(-half, half)
    }

    pub fn union(self, other: Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Bounds of this box after an affine transform
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let corners = self.corners();
        let first = matrix.transform_point3(corners[0]);
        corners[1..].iter().fold(Aabb::new(first, first), |acc, &c| {
            let p = matrix.transform_point3(c);
            Aabb::new(acc.min.min(p), acc.max.max(p))
        })
    }

    /// Union of an iterator of boxes, `None` when empty
    pub fn union_all(boxes: impl IntoIterator<Item = Aabb>) -> Option<Aabb> {
        boxes.into_iter().reduce(Aabb::union)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_swaps_extents() {
        let b = Aabb::from_half_extents(Vec3::new(45.0, 5.0, 2.0));
        let m = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let t = b.transformed(&m);

        assert!((t.max.x - 2.0).abs() < 1e-4);
        assert!((t.max.z - 45.0).abs() < 1e-4);
        assert!((t.max.y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_union_all_empty_is_none() {
        assert!(Aabb::union_all(Vec::new()).is_none());
    }
}
