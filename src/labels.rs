//! Billboard labels that turn to face the camera every frame.
//!
//! The label collection is owned by whoever assembles the scene and is passed
//! explicitly to the builders that add labels and to the per-frame update.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A text billboard in world space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub position: Vec3,
    /// Rotation taking local +Z to the facing direction
    pub orientation: Quat,
}

/// Ordered label collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelSet {
    labels: Vec<Label>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label with identity orientation, returning its index
    pub fn push(&mut self, text: impl Into<String>, position: Vec3) -> usize {
        self.labels.push(Label {
            text: text.into(),
            position,
            orientation: Quat::IDENTITY,
        });
        self.labels.len() - 1
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }
}

/// Rotation that points local +Z from `from` toward `to`, keeping +Y up.
///
/// Returns `None` when the points coincide or `to` is straight above or below.
pub fn facing_rotation(from: Vec3, to: Vec3) -> Option<Quat> {
    let forward = (to - from).normalize_or_zero();
    if forward == Vec3::ZERO {
        return None;
    }
    let right = Vec3::Y.cross(forward);
    if right.length_squared() < 1e-8 {
        return None;
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
}

/// Turn every label toward the camera. Degenerate labels keep their last orientation.
pub fn face_camera(labels: &mut LabelSet, camera_position: Vec3) {
    for label in &mut labels.labels {
        if let Some(rotation) = facing_rotation(label.position, camera_position) {
            label.orientation = rotation;
        }
    }
}
