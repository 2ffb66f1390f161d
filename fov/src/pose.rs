use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Observer position and orientation in world space.
///
/// Local +Z is forward and local +Y is up. View cones sweep around the up
/// axis, with positive angles turning forward towards local +X.
#[derive(Copy, Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Pose { position, rotation }
    }

    /// Pose at `position` facing `target` with world +Y up.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Pose {
            position,
            rotation: util::look_rotation(target - position, Vec3::Y),
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Unit direction of a probe `angle` radians off forward.
    pub fn probe_direction(&self, angle: f32) -> Vec3 {
        util::rotate_about(self.forward(), self.up(), angle)
    }

    /// Transform a world space point into the observer's local frame.
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        self.rotation.inverse() * (point - self.position)
    }
}
