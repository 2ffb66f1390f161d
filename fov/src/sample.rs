use glam::Vec3;

/// Result of one probe ray.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Sample {
    /// The ray hit scene geometry within view range.
    Hit {
        /// Angle off the observer's forward direction in radians.
        angle: f32,
        position: Vec3,
        normal: Vec3,
    },
    /// The ray reached view range without hitting anything, `position` is
    /// the ray's endpoint.
    Miss { angle: f32, position: Vec3 },
}

use Sample::*;

impl Sample {
    pub fn angle(&self) -> f32 {
        match self {
            Hit { angle, .. } | Miss { angle, .. } => *angle,
        }
    }

    pub fn position(&self) -> Vec3 {
        match self {
            Hit { position, .. } | Miss { position, .. } => *position,
        }
    }

    /// Surface normal, only hits have one.
    pub fn normal(&self) -> Option<Vec3> {
        match self {
            Hit { normal, .. } => Some(*normal),
            Miss { .. } => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Hit { .. })
    }
}

/// Compare two surface normals with per-component slack.
///
/// Zero tolerance means exact comparison.
pub fn normals_match(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    if tolerance > 0.0 {
        a.abs_diff_eq(b, tolerance)
    } else {
        a == b
    }
}
