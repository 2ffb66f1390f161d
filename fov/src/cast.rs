use glam::Vec3;

use crate::{Pose, Sample};

/// Where a ray struck the scene.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RayHit {
    pub point: Vec3,
    /// Unit surface normal at the hit point.
    pub normal: Vec3,
}

/// Scene that can be probed with rays.
///
/// Implementations must be deterministic: the same ray against the same
/// scene must give the same answer every time, or edge refinement will
/// wander.
pub trait Raycast {
    /// Find the nearest surface along the ray from `origin` in unit
    /// direction `dir` within `max_distance`.
    fn cast(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
    ) -> Option<RayHit>;
}

impl<T: Raycast + ?Sized> Raycast for &T {
    fn cast(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
    ) -> Option<RayHit> {
        (**self).cast(origin, dir, max_distance)
    }
}

/// The empty scene, every ray misses.
impl Raycast for () {
    fn cast(&self, _: Vec3, _: Vec3, _: f32) -> Option<RayHit> {
        None
    }
}

/// Ray source fixed at an observer that turns angles into samples and
/// counts every ray it casts.
pub struct Probe<'a, R: ?Sized> {
    scene: &'a R,
    pose: Pose,
    range: f32,
    casts: usize,
}

impl<'a, R: Raycast + ?Sized> Probe<'a, R> {
    pub fn new(scene: &'a R, pose: Pose, range: f32) -> Self {
        Probe {
            scene,
            pose,
            range,
            casts: 0,
        }
    }

    /// Cast a ray `angle` radians off the observer's forward direction.
    pub fn sample(&mut self, angle: f32) -> Sample {
        let dir = self.pose.probe_direction(angle);
        self.casts += 1;

        match self.scene.cast(self.pose.position, dir, self.range) {
            Some(RayHit { point, normal }) => Sample::Hit {
                angle,
                position: point,
                normal,
            },
            None => Sample::Miss {
                angle,
                position: self.pose.position + dir * self.range,
            },
        }
    }

    /// Number of rays cast so far.
    pub fn casts(&self) -> usize {
        self.casts
    }
}
