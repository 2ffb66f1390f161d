//! Test scenes.

use std::ops::RangeInclusive;

use glam::{vec3, Vec3};

use crate::{RayHit, Raycast};

/// One-sided infinitely tall plane, optionally cut to an x range.
#[derive(Clone, Debug)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub x: RangeInclusive<f32>,
}

impl Plane {
    /// Wall facing the origin at depth `z` across the whole x axis.
    pub fn wall(z: f32) -> Self {
        Plane::wall_between(z, f32::NEG_INFINITY..=f32::INFINITY)
    }

    /// Wall facing the origin at depth `z` covering only the x range.
    pub fn wall_between(z: f32, x: RangeInclusive<f32>) -> Self {
        Plane {
            point: vec3(0.0, 0.0, z),
            normal: -Vec3::Z,
            x,
        }
    }

    /// Slanted facet through `point` whose normal is `normal`.
    pub fn facet(point: Vec3, normal: Vec3, x: RangeInclusive<f32>) -> Self {
        Plane {
            point,
            normal: normal.normalize(),
            x,
        }
    }
}

impl Raycast for Plane {
    fn cast(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
    ) -> Option<RayHit> {
        let facing = dir.dot(self.normal);
        if facing >= 0.0 {
            return None;
        }
        let t = (self.point - origin).dot(self.normal) / facing;
        if !(0.0..=max_distance).contains(&t) {
            return None;
        }
        let point = origin + dir * t;
        self.x.contains(&point.x).then_some(RayHit {
            point,
            normal: self.normal,
        })
    }
}

/// Several planes, nearest hit wins.
pub struct Scene(pub Vec<Plane>);

impl Raycast for Scene {
    fn cast(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
    ) -> Option<RayHit> {
        self.0
            .iter()
            .filter_map(|p| p.cast(origin, dir, max_distance))
            .min_by(|a, b| {
                (a.point - origin)
                    .length()
                    .total_cmp(&(b.point - origin).length())
            })
    }
}

/// Convex corner pointing at the origin with its apex at `(apex_x, 0,
/// apex_z)`, each face sloping back at half a unit of depth per unit of x.
pub fn corner(apex_x: f32, apex_z: f32) -> Scene {
    let apex = vec3(apex_x, 0.0, apex_z);
    Scene(vec![
        Plane::facet(apex, vec3(-0.5, 0.0, -1.0), f32::NEG_INFINITY..=apex_x),
        Plane::facet(apex, vec3(0.5, 0.0, -1.0), apex_x..=f32::INFINITY),
    ])
}
