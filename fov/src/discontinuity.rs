use crate::{sample::normals_match, Sample, ViewConeConfig};

/// Kinds of visible boundary that can lie between two neighboring samples.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Discontinuity {
    /// One sample hit something and the other didn't.
    HitFlip,
    /// Both hit, but far apart from each other, probably on different
    /// surfaces.
    DistanceJump,
    /// Both hit, but on surfaces facing different ways.
    NormalChange,
}

use Discontinuity::*;

impl Discontinuity {
    /// All kinds, in the order they are checked.
    pub const ALL: [Discontinuity; 3] = [HitFlip, DistanceJump, NormalChange];

    /// Whether this kind of boundary lies between `prev` and `curr`.
    pub fn lies_between(
        self,
        prev: &Sample,
        curr: &Sample,
        config: &ViewConeConfig,
    ) -> bool {
        match (self, prev, curr) {
            (HitFlip, a, b) => a.is_hit() != b.is_hit(),
            (
                DistanceJump,
                Sample::Hit { position: a, .. },
                Sample::Hit { position: b, .. },
            ) => a.distance(*b) > config.distance_threshold,
            (
                NormalChange,
                Sample::Hit { normal: a, .. },
                Sample::Hit { normal: b, .. },
            ) => !normals_match(*a, *b, config.normal_tolerance),
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use glam::{vec3, Vec3};

    use super::*;

    fn hit(x: f32, z: f32, normal: Vec3) -> Sample {
        Sample::Hit {
            angle: x.atan2(z),
            position: vec3(x, 0.0, z),
            normal,
        }
    }

    fn miss(x: f32, z: f32) -> Sample {
        Sample::Miss {
            angle: x.atan2(z),
            position: vec3(x, 0.0, z),
        }
    }

    fn kinds(a: &Sample, b: &Sample) -> Vec<Discontinuity> {
        let config = ViewConeConfig::default();
        Discontinuity::ALL
            .into_iter()
            .filter(|d| d.lies_between(a, b, &config))
            .collect()
    }

    #[test]
    fn continuous_surface() {
        let a = hit(0.0, 10.0, -Vec3::Z);
        let b = hit(1.0, 10.0, -Vec3::Z);
        assert!(kinds(&a, &b).is_empty());
        assert!(kinds(&miss(0.0, 100.0), &miss(10.0, 100.0)).is_empty());
    }

    #[test]
    fn hit_flip_is_symmetric() {
        let a = hit(0.0, 10.0, -Vec3::Z);
        let b = miss(10.0, 100.0);
        assert_eq!(kinds(&a, &b), vec![HitFlip]);
        assert_eq!(kinds(&b, &a), vec![HitFlip]);
    }

    #[test]
    fn distance_jump() {
        let a = hit(0.0, 5.0, -Vec3::Z);
        let b = hit(1.0, 20.0, -Vec3::Z);
        assert_eq!(kinds(&a, &b), vec![DistanceJump]);

        // Just inside the threshold.
        let c = hit(0.0, 9.9, -Vec3::Z);
        assert!(kinds(&a, &c).is_empty());
    }

    #[test]
    fn normal_change() {
        let a = hit(0.0, 10.0, -Vec3::Z);
        let b = hit(1.0, 10.0, vec3(0.5, 0.0, -1.0).normalize());
        assert_eq!(kinds(&a, &b), vec![NormalChange]);

        // Float noise in the normal stays under the tolerance.
        let c = hit(1.0, 10.0, vec3(1e-6, 0.0, -1.0));
        assert!(kinds(&a, &c).is_empty());

        let exact = ViewConeConfig {
            normal_tolerance: 0.0,
            ..Default::default()
        };
        assert!(NormalChange.lies_between(&a, &c, &exact));
    }

    #[test]
    fn several_at_once() {
        let a = hit(0.0, 5.0, -Vec3::Z);
        let b = hit(1.0, 20.0, vec3(0.5, 0.0, -1.0).normalize());
        assert_eq!(kinds(&a, &b), vec![DistanceJump, NormalChange]);
    }

    #[test]
    fn misses_have_no_normal_or_jump() {
        // Two misses can be far apart at a wide angle gap, that's not a
        // boundary.
        let a = miss(-50.0, 86.6);
        let b = miss(50.0, 86.6);
        assert!(!DistanceJump.lies_between(&a, &b, &ViewConeConfig::default()));
        assert!(!NormalChange.lies_between(&a, &b, &ViewConeConfig::default()));
    }
}
