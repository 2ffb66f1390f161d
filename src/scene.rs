use fov::{RayHit, Raycast};
use glam::{vec2, Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use util::{lift, planar, srng, RngExt};

/// Rays shorter than this in the ground plane are treated as vertical and
/// never hit anything.
const FLAT_EPSILON: f32 = 1e-6;

/// Hits closer than this to the ray origin are ignored so a probe starting
/// on a surface doesn't see it.
const MIN_DISTANCE: f32 = 1e-4;

/// Open space left around the origin by [`Scene::scatter`].
const CLEARING: f32 = 4.0;

/// Flat level made of shapes extruded infinitely along the up axis.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Scene {
    pub walls: Vec<Wall>,
    pub boxes: Vec<AxisBox>,
    pub pillars: Vec<Pillar>,
}

/// Two-sided wall along a ground plane segment.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Wall(pub Vec2, pub Vec2);

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AxisBox {
    pub min: Vec2,
    pub max: Vec2,
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pillar {
    pub center: Vec2,
    pub radius: f32,
}

/// Ground plane intersection, distance along the 3D ray and 2D normal.
type Crossing = (f32, Vec2);

impl Wall {
    fn intersect(&self, origin: Vec2, dir: Vec2) -> Option<Crossing> {
        let Wall(a, b) = *self;
        let edge = b - a;
        let denom = dir.perp_dot(edge);
        if denom == 0.0 {
            return None;
        }

        let offset = a - origin;
        let t = offset.perp_dot(edge) / denom;
        let s = offset.perp_dot(dir) / denom;
        if t < MIN_DISTANCE || !(0.0..=1.0).contains(&s) {
            return None;
        }

        let mut normal = edge.perp().try_normalize()?;
        if normal.dot(dir) > 0.0 {
            normal = -normal;
        }
        Some((t, normal))
    }
}

impl AxisBox {
    pub fn new(center: Vec2, half_size: Vec2) -> Self {
        let half_size = half_size.abs();
        AxisBox {
            min: center - half_size,
            max: center + half_size,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    fn sides(&self) -> [Wall; 4] {
        let (a, c) = (self.min, self.max);
        let (b, d) = (vec2(c.x, a.y), vec2(a.x, c.y));
        [Wall(a, b), Wall(b, c), Wall(c, d), Wall(d, a)]
    }

    fn intersect(&self, origin: Vec2, dir: Vec2) -> Option<Crossing> {
        nearest(self.sides().iter().map(|w| w.intersect(origin, dir)))
    }
}

impl Pillar {
    fn intersect(&self, origin: Vec2, dir: Vec2) -> Option<Crossing> {
        let f = origin - self.center;
        let a = dir.dot(dir);
        let b = f.dot(dir);
        let c = f.dot(f) - self.radius * self.radius;
        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();

        // From inside the pillar, the ray meets the far wall from behind.
        let (t, side) = if c < 0.0 {
            ((-b + root) / a, -1.0)
        } else {
            ((-b - root) / a, 1.0)
        };
        if t < MIN_DISTANCE {
            return None;
        }

        let normal = (origin + dir * t - self.center).try_normalize()?;
        Some((t, normal * side))
    }
}

fn nearest(
    crossings: impl Iterator<Item = Option<Crossing>>,
) -> Option<Crossing> {
    crossings.flatten().min_by(|(a, _), (b, _)| a.total_cmp(b))
}

impl Raycast for Scene {
    fn cast(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
    ) -> Option<RayHit> {
        let (o, d) = (planar(origin), planar(dir));
        if d.length_squared() < FLAT_EPSILON * FLAT_EPSILON {
            return None;
        }

        // The planar direction isn't normalized, so the crossing distance
        // is measured along the 3D ray.
        let crossings = self
            .walls
            .iter()
            .map(|w| w.intersect(o, d))
            .chain(self.boxes.iter().map(|b| b.intersect(o, d)))
            .chain(self.pillars.iter().map(|p| p.intersect(o, d)));

        let (t, normal) = nearest(crossings)?;
        if t > max_distance {
            return None;
        }

        Some(RayHit {
            point: origin + dir * t,
            normal: lift(normal, 0.0),
        })
    }
}

impl Scene {
    /// Generate a random scene of up to `count` shapes inside a disc of
    /// `radius`.
    ///
    /// The same seed always gives the same scene. The area right around the
    /// origin is left open so an observer can start there.
    pub fn scatter(seed: &str, count: usize, radius: f32) -> Scene {
        let mut rng = srng(seed);
        let mut ret = Scene::default();

        // Give up eventually if the disc is too small to fit anything.
        for _ in 0..count * 100 {
            if ret.len() >= count {
                break;
            }
            let pos = rng.point_in_disc(radius);
            let size = rng.gen_range(0.5..3.0);
            if pos.length() < CLEARING + size {
                continue;
            }

            match rng.gen_range(0..3) {
                0 => ret.pillars.push(Pillar {
                    center: pos,
                    radius: size,
                }),
                1 => {
                    let aspect = rng.gen_range(0.3..1.0);
                    ret.boxes
                        .push(AxisBox::new(pos, vec2(size, size * aspect)));
                }
                _ => {
                    let a = rng.gen_range(0.0..std::f32::consts::TAU);
                    let mut span = vec2(a.cos(), a.sin()) * size * 2.0;
                    if rng.one_chance_in(4) {
                        span *= 3.0;
                    }
                    ret.walls.push(Wall(pos - span / 2.0, pos + span / 2.0));
                }
            }
        }

        ret
    }

    /// Number of shapes in the scene.
    pub fn len(&self) -> usize {
        self.walls.len() + self.boxes.len() + self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` is inside any solid shape.
    pub fn is_inside(&self, p: Vec3) -> bool {
        let p = planar(p);
        self.boxes.iter().any(|b| b.contains(p))
            || self
                .pillars
                .iter()
                .any(|c| c.center.distance(p) < c.radius)
    }
}
